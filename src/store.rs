//! Global Application State Store
//!
//! Uses Leptos reactive_stores; the category tree lives in one field so every
//! new snapshot notifies the views reading it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::TreeResult;
use crate::state::{CategoryTree, TreeConfig};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Category tree and its current snapshot
    pub tree: CategoryTree,
}

impl AppState {
    pub fn new(config: TreeConfig) -> Self {
        Self {
            tree: CategoryTree::new(config),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a todo through the validated path
pub fn store_add_todo(store: &AppStore, category_id: u32, text: String) -> TreeResult<()> {
    store.tree().write().try_add_todo(category_id, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TreeError;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_store_add_todo() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::default());

            assert_eq!(store_add_todo(&store, 2, "launch".to_string()), Ok(()));
            assert_eq!(
                store_add_todo(&store, 2, String::new()),
                Err(TreeError::EmptyText)
            );
            assert_eq!(
                store_add_todo(&store, 1, "root".to_string()),
                Err(TreeError::UnknownCategory(1))
            );

            // rejected adds leave the snapshot as it was
            store.tree().with_untracked(|tree| {
                assert_eq!(tree.todos_of(2).len(), 1);
                let texts: Vec<&str> = tree.todos_of(2).iter().map(|t| t.text.as_str()).collect();
                assert_eq!(texts, vec!["launch"]);
                assert!(tree.roots()[0].todos.is_empty());
            });
        });
    }
}
