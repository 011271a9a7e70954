//! Tree Utilities
//!
//! Render walk over a snapshot: roots, then their direct subcategories.

use std::sync::Arc;

use crate::models::{Category, Todo};

/// A root category as the page draws it
#[derive(Debug, Clone, PartialEq)]
pub struct RootSection {
    pub id: u32,
    pub name: String,
    pub subcategories: Vec<SubSection>,
}

/// A direct subcategory with its todos in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct SubSection {
    pub id: u32,
    pub name: String,
    pub todos: Vec<Todo>,
}

/// Walk roots and their direct subcategories. Deeper levels are not rendered.
pub fn sections(roots: &[Arc<Category>]) -> Vec<RootSection> {
    roots
        .iter()
        .map(|root| RootSection {
            id: root.id,
            name: root.name.clone(),
            subcategories: root
                .subcategories
                .iter()
                .map(|sub| SubSection {
                    id: sub.id,
                    name: sub.name.clone(),
                    todos: sub.todos.clone(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_categories;
    use crate::state::{CategoryTree, TreeConfig};

    fn fixed_clock() -> u64 {
        100
    }

    #[test]
    fn test_sections_of_seed() {
        let tree = sections(&seed_categories());

        // Marketing(Social Media), Development(Repo1, Repo2)
        assert_eq!(tree.len(), 2);
        assert_eq!((tree[0].id, tree[0].name.as_str()), (1, "Marketing"));
        assert_eq!(tree[0].subcategories.len(), 1);
        assert_eq!(tree[0].subcategories[0].name, "Social Media");
        assert_eq!((tree[1].id, tree[1].name.as_str()), (3, "Development"));
        let subs: Vec<u32> = tree[1].subcategories.iter().map(|s| s.id).collect();
        assert_eq!(subs, vec![4, 5]);
    }

    #[test]
    fn test_sections_follow_snapshot() {
        let mut state =
            CategoryTree::with_roots(seed_categories(), TreeConfig::default(), fixed_clock);
        state.add_todo(5, "first");
        state.add_todo(5, "second");

        let tree = sections(state.roots());
        let repo2 = &tree[1].subcategories[1];
        let texts: Vec<&str> = repo2.todos.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert!(tree[1].subcategories[0].todos.is_empty());
    }

    #[test]
    fn test_deeper_levels_skipped() {
        let roots = vec![Arc::new(Category::new(1, "Root").with_subcategories(vec![
            Category::new(2, "Child").with_subcategories(vec![Category::new(3, "Grandchild")]),
        ]))];

        let tree = sections(&roots);
        assert_eq!(tree[0].subcategories.len(), 1);
        assert_eq!(tree[0].subcategories[0].id, 2);
    }
}
