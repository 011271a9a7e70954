//! Category Tree State
//!
//! Snapshot-based state container for the category tree. Every mutation goes
//! through the pure [`apply`] reducer, which returns a new [`Snapshot`] and
//! shares every untouched branch with the previous one.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{TreeError, TreeResult};
use crate::models::{seed_categories, Category, Todo};

/// Which categories `AddTodo` may target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupScope {
    /// Only immediate subcategories of a root
    #[default]
    DirectSubcategories,
    /// Any category, roots and deeper nesting included
    AnyDepth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TreeConfig {
    #[serde(default)]
    pub lookup: LookupScope,
}

/// Immutable view of the whole tree at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Arc<Vec<Arc<Category>>>);

impl Snapshot {
    pub fn new(roots: Vec<Arc<Category>>) -> Self {
        Self(Arc::new(roots))
    }

    pub fn roots(&self) -> &[Arc<Category>] {
        &self.0
    }

    /// True when both snapshots are the same allocation
    pub fn ptr_eq(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Find a category reachable under `scope`
    pub fn find(&self, category_id: u32, scope: LookupScope) -> Option<&Arc<Category>> {
        match scope {
            LookupScope::DirectSubcategories => self
                .roots()
                .iter()
                .flat_map(|root| root.subcategories.iter())
                .find(|sub| sub.id == category_id),
            LookupScope::AnyDepth => self
                .roots()
                .iter()
                .find_map(|root| find_in(root, category_id)),
        }
    }
}

fn find_in(node: &Arc<Category>, category_id: u32) -> Option<&Arc<Category>> {
    if node.id == category_id {
        return Some(node);
    }
    node.subcategories
        .iter()
        .find_map(|sub| find_in(sub, category_id))
}

/// Mutations understood by [`apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddTodo { category_id: u32, text: String },
}

/// Pure reducer: `snapshot` + `command` -> next snapshot.
///
/// Roots and subcategories that do not match are reused by reference. The
/// top-level sequence is always freshly allocated, even when nothing matched.
pub fn apply(snapshot: &Snapshot, command: Command, todo_id: u64, scope: LookupScope) -> Snapshot {
    match command {
        Command::AddTodo { category_id, text } => {
            let todo = Todo::new(todo_id, text);
            let roots = snapshot
                .roots()
                .iter()
                .map(|root| match scope {
                    LookupScope::DirectSubcategories => append_direct(root, category_id, &todo),
                    LookupScope::AnyDepth => append_any(root, category_id, &todo),
                })
                .collect();
            Snapshot::new(roots)
        }
    }
}

fn append_direct(root: &Arc<Category>, category_id: u32, todo: &Todo) -> Arc<Category> {
    if !root.subcategories.iter().any(|sub| sub.id == category_id) {
        return Arc::clone(root);
    }
    let subcategories = root
        .subcategories
        .iter()
        .map(|sub| {
            if sub.id == category_id {
                Arc::new(sub.with_todo(todo.clone()))
            } else {
                Arc::clone(sub)
            }
        })
        .collect();
    Arc::new(Category {
        id: root.id,
        name: root.name.clone(),
        todos: root.todos.clone(),
        subcategories,
    })
}

fn append_any(node: &Arc<Category>, category_id: u32, todo: &Todo) -> Arc<Category> {
    if find_in(node, category_id).is_none() {
        return Arc::clone(node);
    }
    let mut next = if node.id == category_id {
        node.with_todo(todo.clone())
    } else {
        (**node).clone()
    };
    next.subcategories = node
        .subcategories
        .iter()
        .map(|sub| append_any(sub, category_id, todo))
        .collect();
    Arc::new(next)
}

/// Source of todo ids, in milliseconds
pub type Clock = fn() -> u64;

/// Wall-clock milliseconds (`Date.now()` in the browser)
pub fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }
}

/// State container holding the current snapshot
#[derive(Debug, Clone)]
pub struct CategoryTree {
    snapshot: Snapshot,
    config: TreeConfig,
    clock: Clock,
    last_todo_id: u64,
}

impl Default for CategoryTree {
    fn default() -> Self {
        Self::new(TreeConfig::default())
    }
}

impl CategoryTree {
    /// Seeded tree using the wall clock for todo ids
    pub fn new(config: TreeConfig) -> Self {
        Self::with_roots(seed_categories(), config, now_millis)
    }

    pub fn with_roots(roots: Vec<Arc<Category>>, config: TreeConfig, clock: Clock) -> Self {
        Self {
            snapshot: Snapshot::new(roots),
            config,
            clock,
            last_todo_id: 0,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn roots(&self) -> &[Arc<Category>] {
        self.snapshot.roots()
    }

    pub fn config(&self) -> TreeConfig {
        self.config
    }

    pub fn find(&self, category_id: u32) -> Option<&Arc<Category>> {
        self.snapshot.find(category_id, self.config.lookup)
    }

    /// Todos of a category reachable under the configured scope; empty when absent
    pub fn todos_of(&self, category_id: u32) -> &[Todo] {
        self.find(category_id)
            .map(|cat| cat.todos.as_slice())
            .unwrap_or(&[])
    }

    /// Append a todo to `category_id`. Unknown ids leave every todo list as is.
    pub fn add_todo(&mut self, category_id: u32, text: impl Into<String>) {
        let todo_id = self.next_todo_id();
        let command = Command::AddTodo {
            category_id,
            text: text.into(),
        };
        self.snapshot = apply(&self.snapshot, command, todo_id, self.config.lookup);
    }

    /// Like [`add_todo`](Self::add_todo) but rejects empty text and unknown ids
    pub fn try_add_todo(&mut self, category_id: u32, text: impl Into<String>) -> TreeResult<()> {
        let text = text.into();
        self.validate(category_id, &text)?;
        self.add_todo(category_id, text);
        Ok(())
    }

    fn validate(&self, category_id: u32, text: &str) -> TreeResult<()> {
        if text.is_empty() {
            return Err(TreeError::EmptyText);
        }
        if self.find(category_id).is_none() {
            return Err(TreeError::UnknownCategory(category_id));
        }
        Ok(())
    }

    // Clock value, bumped past the last id when the clock has not advanced
    fn next_todo_id(&mut self) -> u64 {
        let id = (self.clock)().max(self.last_todo_id + 1);
        self.last_todo_id = id;
        id
    }
}
