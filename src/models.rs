//! Frontend Models
//!
//! Category tree data structures and the seed the page starts from.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A single task inside a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// A named node of the task tree.
///
/// Subcategories sit behind `Arc` so snapshots can share untouched branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub subcategories: Vec<Arc<Category>>,
}

impl Category {
    /// Create an empty leaf category
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            todos: Vec::new(),
            subcategories: Vec::new(),
        }
    }

    /// Builder-style helper for nesting
    pub fn with_subcategories(mut self, subcategories: Vec<Category>) -> Self {
        self.subcategories = subcategories.into_iter().map(Arc::new).collect();
        self
    }

    /// Copy of this category with one more todo at the end
    pub fn with_todo(&self, todo: Todo) -> Self {
        let mut todos = Vec::with_capacity(self.todos.len() + 1);
        todos.extend(self.todos.iter().cloned());
        todos.push(todo);
        Self {
            id: self.id,
            name: self.name.clone(),
            todos,
            subcategories: self.subcategories.clone(),
        }
    }
}

/// Roots the page starts with: Marketing(Social Media), Development(Repo1, Repo2)
pub fn seed_categories() -> Vec<Arc<Category>> {
    vec![
        Category::new(1, "Marketing").with_subcategories(vec![Category::new(2, "Social Media")]),
        Category::new(3, "Development")
            .with_subcategories(vec![Category::new(4, "Repo1"), Category::new(5, "Repo2")]),
    ]
    .into_iter()
    .map(Arc::new)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let roots = seed_categories();
        let ids: Vec<u32> = roots.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert_eq!(roots[0].name, "Marketing");
        let marketing: Vec<(u32, &str)> = roots[0]
            .subcategories
            .iter()
            .map(|c| (c.id, c.name.as_str()))
            .collect();
        assert_eq!(marketing, vec![(2, "Social Media")]);

        assert_eq!(roots[1].name, "Development");
        let development: Vec<(u32, &str)> = roots[1]
            .subcategories
            .iter()
            .map(|c| (c.id, c.name.as_str()))
            .collect();
        assert_eq!(development, vec![(4, "Repo1"), (5, "Repo2")]);

        for root in &roots {
            assert!(root.todos.is_empty());
            for sub in &root.subcategories {
                assert!(sub.todos.is_empty());
                assert!(sub.subcategories.is_empty());
            }
        }
    }

    #[test]
    fn test_with_todo_leaves_original() {
        let cat = Category::new(9, "Ops");
        let next = cat.with_todo(Todo::new(1, "deploy".to_string()));

        assert!(cat.todos.is_empty());
        assert_eq!(next.todos, vec![Todo::new(1, "deploy".to_string())]);
        assert_eq!(next.id, 9);
        assert_eq!(next.name, "Ops");
    }

    #[test]
    fn test_json_field_names() {
        let cat = Category::new(2, "Social Media").with_todo(Todo::new(7, "post".to_string()));
        let json = serde_json::to_value(&cat).unwrap();

        assert_eq!(json["id"], 2);
        assert_eq!(json["name"], "Social Media");
        assert_eq!(json["todos"][0]["text"], "post");
        assert_eq!(json["todos"][0]["completed"], false);
        assert!(json["subcategories"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_deserialize_defaults() {
        let cat: Category = serde_json::from_str(r#"{"id": 4, "name": "Repo1"}"#).unwrap();
        assert_eq!(cat, Category::new(4, "Repo1"));

        let todo: Todo = serde_json::from_str(r#"{"id": 1, "text": "x"}"#).unwrap();
        assert!(!todo.completed);
    }
}
