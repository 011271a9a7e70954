//! Tree Errors
//!
//! Returned only by the validated add path; `add_todo` itself cannot fail.

pub type TreeResult<T> = Result<T, TreeError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    EmptyText,
    UnknownCategory(u32),
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::EmptyText => write!(f, "Invalid input: todo text is empty"),
            TreeError::UnknownCategory(id) => write!(f, "Not found: category #{}", id),
        }
    }
}

impl std::error::Error for TreeError {}
