//! UI Components
//!
//! Leptos components rendering the category tree.

mod category_card;
mod dashboard;
mod hero;
mod new_todo_input;
mod subcategory_section;

pub use category_card::CategoryCard;
pub use dashboard::Dashboard;
pub use hero::Hero;
pub use new_todo_input::NewTodoInput;
pub use subcategory_section::SubcategorySection;
