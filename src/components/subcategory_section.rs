//! Subcategory Section Component
//!
//! Name, todo list and input for one subcategory.

use leptos::prelude::*;

use crate::components::NewTodoInput;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::tree::SubSection;

#[component]
pub fn SubcategorySection(section: SubSection) -> impl IntoView {
    let store = use_app_store();
    let id = section.id;

    // Re-read from the store so new todos show up without re-keying the section
    let todos = move || store.tree().with(|tree| tree.todos_of(id).to_vec());

    view! {
        <div class="subcategory">
            <h4>{section.name}</h4>
            <ul class="todo-list">
                <For
                    each=todos
                    key=|todo| todo.id
                    children=move |todo| view! { <li class="todo-text">{todo.text}</li> }
                />
            </ul>
            <NewTodoInput category_id=id />
        </div>
    }
}
