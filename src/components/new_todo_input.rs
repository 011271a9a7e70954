//! New Todo Input Component
//!
//! Text input that adds a todo to its subcategory on Enter.

use leptos::prelude::*;

use crate::store::{store_add_todo, use_app_store};

/// Input bound to one subcategory
#[component]
pub fn NewTodoInput(category_id: u32) -> impl IntoView {
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let text = new_text.get();
        if text.is_empty() {
            return;
        }
        match store_add_todo(&store, category_id, text) {
            Ok(()) => set_new_text.set(String::new()),
            Err(e) => {
                web_sys::console::error_1(
                    &format!("[TODO] Add to #{} failed: {}", category_id, e).into(),
                );
            }
        }
    };

    view! {
        <input
            type="text"
            class="new-todo-input"
            placeholder="Add a new todo"
            prop:value=move || new_text.get()
            on:input=move |ev| set_new_text.set(event_target_value(&ev))
            on:keydown=on_keydown
        />
    }
}
