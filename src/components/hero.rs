//! Hero Component
//!
//! Page header with the dashboard link.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <section class="hero">
            <span class="badge secondary">"Welcome to Your Todo App"</span>
            <h1>"Manage Your Startup Tasks"</h1>
            <p class="hero-subtitle">"Organize tasks by categories and subcategories."</p>
            <button class="btn-lg" on:click=move |_| ctx.navigate(Page::Dashboard)>
                "View Dashboard →"
            </button>
        </section>
    }
}
