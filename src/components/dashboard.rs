//! Dashboard Component
//!
//! Placeholder page reached from the hero button.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <section class="dashboard">
            <h1>"Dashboard"</h1>
            <button on:click=move |_| ctx.navigate(Page::Home)>"Back"</button>
        </section>
    }
}
