//! Category Todos App
//!
//! Root component: store, context and page switch.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CategoryCard, Dashboard, Hero};
use crate::context::{AppContext, Page};
use crate::state::TreeConfig;
use crate::store::{AppState, AppStateStoreFields, AppStore};
use crate::tree::sections;

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new(TreeConfig::default()));
    provide_context(store);

    let (page, set_page) = signal(Page::Home);
    provide_context(AppContext::new((page, set_page)));

    // Keyed by root id below; todo lists are read per subcategory section
    let roots = Memo::new(move |_| store.tree().with(|tree| sections(tree.roots())));

    Effect::new(move |_| {
        let count: usize = store.tree().with(|tree| {
            tree.roots()
                .iter()
                .flat_map(|root| root.subcategories.iter())
                .map(|sub| sub.todos.len())
                .sum()
        });
        web_sys::console::log_1(&format!("[APP] Snapshot updated, {} todos", count).into());
    });

    view! {
        <div class="container">
            {move || match page.get() {
                Page::Home => view! {
                    <Hero />
                    <section class="categories">
                        <For
                            each=move || roots.get()
                            key=|section| section.id
                            children=move |section| view! { <CategoryCard section=section /> }
                        />
                    </section>
                }.into_any(),
                Page::Dashboard => view! { <Dashboard /> }.into_any(),
            }}
        </div>
    }
}
