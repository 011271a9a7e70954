//! Category Card Component
//!
//! One root category and its direct subcategories.

use leptos::prelude::*;

use crate::components::SubcategorySection;
use crate::tree::RootSection;

#[component]
pub fn CategoryCard(section: RootSection) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-content">
                <h3>{section.name}</h3>
                <div class="accordion">
                    {section
                        .subcategories
                        .into_iter()
                        .map(|sub| view! { <SubcategorySection section=sub /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
