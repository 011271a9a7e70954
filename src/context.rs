//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Pages the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Dashboard,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Switch to another page
    pub fn navigate(&self, page: Page) {
        web_sys::console::log_1(&format!("[APP] Navigate to {:?}", page).into());
        self.set_page.set(page);
    }
}
