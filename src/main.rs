#![allow(warnings)]
//! Category Todos Frontend Entry Point

mod app;
mod components;
mod context;
mod error;
mod models;
mod state;
mod store;
mod tree;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
