#![allow(warnings)]
//! To-do Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod dom;
mod error;
mod focus;
mod list;
mod models;
mod row;
mod shadow;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init(rolling_logger::LevelFilter::DEBUG) {
        web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
