//! Form Builder Frontend Entry Point

mod config;
mod models;
mod catalog;
mod form;
mod responses;
mod storage;
mod persistence;
mod session;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = rolling_logger::init(config::LOG_LEVEL, config::LOG_CAPACITY) {
        web_sys::console::warn_1(&format!("[APP] Logger already set: {}", err).into());
    }
    mount_to_body(App);
}
