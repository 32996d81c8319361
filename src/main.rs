//! NexForum Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod error;
mod format;
mod models;
mod page;
mod pages;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("[APP] NexForum client starting");
    mount_to_body(App);
}
