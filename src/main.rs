//! Exam Portal Frontend Entry Point

mod api;
mod app;
mod captcha;
mod components;
mod context;
mod download;
mod models;
mod pdf;
mod schedule;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
