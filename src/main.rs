//! Portfolio Frontend Entry Point

mod models;
mod content;
mod theme;
mod layout;
mod context;
mod components;
mod app;

use app::App;
use components::LoadError;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    match content::portfolio() {
        Ok(portfolio) => {
            web_sys::console::log_1(
                &format!(
                    "[APP] Loaded {} projects, {} skill groups",
                    portfolio.projects.len(),
                    portfolio.skills.len()
                )
                .into(),
            );
            mount_to_body(move || view! { <App portfolio=portfolio /> });
        }
        Err(message) => {
            web_sys::console::error_1(&format!("[APP] {}", message).into());
            mount_to_body(move || view! { <LoadError message=message /> });
        }
    }
}
