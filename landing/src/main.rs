// Load Movers website, Leptos 0.8 edition
// Load Movers (Pvt) Ltd, Cape Town

mod components;
mod pages;
mod sections;
mod theme;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use loadmovers_core::SiteConfig;
use pages::{HomePage, NotFoundPage, QuotePage};
use theme::Theme;

/// Compiled into the binary; see `site.toml` next to Cargo.toml.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    leptos::mount::mount_to_body(App);
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build(),
    );
}

#[component]
fn App() -> impl IntoView {
    provide_context(SiteConfig::embedded(SITE_TOML));
    provide_context(RwSignal::new(Theme::default()));

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/quote") view=QuotePage />
            </Routes>
        </Router>
    }
}
