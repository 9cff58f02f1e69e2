//! Light/dark theme toggle.
//!
//! The theme lives in a context signal so it survives navigation between
//! pages. Applying it flips the `dark` class on `<html>` (Tailwind's class
//! strategy) and swaps the favicon.

use leptos::prelude::*;

use crate::components::{ICON_MOON, ICON_SUN, Icon};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn favicon(self) -> &'static str {
        match self {
            Theme::Light => "/favicon.svg",
            Theme::Dark => "/favicon-dark.svg",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Push the theme into the document.
fn apply(theme: Theme) {
    let document = document();
    if let Some(root) = document.document_element() {
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    }
    if let Some(favicon) = document.get_element_by_id("favicon") {
        let _ = favicon.set_attribute("href", theme.favicon());
    }
    tracing::debug!(?theme, "theme applied");
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme =
        use_context::<RwSignal<Theme>>().unwrap_or_else(|| RwSignal::new(Theme::default()));

    Effect::new(move || apply(theme.get()));

    view! {
        <button
            type="button"
            class="p-2 rounded-lg text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800 transition-smooth"
            aria-label=move || if theme.get().is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            {move || {
                if theme.get().is_dark() {
                    view! { <Icon path=ICON_SUN class="w-5 h-5" /> }
                } else {
                    view! { <Icon path=ICON_MOON class="w-5 h-5" /> }
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_returns() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn favicon_per_theme() {
        assert_eq!(Theme::Light.favicon(), "/favicon.svg");
        assert_eq!(Theme::Dark.favicon(), "/favicon-dark.svg");
    }
}
