//! Card, section wrapper and link-styled button.

use leptos::prelude::*;
use loadmovers_core::content::SectionCopy;

const BUTTON_BASE: &str = "inline-block px-6 py-3 rounded-lg font-semibold text-base transition-smooth transform hover:scale-105 active:scale-95";

/// Rounded white panel with hover shadow.
#[component]
pub fn Card(#[prop(default = "")] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!(
            "bg-white dark:bg-gray-800 rounded-xl shadow-md hover:shadow-xl transition-smooth p-6 {class}"
        )>{children()}</div>
    }
}

/// Home page section with centered heading block.
#[component]
pub fn SectionWrapper(
    copy: SectionCopy,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=copy.id class=format!("py-16 md:py-24 px-4 md:px-8 {class}")>
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-12 animate-fade-in">
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold text-gray-900 dark:text-white mb-4">
                        {copy.title}
                    </h2>
                    <p class="text-lg md:text-xl text-gray-600 dark:text-gray-300 max-w-2xl mx-auto">
                        {copy.subtitle}
                    </p>
                </div>
                {children()}
            </div>
        </section>
    }
}

/// Anchor styled as a primary button. The router intercepts same-origin
/// clicks, so `href="/quote"` navigates client-side.
#[component]
pub fn LinkButton(
    href: &'static str,
    #[prop(default = "bg-primary text-white hover:bg-primary-dark shadow-lg hover:shadow-xl")]
    variant: &'static str,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=format!("{BUTTON_BASE} {variant} {class}")>
            {children()}
        </a>
    }
}
