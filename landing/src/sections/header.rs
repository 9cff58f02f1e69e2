use leptos::prelude::*;
use loadmovers_core::content::COMPANY_NAME;

use crate::components::{LinkButton, Logo};
use crate::theme::ThemeToggle;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-white/80 dark:bg-gray-900/80 backdrop-blur-md shadow-sm sticky top-0 z-50 border-b border-gray-200/50 dark:border-gray-700/50">
            <nav class="max-w-7xl mx-auto px-4 md:px-8 py-4">
                <div class="flex items-center justify-between">
                    <a href="/" class="flex items-center gap-3 hover:opacity-80 transition-smooth">
                        <Logo />
                        <span class="text-xl md:text-2xl font-bold text-gray-900 dark:text-white">
                            {COMPANY_NAME}
                        </span>
                    </a>
                    <div class="flex items-center gap-3 md:gap-4">
                        <a
                            href="/"
                            class="text-gray-700 dark:text-gray-300 hover:text-primary dark:hover:text-primary-light transition-smooth font-medium hidden md:block"
                        >
                            "Home"
                        </a>
                        <ThemeToggle />
                        <LinkButton href="/quote">"Get Quote"</LinkButton>
                    </div>
                </div>
            </nav>
        </header>
    }
}
