// Fallback for unknown paths
use crate::components::LinkButton;
use crate::sections::{Footer, Header};
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Header />
        <section class="min-h-[60vh] flex flex-col items-center justify-center text-center px-4">
            <h1 class="text-5xl font-bold text-gray-900 dark:text-white mb-4">"Page not found"</h1>
            <p class="text-lg text-gray-600 dark:text-gray-300 mb-8">
                "That page has moved. Unlike your furniture, we can't find it."
            </p>
            <LinkButton href="/">"Back to Home"</LinkButton>
        </section>
        <Footer />
    }
}
