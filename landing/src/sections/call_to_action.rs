use leptos::prelude::*;
use loadmovers_core::content::{CTA_HEADING, CTA_LEAD};

use super::{ContactList, ContactTone};
use crate::components::LinkButton;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="bg-blue-600 py-16 md:py-20 px-4 md:px-8 relative overflow-hidden">
            // Decorative blurs
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute top-10 left-10 w-64 h-64 bg-blue-500/30 rounded-full blur-3xl"></div>
                <div class="absolute bottom-10 right-10 w-96 h-96 bg-blue-400/20 rounded-full blur-3xl"></div>
            </div>

            <div class="relative max-w-7xl mx-auto">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div class="text-white">
                        <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold mb-6">{CTA_HEADING}</h2>
                        <p class="text-lg md:text-xl mb-8 text-blue-50 leading-relaxed">{CTA_LEAD}</p>
                        <LinkButton
                            href="/quote"
                            variant="bg-blue-700 text-white hover:bg-blue-50 hover:text-blue-700 shadow-lg border-2 border-white"
                            class="text-lg font-bold px-8 py-4"
                        >
                            "Get Your Free Quote →"
                        </LinkButton>
                    </div>

                    <div class="bg-white/20 backdrop-blur-md rounded-2xl p-8 shadow-xl border border-white/30">
                        <h3 class="text-2xl font-bold text-white mb-6">"Contact Us Directly"</h3>
                        <ContactList tone=ContactTone::Prominent />
                    </div>
                </div>
            </div>
        </section>
    }
}
