use leptos::prelude::*;
use loadmovers_core::content::{HERO_BACKGROUND, HERO_LEAD, HERO_TAG, STATS};

use crate::components::{ICON_SWAP, Icon, LinkButton};

#[component]
pub fn Hero() -> impl IntoView {
    let background = format!("background-image: url(\"{HERO_BACKGROUND}\"); background-position: center;");
    view! {
        <section class="relative text-white py-20 md:py-32 px-4 md:px-8 overflow-hidden min-h-screen flex items-center">
            <div class="absolute inset-0 bg-cover bg-center" style=background></div>
            <div class="absolute inset-0 bg-blue-900/70"></div>

            <div class="relative max-w-7xl mx-auto w-full z-10">
                <div class="mb-8 inline-flex items-center gap-2 bg-white/10 backdrop-blur-sm px-4 py-2 rounded-full border border-white/20">
                    <Icon path=ICON_SWAP class="w-5 h-5" />
                    <span class="text-sm font-medium">{HERO_TAG}</span>
                </div>

                <div class="mb-8">
                    <h1 class="text-5xl md:text-7xl lg:text-8xl font-bold mb-4 animate-slide-up">
                        "We Move " <span class="text-blue-400">"Everything."</span>
                    </h1>
                    <p class="text-lg md:text-xl lg:text-2xl max-w-3xl text-gray-100 leading-relaxed animate-slide-up">
                        {HERO_LEAD}
                    </p>
                </div>

                <div class="mb-16 animate-slide-up">
                    <LinkButton
                        href="/quote"
                        variant="bg-blue-600 hover:bg-blue-700 text-white shadow-lg"
                        class="text-lg px-8 py-4"
                    >
                        "Get Free Quote →"
                    </LinkButton>
                </div>

                <div class="flex flex-col md:flex-row items-start gap-8 md:gap-12 animate-slide-up">
                    {STATS
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div>
                                    <div class="text-4xl md:text-5xl font-bold mb-2">{stat.value}</div>
                                    <div class="text-lg md:text-xl text-gray-200">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
