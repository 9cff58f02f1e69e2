use leptos::prelude::*;
use loadmovers_core::content::{REASONS, WHY_HEADING, WHY_PARAGRAPHS, WHY_SECTION};

use crate::components::{Card, SectionWrapper};

#[component]
pub fn WhyChooseUs() -> impl IntoView {
    view! {
        <SectionWrapper copy=WHY_SECTION>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 lg:gap-12 items-start">
                <div class="lg:sticky lg:top-24">
                    <h3 class="text-2xl md:text-3xl font-bold text-gray-900 dark:text-white mb-6">
                        {WHY_HEADING}
                    </h3>
                    {WHY_PARAGRAPHS
                        .into_iter()
                        .map(|text| {
                            view! {
                                <p class="text-lg text-gray-700 dark:text-gray-300 leading-relaxed mb-4">
                                    {text}
                                </p>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-1 gap-6">
                    {REASONS
                        .into_iter()
                        .map(|reason| {
                            view! {
                                <Card class="hover:border-primary border-2 border-transparent animate-slide-up">
                                    <div class="flex items-start gap-4">
                                        <div class="text-4xl flex-shrink-0">{reason.icon}</div>
                                        <div>
                                            <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-2">
                                                {reason.title}
                                            </h3>
                                            <p class="text-gray-600 dark:text-gray-300">{reason.description}</p>
                                        </div>
                                    </div>
                                </Card>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </SectionWrapper>
    }
}
