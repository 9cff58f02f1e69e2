use leptos::prelude::*;
use loadmovers_core::ServiceType;
use loadmovers_core::content::SERVICES_SECTION;

use crate::components::{Card, LinkButton, SectionWrapper};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <SectionWrapper copy=SERVICES_SECTION class="bg-gray-50 dark:bg-gray-950">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 md:gap-8">
                {ServiceType::ALL
                    .into_iter()
                    .enumerate()
                    .map(|(index, service)| view! { <ServiceCard service=service index=index /> })
                    .collect::<Vec<_>>()}
            </div>
        </SectionWrapper>
    }
}

#[component]
fn ServiceCard(service: ServiceType, index: usize) -> impl IntoView {
    let delay = format!("animation-delay: {:.1}s", index as f32 * 0.1);
    view! {
        <div style=delay>
            <Card class="h-full text-center hover:border-primary border-2 border-transparent animate-slide-up">
                <div class="text-5xl mb-4">{service.icon()}</div>
                <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-3">{service.label()}</h3>
                <p class="text-gray-600 dark:text-gray-300 mb-6">{service.description()}</p>
                <LinkButton href="/quote" class="w-full">"Get Quote"</LinkButton>
            </Card>
        </div>
    }
}
