use leptos::prelude::*;
use loadmovers_core::content::COMPANY_NAME;
use loadmovers_core::{ContactDetails, ServiceType, SiteConfig};

use crate::components::{Logo, LogoSize};

#[component]
pub fn Footer() -> impl IntoView {
    let contact = use_context::<SiteConfig>().unwrap_or_default().contact;
    let email_href = contact.email_href();

    view! {
        <footer class="bg-gray-900 text-gray-300 py-12 px-4 md:px-8">
            <div class="max-w-7xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-8">
                <div>
                    <a href="/" class="flex items-center gap-3 mb-4">
                        <Logo size=LogoSize::Small />
                        <span class="text-xl font-bold text-white">{COMPANY_NAME}</span>
                    </a>
                    <p class="text-sm text-gray-400">
                        "Moving, hauling and rubble removal across Cape Town."
                    </p>
                </div>
                <div>
                    <h4 class="text-white font-semibold mb-4">"Services"</h4>
                    <ul class="space-y-2 text-sm">
                        {ServiceType::ALL
                            .into_iter()
                            .map(|s| view! { <li><a href="/#services" class="hover:text-white">{s.label()}</a></li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <div>
                    <h4 class="text-white font-semibold mb-4">"Contact"</h4>
                    <ul class="space-y-2 text-sm">
                        {contact
                            .phones
                            .iter()
                            .map(|phone| {
                                view! {
                                    <li>
                                        <a href=ContactDetails::phone_href(phone) class="hover:text-white">
                                            {phone.clone()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                        <li><a href=email_href class="hover:text-white">{contact.email.clone()}</a></li>
                        <li>{contact.address.clone()}</li>
                    </ul>
                </div>
            </div>
            <p class="max-w-7xl mx-auto mt-8 pt-8 border-t border-gray-800 text-center text-sm text-gray-500">
                "© Load Movers (Pvt) Ltd. All rights reserved."
            </p>
        </footer>
    }
}
