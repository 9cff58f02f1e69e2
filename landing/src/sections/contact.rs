//! Phone / email / address block shown in the home page CTA and the quote
//! page sidebar.

use leptos::prelude::*;
use loadmovers_core::{ContactDetails, SiteConfig};

use crate::components::{ICON_MAIL, ICON_MAP_PIN, ICON_PHONE, Icon};

/// Typography used for the contact values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactTone {
    /// Large bold values on the blue CTA panel
    Prominent,
    /// Regular-weight values in the quote sidebar card
    Compact,
}

impl ContactTone {
    fn caption(self) -> &'static str {
        match self {
            ContactTone::Prominent => "text-white/80 text-sm mb-1",
            ContactTone::Compact => "font-semibold mb-1",
        }
    }

    fn value(self) -> &'static str {
        match self {
            ContactTone::Prominent => {
                "text-white font-semibold text-lg hover:text-blue-200 transition-smooth block"
            }
            ContactTone::Compact => "text-white/90 hover:text-white transition-smooth block",
        }
    }
}

#[component]
pub fn ContactList(tone: ContactTone) -> impl IntoView {
    let contact = use_context::<SiteConfig>().unwrap_or_default().contact;
    let email_href = contact.email_href();
    let ContactDetails {
        phones,
        email,
        address,
    } = contact;

    view! {
        <div class="space-y-6">
            <ContactRow icon=ICON_PHONE>
                <div class=tone.caption()>"Call Us"</div>
                {phones
                    .into_iter()
                    .map(|phone| {
                        let href = ContactDetails::phone_href(&phone);
                        view! {
                            <a href=href class=tone.value()>
                                {phone}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ContactRow>
            <ContactRow icon=ICON_MAIL>
                <div class=tone.caption()>"Email Us"</div>
                <a href=email_href class=tone.value()>{email}</a>
            </ContactRow>
            <ContactRow icon=ICON_MAP_PIN>
                <div class=tone.caption()>"Visit Us"</div>
                <div class=tone.value()>{address}</div>
            </ContactRow>
        </div>
    }
}

#[component]
fn ContactRow(icon: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4">
            <div class="bg-white/20 rounded-lg p-3 flex-shrink-0 text-white">
                <Icon path=icon />
            </div>
            <div>{children()}</div>
        </div>
    }
}
