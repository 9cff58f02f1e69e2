//! Truck-and-arrow logo mark.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LogoSize {
    fn class(self) -> &'static str {
        match self {
            LogoSize::Small => "w-8 h-8",
            LogoSize::Medium => "w-10 h-10",
            LogoSize::Large => "w-12 h-12",
        }
    }
}

#[component]
pub fn Logo(#[prop(optional)] size: LogoSize) -> impl IntoView {
    view! {
        <svg class=size.class() viewBox="0 0 100 100" fill="none" xmlns="http://www.w3.org/2000/svg">
            // Truck body
            <rect x="20" y="40" width="50" height="35" rx="3" class="fill-primary" />
            // Box on truck
            <rect x="25" y="30" width="25" height="20" rx="2" class="fill-primary-dark" />
            // Wheels
            <circle cx="32" cy="80" r="8" class="fill-gray-800" />
            <circle cx="58" cy="80" r="8" class="fill-gray-800" />
            // Movement arrow
            <path
                d="M70 50 L85 50 M80 45 L85 50 L80 55"
                stroke-width="4"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="stroke-primary"
            />
        </svg>
    }
}
