// Home page - hero, services, why choose us, gallery, call to action
use crate::sections::{CallToAction, Footer, Gallery, Header, Hero, Services, WhyChooseUs};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    tracing::debug!("home page mounted");
    view! {
        <div class="min-h-screen">
            <Header />
            <main>
                <Hero />
                <Services />
                <WhyChooseUs />
                <Gallery />
                <CallToAction />
            </main>
            <Footer />
        </div>
    }
}
