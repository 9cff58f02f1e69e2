// Home page sections plus the chrome shared with the quote page
// Load Movers (Pvt) Ltd, Cape Town

mod call_to_action;
mod contact;
mod footer;
mod gallery;
mod header;
mod hero;
mod services;
mod why_choose_us;

pub use call_to_action::CallToAction;
pub use contact::{ContactList, ContactTone};
pub use footer::Footer;
pub use gallery::Gallery;
pub use header::Header;
pub use hero::Hero;
pub use services::Services;
pub use why_choose_us::WhyChooseUs;
