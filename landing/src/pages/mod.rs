// Routed pages
// Load Movers (Pvt) Ltd, Cape Town

mod home;
mod not_found;
mod quote;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use quote::QuotePage;
