//! Presentational building blocks shared by the sections and pages.

mod cards;
mod icons;
mod logo;

pub use cards::{Card, LinkButton, SectionWrapper};
pub use icons::*;
pub use logo::{Logo, LogoSize};
