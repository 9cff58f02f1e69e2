//! # loadmovers-core
//!
//! Everything on the Load Movers website that has behavior worth testing,
//! kept free of browser APIs so it runs under plain `cargo test`.
//!
//! ## Modules
//!
//! - [`carousel`] - Gallery carousel state: current slide, wraparound, failed images
//! - [`quote`] - Quote form fields, validation and the submission state machine
//! - [`timeline`] - Delayed confirmation and reset after a submit
//! - [`mail`] - Email composition and `mailto:` URI encoding
//! - [`content`] - Static copy for the home and quote pages
//! - [`config`] - Site configuration loaded from TOML
//! - [`error`] - The crate error type
//!
//! ## Example
//!
//! ```rust
//! use loadmovers_core::quote::{QuoteField, QuoteFlow, SubmissionPhase};
//!
//! let mut flow = QuoteFlow::default();
//! flow.update_field(QuoteField::FullName, "Jane Doe");
//! flow.update_field(QuoteField::Phone, "0821234567");
//! flow.update_field(QuoteField::ServiceType, "Office Relocation");
//!
//! let draft = flow.begin_submit("info@loadmoversltd.co.za").unwrap();
//! assert!(draft.subject.contains("Office Relocation"));
//! assert_eq!(flow.phase(), SubmissionPhase::Submitting);
//!
//! flow.complete_submit();
//! assert_eq!(flow.phase(), SubmissionPhase::Success);
//! ```
//!
//! ---
//!
//! Load Movers (Pvt) Ltd, Cape Town

#![warn(missing_docs)]

pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod mail;
pub mod quote;
pub mod timeline;

pub use carousel::{Carousel, GalleryImage, NavKey};
pub use config::{ContactDetails, SiteConfig};
pub use error::{Result, SiteError};
pub use mail::MailDraft;
pub use quote::{QuoteField, QuoteFlow, QuoteForm, ServiceType, SubmissionPhase};
pub use timeline::{Scheduler, SubmissionTimeline, TimedStep};
