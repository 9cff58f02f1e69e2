//! Error type shared by every module in the crate.

use crate::quote::QuoteField;

/// Errors produced by the site's state machines and configuration loader.
///
/// None of these are fatal to the page: the UI turns each one into a
/// placeholder, an inline block or an alert.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The TOML configuration document could not be parsed.
    #[error("invalid site configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A carousel needs at least one image.
    #[error("gallery has no images")]
    EmptyGallery,

    /// A slide index outside `0..len` was requested.
    #[error("slide {index} is out of range for a gallery of {len} images")]
    SlideOutOfRange {
        /// Requested index
        index: usize,
        /// Number of images in the gallery
        len: usize,
    },

    /// One or more required quote fields are blank.
    #[error("missing required fields: {}", field_names(.0))]
    MissingFields(Vec<QuoteField>),

    /// The selected service is not one we offer.
    #[error("unknown service type: {0:?}")]
    UnknownService(String),

    /// A submit arrived while the previous one is still pending.
    #[error("a quote request is already being submitted")]
    SubmissionInProgress,

    /// A submit arrived while the confirmation overlay is still up.
    #[error("the previous quote request is still being confirmed")]
    AwaitingDismissal,

    /// The browser refused to open the generated mail link.
    #[error("could not open the mail client: {0}")]
    MailHandoff(String),

    /// The browser refused to schedule a timer.
    #[error("could not schedule timer: {0}")]
    Scheduler(String),
}

fn field_names(fields: &[QuoteField]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_lists_form_names() {
        let err = SiteError::MissingFields(vec![QuoteField::FullName, QuoteField::Phone]);
        assert_eq!(err.to_string(), "missing required fields: fullName, phone");
    }

    #[test]
    fn slide_out_of_range_message() {
        let err = SiteError::SlideOutOfRange { index: 9, len: 8 };
        assert_eq!(
            err.to_string(),
            "slide 9 is out of range for a gallery of 8 images"
        );
    }

    #[test]
    fn config_error_converts_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("recipient = ").unwrap_err();
        let err: SiteError = toml_err.into();
        assert!(matches!(err, SiteError::Config(_)));
        assert!(err.to_string().starts_with("invalid site configuration"));
    }
}
