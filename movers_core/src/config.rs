//! Site configuration.
//!
//! The landing binary embeds `site.toml` at build time. Every key is
//! optional; missing keys take the values below. A document that does not
//! parse is reported and replaced by the defaults so the site still renders.

use serde::Deserialize;

use crate::carousel::GalleryImage;
use crate::error::Result;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Address quote requests are mailed to
    pub recipient: String,
    /// Simulated network latency before the success overlay appears
    pub submit_delay_ms: u64,
    /// Delay after success before the form fields are cleared
    pub reset_delay_ms: u64,
    /// Phone numbers, email and street address shown on both pages
    pub contact: ContactDetails,
    /// Carousel photos in display order
    pub gallery: Vec<GalleryImage>,
}

/// How to reach the company.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    /// Display-formatted phone numbers
    pub phones: Vec<String>,
    /// Public email address
    pub email: String,
    /// Street address
    pub address: String,
}

impl ContactDetails {
    /// `tel:` link for a display-formatted number.
    pub fn phone_href(phone: &str) -> String {
        let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }

    /// `mailto:` link for the public address.
    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            phones: vec!["+27 847 571 656".into(), "+27 639 697 618".into()],
            email: "info@loadmoversltd.co.za".into(),
            address: "207 Kings Road, Brooklyn, Cape Town".into(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            recipient: "info@loadmoversltd.co.za".into(),
            submit_delay_ms: 1000,
            reset_delay_ms: 2000,
            contact: ContactDetails::default(),
            gallery: default_gallery(),
        }
    }
}

fn default_gallery() -> Vec<GalleryImage> {
    [
        "IM LOAD MOVERS truck at apartment building",
        "LOAD MOVERS truck with furniture in residential area",
        "LOAD MOVERS truck loaded with household items",
        "Orange pickup truck",
        "LOAD MOVERS truck at construction supply yard",
        "LM LOAD MOVERS truck at Arenzo 2 apartment building",
        "LOAD MOVERS truck fully loaded with household items",
        "LOAD MOVERS truck with compressed materials",
    ]
    .into_iter()
    .zip(1u32..)
    .map(|(alt, id)| GalleryImage::new(id, format!("/images/gallery-{id}.jpeg"), alt))
    .collect()
}

impl SiteConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse an embedded document, falling back to defaults if it is invalid.
    pub fn embedded(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default site configuration");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(SiteConfig::from_toml_str("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn default_gallery_has_eight_images() {
        let gallery = SiteConfig::default().gallery;
        assert_eq!(gallery.len(), 8);
        assert_eq!(gallery[0].id, 1);
        assert_eq!(gallery[0].src, "/images/gallery-1.jpeg");
        assert_eq!(gallery[7].src, "/images/gallery-8.jpeg");
        assert_eq!(gallery[3].alt, "Orange pickup truck");
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
recipient = "quotes@example.com"
submit_delay_ms = 250

[contact]
address = "1 Main Road"
"#,
        )
        .unwrap();

        assert_eq!(config.recipient, "quotes@example.com");
        assert_eq!(config.submit_delay_ms, 250);
        assert_eq!(config.reset_delay_ms, 2000);
        assert_eq!(config.contact.address, "1 Main Road");
        assert_eq!(config.contact.email, "info@loadmoversltd.co.za");
        assert_eq!(config.gallery.len(), 8);
    }

    #[test]
    fn gallery_can_be_replaced() {
        let config = SiteConfig::from_toml_str(
            r#"
[[gallery]]
id = 10
src = "/images/a.jpeg"
alt = "A"

[[gallery]]
id = 11
src = "/images/b.jpeg"
alt = "B"
"#,
        )
        .unwrap();

        assert_eq!(
            config.gallery,
            vec![
                GalleryImage::new(10, "/images/a.jpeg", "A"),
                GalleryImage::new(11, "/images/b.jpeg", "B"),
            ]
        );
    }

    #[test]
    fn invalid_document_is_an_error() {
        assert!(SiteConfig::from_toml_str("submit_delay_ms = \"soon\"").is_err());
    }

    #[test]
    fn embedded_falls_back_on_invalid_document() {
        assert_eq!(SiteConfig::embedded("recipient = "), SiteConfig::default());
    }

    #[test]
    fn phone_href_strips_spaces() {
        assert_eq!(ContactDetails::phone_href("+27 847 571 656"), "tel:+27847571656");
    }

    #[test]
    fn email_href() {
        assert_eq!(
            ContactDetails::default().email_href(),
            "mailto:info@loadmoversltd.co.za"
        );
    }
}
