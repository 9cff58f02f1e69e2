//! Email composition for the quote form.
//!
//! The site has no backend: a submitted quote becomes a `mailto:` link that
//! the browser hands to the visitor's mail client. Nothing confirms the
//! message was actually sent.

use serde::Serialize;

use crate::quote::QuoteForm;

/// Subject fallback when no service was chosen.
const GENERIC_SERVICE: &str = "General Service";

/// A ready-to-send quote email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MailDraft {
    /// Address the request goes to
    pub recipient: String,
    /// One-line subject naming the service
    pub subject: String,
    /// Plain-text body with every field, empty ones included
    pub body: String,
}

impl MailDraft {
    /// Build the email for `form`.
    pub fn compose(form: &QuoteForm, recipient: &str) -> Self {
        let service = if form.service_type.is_empty() {
            GENERIC_SERVICE
        } else {
            form.service_type.as_str()
        };
        let subject = format!("New Quote Request - {service}");

        let body = format!(
            "New Quote Request Received

Contact Information:
- Full Name: {full_name}
- Email: {email}
- Phone: {phone}

Service Details:
- Type of Service: {service_type}
- Preferred Date: {preferred_date}

Location Details:
- Pickup Location: {pickup}
- Drop-off / Disposal Location: {drop_off}

Additional Details:
{details}

---
This email was sent from the Load Movers quote request form.",
            full_name = form.full_name,
            email = form.email,
            phone = form.phone,
            service_type = form.service_type,
            preferred_date = form.preferred_date,
            pickup = form.pickup_location,
            drop_off = form.drop_off_location,
            details = form.additional_details,
        );

        Self {
            recipient: recipient.to_string(),
            subject,
            body,
        }
    }

    /// `mailto:` URI with percent-encoded subject and body.
    pub fn to_mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::QuoteField;
    use pretty_assertions::assert_eq;

    fn jane() -> QuoteForm {
        let mut form = QuoteForm::default();
        form.set(QuoteField::FullName, "Jane Doe");
        form.set(QuoteField::Phone, "0821234567");
        form.set(QuoteField::ServiceType, "Office Relocation");
        form
    }

    #[test]
    fn subject_names_service() {
        let draft = MailDraft::compose(&jane(), "info@loadmoversltd.co.za");
        assert_eq!(draft.subject, "New Quote Request - Office Relocation");
    }

    #[test]
    fn subject_falls_back_to_generic_label() {
        let draft = MailDraft::compose(&QuoteForm::default(), "a@b.c");
        assert_eq!(draft.subject, "New Quote Request - General Service");
    }

    #[test]
    fn body_keeps_empty_fields_as_empty_segments() {
        let draft = MailDraft::compose(&jane(), "a@b.c");
        assert!(draft.body.starts_with("New Quote Request Received\n\nContact Information:\n"));
        assert!(draft.body.contains("- Full Name: Jane Doe\n"));
        assert!(draft.body.contains("- Email: \n"));
        assert!(draft.body.contains("- Phone: 0821234567\n"));
        assert!(draft.body.contains("- Type of Service: Office Relocation\n"));
        assert!(draft.body.contains("- Preferred Date: \n"));
        assert!(draft.body.contains("- Pickup Location: \n"));
        assert!(draft.body.contains("- Drop-off / Disposal Location: \n"));
        assert!(draft.body.contains("Additional Details:\n\n---\n"));
        assert!(draft
            .body
            .ends_with("This email was sent from the Load Movers quote request form."));
    }

    #[test]
    fn additional_details_are_verbatim() {
        let mut form = jane();
        form.set(QuoteField::AdditionalDetails, "3rd floor, no lift\nPiano & fridge");
        let draft = MailDraft::compose(&form, "a@b.c");
        assert!(draft.body.contains("Additional Details:\n3rd floor, no lift\nPiano & fridge\n"));
    }

    #[test]
    fn mailto_uri_encodes_subject_and_body() {
        let mut form = jane();
        form.set(QuoteField::ServiceType, "Building Waste Removal & Disposal");
        let draft = MailDraft::compose(&form, "info@loadmoversltd.co.za");
        let uri = draft.to_mailto_uri();

        assert!(uri.starts_with(
            "mailto:info@loadmoversltd.co.za?subject=New%20Quote%20Request%20-%20Building%20Waste%20Removal%20%26%20Disposal&body="
        ));
        let body = uri.split_once("&body=").unwrap().1;
        assert!(!body.contains(' '));
        assert!(!body.contains('\n'));
        assert!(!body.contains('&'));
        assert_eq!(urlencoding::decode(body).unwrap(), draft.body);
    }
}
