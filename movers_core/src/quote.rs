//! Quote request form and its submission state machine.
//!
//! ```text
//!            begin_submit (valid)           complete_submit
//!  Editing ------------------------> Submitting --------------> Success
//!     ^                                   |                        |
//!     |            fail_submit            |      dismiss_success   |
//!     +-----------------------------------+------------------------+
//! ```
//!
//! `auto_reset` runs on a timer after `Success` is entered and clears the
//! fields whether or not the overlay was dismissed.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};
use crate::mail::MailDraft;

/// Services offered, in the order they are displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    /// Residential moves
    HomeMoving,
    /// Business moves
    OfficeRelocation,
    /// Construction debris
    RubbleRemoval,
    /// Large items of any kind
    GeneralHauling,
    /// Renovation and construction waste
    BuildingWasteRemoval,
    /// Machinery transport
    HeavyEquipmentTransport,
}

impl ServiceType {
    /// Every service, in display order.
    pub const ALL: [ServiceType; 6] = [
        ServiceType::HomeMoving,
        ServiceType::OfficeRelocation,
        ServiceType::RubbleRemoval,
        ServiceType::GeneralHauling,
        ServiceType::BuildingWasteRemoval,
        ServiceType::HeavyEquipmentTransport,
    ];

    /// Label shown to customers and used as the form value.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::HomeMoving => "Home Moving",
            ServiceType::OfficeRelocation => "Office Relocation",
            ServiceType::RubbleRemoval => "Rubble Removal",
            ServiceType::GeneralHauling => "General Hauling",
            ServiceType::BuildingWasteRemoval => "Building Waste Removal & Disposal",
            ServiceType::HeavyEquipmentTransport => "Heavy Equipment Transport",
        }
    }

    /// Parse a form value back into a service.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Emoji shown on the service card.
    pub fn icon(&self) -> &'static str {
        match self {
            ServiceType::HomeMoving => "🏠",
            ServiceType::OfficeRelocation => "🏢",
            ServiceType::RubbleRemoval => "🧱",
            ServiceType::GeneralHauling => "🚚",
            ServiceType::BuildingWasteRemoval => "♻️",
            ServiceType::HeavyEquipmentTransport => "⚙️",
        }
    }

    /// Card copy for the services grid.
    pub fn description(&self) -> &'static str {
        match self {
            ServiceType::HomeMoving => {
                "Professional residential moving services with care and precision. We handle your belongings as if they were our own."
            }
            ServiceType::OfficeRelocation => {
                "Minimize downtime with our efficient office relocation services. We ensure your business operations continue smoothly."
            }
            ServiceType::RubbleRemoval => {
                "Quick and efficient removal of construction debris and rubble. We dispose of materials responsibly."
            }
            ServiceType::GeneralHauling => {
                "Need to move large items? Our general hauling services cover everything from furniture to equipment."
            }
            ServiceType::BuildingWasteRemoval => {
                "Comprehensive waste removal services for construction and renovation projects. Environmentally responsible disposal."
            }
            ServiceType::HeavyEquipmentTransport => {
                "Specialized transport for heavy machinery and equipment. We have the expertise and equipment to handle it safely."
            }
        }
    }
}

/// The eight fields on the quote form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuoteField {
    /// Customer name (required)
    FullName,
    /// Optional reply address
    Email,
    /// Contact number (required)
    Phone,
    /// One of [`ServiceType`] labels (required)
    ServiceType,
    /// `yyyy-mm-dd` from the date picker
    PreferredDate,
    /// Free-text address
    PickupLocation,
    /// Free-text address
    DropOffLocation,
    /// Free text
    AdditionalDetails,
}

impl QuoteField {
    /// Every field, in form order.
    pub const ALL: [QuoteField; 8] = [
        QuoteField::FullName,
        QuoteField::Email,
        QuoteField::Phone,
        QuoteField::ServiceType,
        QuoteField::PreferredDate,
        QuoteField::PickupLocation,
        QuoteField::DropOffLocation,
        QuoteField::AdditionalDetails,
    ];

    /// HTML `name`/`id` of the control.
    pub fn name(&self) -> &'static str {
        match self {
            QuoteField::FullName => "fullName",
            QuoteField::Email => "email",
            QuoteField::Phone => "phone",
            QuoteField::ServiceType => "serviceType",
            QuoteField::PreferredDate => "preferredDate",
            QuoteField::PickupLocation => "pickupLocation",
            QuoteField::DropOffLocation => "dropOffLocation",
            QuoteField::AdditionalDetails => "additionalDetails",
        }
    }

    /// Visible label text.
    pub fn label(&self) -> &'static str {
        match self {
            QuoteField::FullName => "Full Name",
            QuoteField::Email => "Email Address",
            QuoteField::Phone => "Phone Number",
            QuoteField::ServiceType => "Type of Service",
            QuoteField::PreferredDate => "Preferred Date",
            QuoteField::PickupLocation => "Pickup Location",
            QuoteField::DropOffLocation => "Drop-off / Disposal Location",
            QuoteField::AdditionalDetails => "Additional Details",
        }
    }

    /// Whether the control carries the `required` constraint.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            QuoteField::FullName | QuoteField::Phone | QuoteField::ServiceType
        )
    }
}

/// Values of the quote form. Every field starts out empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteForm {
    /// Customer name
    pub full_name: String,
    /// Reply address
    pub email: String,
    /// Contact number
    pub phone: String,
    /// Selected service label, empty until chosen
    pub service_type: String,
    /// Preferred moving date
    pub preferred_date: String,
    /// Pickup address
    pub pickup_location: String,
    /// Drop-off or disposal address
    pub drop_off_location: String,
    /// Anything else the customer wants us to know
    pub additional_details: String,
}

impl QuoteForm {
    /// Current value of `field`.
    pub fn get(&self, field: QuoteField) -> &str {
        match field {
            QuoteField::FullName => &self.full_name,
            QuoteField::Email => &self.email,
            QuoteField::Phone => &self.phone,
            QuoteField::ServiceType => &self.service_type,
            QuoteField::PreferredDate => &self.preferred_date,
            QuoteField::PickupLocation => &self.pickup_location,
            QuoteField::DropOffLocation => &self.drop_off_location,
            QuoteField::AdditionalDetails => &self.additional_details,
        }
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: QuoteField, value: impl Into<String>) {
        let slot = match field {
            QuoteField::FullName => &mut self.full_name,
            QuoteField::Email => &mut self.email,
            QuoteField::Phone => &mut self.phone,
            QuoteField::ServiceType => &mut self.service_type,
            QuoteField::PreferredDate => &mut self.preferred_date,
            QuoteField::PickupLocation => &mut self.pickup_location,
            QuoteField::DropOffLocation => &mut self.drop_off_location,
            QuoteField::AdditionalDetails => &mut self.additional_details,
        };
        *slot = value.into();
    }

    /// Reset every field to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        QuoteField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Check the required fields.
    ///
    /// Presence only: email and phone formats are not checked.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<QuoteField> = QuoteField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(SiteError::MissingFields(missing));
        }
        if ServiceType::from_label(&self.service_type).is_none() {
            return Err(SiteError::UnknownService(self.service_type.clone()));
        }
        Ok(())
    }
}

/// Where the quote flow currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Fields editable, submit enabled
    Editing,
    /// Waiting out the submission delay, submit disabled
    Submitting,
    /// Confirmation overlay visible
    Success,
}

/// Transient flags behind [`SubmissionPhase`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    /// Submit button disabled and showing the busy label
    pub is_submitting: bool,
    /// Confirmation overlay visible
    pub show_success: bool,
}

/// Form values plus submission flags, owned by the quote page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteFlow {
    form: QuoteForm,
    state: SubmissionState,
}

impl QuoteFlow {
    /// Current form values.
    pub fn form(&self) -> &QuoteForm {
        &self.form
    }

    /// Current flags.
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Phase derived from the flags.
    pub fn phase(&self) -> SubmissionPhase {
        if self.state.is_submitting {
            SubmissionPhase::Submitting
        } else if self.state.show_success {
            SubmissionPhase::Success
        } else {
            SubmissionPhase::Editing
        }
    }

    /// Apply a keystroke or selection to one field.
    pub fn update_field(&mut self, field: QuoteField, value: impl Into<String>) {
        tracing::debug!(field = field.name(), "quote field updated");
        self.form.set(field, value);
    }

    /// Validate and enter `Submitting`, returning the email to hand off.
    ///
    /// Only allowed from `Editing`. On error the flow stays where it was.
    pub fn begin_submit(&mut self, recipient: &str) -> Result<MailDraft> {
        match self.phase() {
            SubmissionPhase::Editing => {}
            SubmissionPhase::Submitting => return Err(SiteError::SubmissionInProgress),
            SubmissionPhase::Success => return Err(SiteError::AwaitingDismissal),
        }
        self.form.validate()?;
        self.state.is_submitting = true;
        tracing::info!(service = %self.form.service_type, "quote request submitting");
        Ok(MailDraft::compose(&self.form, recipient))
    }

    /// The submission delay elapsed: show the confirmation.
    pub fn complete_submit(&mut self) {
        if !self.state.is_submitting {
            return;
        }
        self.state = SubmissionState {
            is_submitting: false,
            show_success: true,
        };
        tracing::info!("quote request submitted");
    }

    /// The submit handler failed: re-enable the form, keep the values.
    pub fn fail_submit(&mut self) {
        self.state.is_submitting = false;
    }

    /// User closed the confirmation overlay.
    pub fn dismiss_success(&mut self) {
        self.state.show_success = false;
        tracing::debug!("success overlay closed");
    }

    /// Timer-driven reset after a successful submission.
    pub fn auto_reset(&mut self) {
        self.form.clear();
        tracing::debug!("quote form cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RECIPIENT: &str = "info@loadmoversltd.co.za";

    fn jane() -> QuoteFlow {
        let mut flow = QuoteFlow::default();
        flow.update_field(QuoteField::FullName, "Jane Doe");
        flow.update_field(QuoteField::Phone, "0821234567");
        flow.update_field(QuoteField::ServiceType, "Office Relocation");
        flow
    }

    #[test]
    fn service_labels_round_trip() {
        for service in ServiceType::ALL {
            assert_eq!(ServiceType::from_label(service.label()), Some(service));
        }
        assert_eq!(ServiceType::from_label("Piano Tuning"), None);
        assert_eq!(ServiceType::from_label(""), None);
    }

    #[test]
    fn new_form_is_blank() {
        let form = QuoteForm::default();
        assert!(form.is_blank());
        for field in QuoteField::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn set_and_get_every_field() {
        let mut form = QuoteForm::default();
        for field in QuoteField::ALL {
            form.set(field, field.name());
        }
        for field in QuoteField::ALL {
            assert_eq!(form.get(field), field.name());
        }
        form.clear();
        assert!(form.is_blank());
    }

    #[test]
    fn required_fields() {
        let required: Vec<_> = QuoteField::ALL
            .into_iter()
            .filter(QuoteField::is_required)
            .collect();
        assert_eq!(
            required,
            vec![QuoteField::FullName, QuoteField::Phone, QuoteField::ServiceType]
        );
    }

    #[test]
    fn validate_reports_all_missing_fields() {
        let err = QuoteForm::default().validate().unwrap_err();
        match err {
            SiteError::MissingFields(fields) => assert_eq!(
                fields,
                vec![QuoteField::FullName, QuoteField::Phone, QuoteField::ServiceType]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut flow = jane();
        flow.update_field(QuoteField::FullName, "   ");
        assert!(matches!(
            flow.form().validate(),
            Err(SiteError::MissingFields(ref f)) if f == &vec![QuoteField::FullName]
        ));
    }

    #[test]
    fn validate_rejects_unknown_service() {
        let mut flow = jane();
        flow.update_field(QuoteField::ServiceType, "Piano Tuning");
        assert!(matches!(
            flow.form().validate(),
            Err(SiteError::UnknownService(ref s)) if s == "Piano Tuning"
        ));
    }

    #[test]
    fn no_format_validation_on_email_or_phone() {
        let mut flow = jane();
        flow.update_field(QuoteField::Email, "not an email");
        flow.update_field(QuoteField::Phone, "call me maybe");
        assert!(flow.form().validate().is_ok());
    }

    #[test]
    fn happy_path_editing_submitting_success() {
        let mut flow = jane();
        assert_eq!(flow.phase(), SubmissionPhase::Editing);

        let draft = flow.begin_submit(RECIPIENT).unwrap();
        assert_eq!(flow.phase(), SubmissionPhase::Submitting);
        assert!(draft.subject.contains("Office Relocation"));
        assert!(draft.body.contains("Full Name: Jane Doe"));
        assert!(draft.body.contains("Phone: 0821234567"));

        flow.complete_submit();
        assert_eq!(flow.phase(), SubmissionPhase::Success);
        assert_eq!(
            flow.state(),
            SubmissionState {
                is_submitting: false,
                show_success: true
            }
        );
    }

    #[test]
    fn empty_service_type_never_reaches_submitting() {
        let mut flow = jane();
        flow.update_field(QuoteField::ServiceType, "");
        let err = flow.begin_submit(RECIPIENT).unwrap_err();
        assert!(
            matches!(err, SiteError::MissingFields(ref f) if f == &vec![QuoteField::ServiceType])
        );
        assert_eq!(flow.phase(), SubmissionPhase::Editing);
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut flow = jane();
        flow.begin_submit(RECIPIENT).unwrap();
        assert!(matches!(
            flow.begin_submit(RECIPIENT),
            Err(SiteError::SubmissionInProgress)
        ));
        assert_eq!(flow.phase(), SubmissionPhase::Submitting);
    }

    #[test]
    fn submit_behind_success_overlay_is_rejected() {
        let mut flow = jane();
        flow.begin_submit(RECIPIENT).unwrap();
        flow.complete_submit();

        assert!(matches!(
            flow.begin_submit(RECIPIENT),
            Err(SiteError::AwaitingDismissal)
        ));
        assert_eq!(
            flow.state(),
            SubmissionState {
                is_submitting: false,
                show_success: true
            }
        );

        flow.dismiss_success();
        assert!(flow.begin_submit(RECIPIENT).is_ok());
    }

    #[test]
    fn auto_reset_clears_fields_without_dismiss() {
        let mut flow = jane();
        flow.begin_submit(RECIPIENT).unwrap();
        flow.complete_submit();

        flow.auto_reset();
        assert!(flow.form().is_blank());
        // Overlay stays until the user closes it
        assert_eq!(flow.phase(), SubmissionPhase::Success);
    }

    #[test]
    fn auto_reset_clears_fields_after_dismiss() {
        let mut flow = jane();
        flow.begin_submit(RECIPIENT).unwrap();
        flow.complete_submit();
        flow.dismiss_success();
        assert_eq!(flow.phase(), SubmissionPhase::Editing);

        flow.auto_reset();
        assert!(flow.form().is_blank());
        assert_eq!(flow.phase(), SubmissionPhase::Editing);
    }

    #[test]
    fn failure_re_enables_form_and_keeps_values() {
        let mut flow = jane();
        flow.begin_submit(RECIPIENT).unwrap();
        flow.fail_submit();
        assert_eq!(flow.phase(), SubmissionPhase::Editing);
        assert_eq!(flow.form().full_name, "Jane Doe");

        // Retrying works
        flow.begin_submit(RECIPIENT).unwrap();
        flow.complete_submit();
        assert_eq!(flow.phase(), SubmissionPhase::Success);
    }

    #[test]
    fn complete_without_begin_is_ignored() {
        let mut flow = jane();
        flow.complete_submit();
        assert_eq!(flow.phase(), SubmissionPhase::Editing);
    }

    #[test]
    fn form_uses_camel_case_field_names() {
        let flow = jane();
        let json = serde_json::to_value(flow.form()).unwrap();
        for field in QuoteField::ALL {
            assert_eq!(json[field.name()], flow.form().get(field));
        }
    }
}
