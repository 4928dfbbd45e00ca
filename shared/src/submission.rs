//! Donation and resource-request submission. Both forms run through the same flow;
//! they differ only in endpoint, copy and fields.

use crate::api::endpoints;
use crate::control::SubmitControl;
use crate::error::{ControllerError, FetchFailure};
use crate::notification::Notice;
use crate::Effect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Donation,
    Request,
}

impl SubmissionKind {
    pub fn endpoint(self, base: &str) -> String {
        match self {
            SubmissionKind::Donation => endpoints::donate(base),
            SubmissionKind::Request => endpoints::submit_request(base),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SubmissionKind::Donation => "Make a Donation",
            SubmissionKind::Request => "Request Resources",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            SubmissionKind::Donation => "Donate",
            SubmissionKind::Request => "Submit Request",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            SubmissionKind::Donation => "Processing...",
            SubmissionKind::Request => "Submitting...",
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            SubmissionKind::Donation => "Donation submitted successfully!",
            SubmissionKind::Request => {
                "Request submitted successfully! It will be reviewed by an administrator."
            }
        }
    }

    fn failure_prefix(self) -> &'static str {
        match self {
            SubmissionKind::Donation => "Donation failed",
            SubmissionKind::Request => "Request failed",
        }
    }
}

/// A form whose fields are posted as multipart data.
pub trait SubmissionForm: Default {
    const KIND: SubmissionKind;

    fn fields(&self) -> Vec<(&'static str, String)>;

    /// Sets a field by its multipart name. Unknown names are ignored.
    fn set_field(&mut self, name: &str, value: String);

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationForm {
    pub resource_id: String,
    pub quantity: String,
    pub event_id: String,
    pub notes: String,
}

impl SubmissionForm for DonationForm {
    const KIND: SubmissionKind = SubmissionKind::Donation;

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("resource_id", self.resource_id.clone()),
            ("quantity", self.quantity.clone()),
            ("event_id", self.event_id.clone()),
            ("notes", self.notes.clone()),
        ]
    }

    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "resource_id" => self.resource_id = value,
            "quantity" => self.quantity = value,
            "event_id" => self.event_id = value,
            "notes" => self.notes = value,
            _ => {}
        }
    }
}

pub const URGENCY_LEVELS: [&str; 4] = ["Low", "Medium", "High", "Critical"];

#[derive(Debug, Clone, PartialEq)]
pub struct RequestForm {
    pub resource_id: String,
    pub event_id: String,
    pub quantity: String,
    pub urgency: String,
}

impl Default for RequestForm {
    fn default() -> Self {
        RequestForm {
            resource_id: String::new(),
            event_id: String::new(),
            quantity: String::new(),
            urgency: "Medium".to_string(),
        }
    }
}

impl SubmissionForm for RequestForm {
    const KIND: SubmissionKind = SubmissionKind::Request;

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("resource_id", self.resource_id.clone()),
            ("event_id", self.event_id.clone()),
            ("quantity", self.quantity.clone()),
            ("urgency", self.urgency.clone()),
        ]
    }

    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "resource_id" => self.resource_id = value,
            "event_id" => self.event_id = value,
            "quantity" => self.quantity = value,
            "urgency" => self.urgency = value,
            _ => {}
        }
    }
}

#[derive(Debug)]
pub struct SubmissionFlow<F: SubmissionForm> {
    form: F,
    open: bool,
    control: SubmitControl,
    reload_delay_ms: u32,
}

impl<F: SubmissionForm> SubmissionFlow<F> {
    pub fn new(reload_delay_ms: u32) -> Self {
        SubmissionFlow {
            form: F::default(),
            open: false,
            control: SubmitControl::new(F::KIND.submit_label(), F::KIND.busy_label()),
            reload_delay_ms,
        }
    }

    pub fn kind(&self) -> SubmissionKind {
        F::KIND
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Edits are ignored while the form is being posted.
    pub fn form_mut(&mut self) -> Option<&mut F> {
        if self.control.is_busy() {
            None
        } else {
            Some(&mut self.form)
        }
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) -> Result<(), ControllerError> {
        if self.control.is_busy() {
            return Err(ControllerError::Busy);
        }
        self.open = false;
        Ok(())
    }

    pub fn submit(&mut self) -> Result<Vec<(&'static str, String)>, ControllerError> {
        if !self.open {
            return Err(ControllerError::NotOpen);
        }
        self.control.try_begin()?;
        Ok(self.form.fields())
    }

    pub fn complete(&mut self, result: Result<(), FetchFailure>) -> Vec<Effect> {
        if !self.control.is_busy() {
            return Vec::new();
        }
        self.control.restore();
        match result {
            Ok(()) => {
                self.open = false;
                self.form.reset();
                vec![
                    Effect::Notify(Notice::success(F::KIND.success_message())),
                    Effect::Reload {
                        after_ms: self.reload_delay_ms,
                    },
                ]
            }
            Err(FetchFailure::Application { message, .. }) => {
                vec![Effect::Notify(Notice::danger(format!("Error: {}", message)))]
            }
            Err(FetchFailure::Transport(message)) => vec![Effect::Notify(Notice::danger(
                format!("{}: {}", F::KIND.failure_prefix(), message),
            ))],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Severity;

    fn filled_donation() -> SubmissionFlow<DonationForm> {
        let mut flow = SubmissionFlow::<DonationForm>::new(1500);
        flow.open();
        let form = flow.form_mut().unwrap();
        form.resource_id = "3".to_string();
        form.quantity = "500".to_string();
        form.notes = "bottled".to_string();
        flow
    }

    #[test]
    fn submit_returns_multipart_fields_and_locks_control() {
        let mut flow = filled_donation();
        let fields = flow.submit().unwrap();

        assert!(fields.contains(&("resource_id", "3".to_string())));
        assert!(fields.contains(&("quantity", "500".to_string())));
        assert_eq!(flow.control().label(), "Processing...");
        assert!(flow.control().is_disabled());
        assert_eq!(flow.submit(), Err(ControllerError::Busy));
        assert!(flow.form_mut().is_none());
        assert_eq!(flow.close(), Err(ControllerError::Busy));
    }

    #[test]
    fn rejected_donation_reports_server_text_and_restores_label() {
        let mut flow = filled_donation();
        flow.submit().unwrap();

        let effects = flow.complete(Err(FetchFailure::application(400, "Quantity exceeds stock")));
        assert_eq!(
            effects,
            vec![Effect::Notify(Notice {
                message: "Error: Quantity exceeds stock".to_string(),
                severity: Severity::Danger,
            })]
        );
        assert!(flow.is_open());
        assert!(!flow.control().is_disabled());
        assert_eq!(flow.control().label(), "Donate");
        assert_eq!(flow.form().quantity, "500");
    }

    #[test]
    fn transport_failure_uses_kind_prefix() {
        let mut flow = SubmissionFlow::<RequestForm>::new(1500);
        flow.open();
        flow.submit().unwrap();
        let effects = flow.complete(Err(FetchFailure::Transport("Failed to fetch".into())));
        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::danger("Request failed: Failed to fetch"))]
        );
        assert_eq!(flow.control().label(), "Submit Request");
    }

    #[test]
    fn success_closes_resets_and_reloads_once() {
        let mut flow = filled_donation();
        flow.submit().unwrap();

        let effects = flow.complete(Ok(()));
        assert_eq!(
            effects,
            vec![
                Effect::Notify(Notice::success("Donation submitted successfully!")),
                Effect::Reload { after_ms: 1500 },
            ]
        );
        assert!(!flow.is_open());
        assert_eq!(flow.form(), &DonationForm::default());
        assert!(!flow.control().is_disabled());
    }

    #[test]
    fn request_form_resets_to_medium_urgency() {
        let mut flow = SubmissionFlow::<RequestForm>::new(1500);
        flow.open();
        flow.form_mut().unwrap().urgency = "Critical".to_string();
        flow.submit().unwrap();
        flow.complete(Ok(()));
        assert_eq!(flow.form().urgency, "Medium");
    }

    #[test]
    fn fields_are_set_by_multipart_name() {
        let mut form = RequestForm::default();
        form.set_field("quantity", "4".to_string());
        form.set_field("urgency", "High".to_string());
        form.set_field("notes", "ignored".to_string());
        assert_eq!(
            form.fields(),
            vec![
                ("resource_id", String::new()),
                ("event_id", String::new()),
                ("quantity", "4".to_string()),
                ("urgency", "High".to_string()),
            ]
        );
    }

    #[test]
    fn submit_requires_open_dialog() {
        let mut flow = SubmissionFlow::<DonationForm>::new(1500);
        assert_eq!(flow.submit(), Err(ControllerError::NotOpen));
        assert!(flow.complete(Ok(())).is_empty());
    }

    #[test]
    fn endpoints_per_kind() {
        assert_eq!(SubmissionKind::Donation.endpoint(""), "/user/donate");
        assert_eq!(SubmissionKind::Request.endpoint("/api"), "/api/user/requests");
    }
}
