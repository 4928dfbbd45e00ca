//! Admin decision flow: one approve/reject dialog per page, one submission in flight at a time.
//!
//! `Idle -> DialogOpen -> Submitting -> Idle` on success, or back to `DialogOpen`
//! on failure so the admin can retry or cancel.

use crate::api::{ActionKind, ActionRequest, RequestDetail};
use crate::control::SubmitControl;
use crate::error::{ControllerError, FetchFailure};
use crate::notification::Notice;
use crate::Effect;

const INSUFFICIENT_WARNING: &str = "Requested quantity exceeds available resources. \
Consider partial fulfillment or waiting for more donations.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    DialogOpen,
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingAction {
    pub target_id: u64,
    pub kind: ActionKind,
    pub insufficient: bool,
    pub comment: String,
}

/// How the confirmation dialog looks for the pending action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDialog {
    pub title: &'static str,
    pub button_class: &'static str,
    pub button_icon: &'static str,
    pub button_label: &'static str,
    pub warning: Option<&'static str>,
}

impl ActionDialog {
    fn for_action(kind: ActionKind, insufficient: bool) -> Self {
        let warning = if insufficient {
            Some(INSUFFICIENT_WARNING)
        } else {
            None
        };
        match kind {
            ActionKind::Approve => ActionDialog {
                title: "Approve Request",
                button_class: "btn btn-success",
                button_icon: "bi bi-check-lg",
                button_label: "Approve Request",
                warning,
            },
            ActionKind::Reject => ActionDialog {
                title: "Reject Request",
                button_class: "btn btn-danger",
                button_icon: "bi bi-x-lg",
                button_label: "Reject Request",
                warning,
            },
        }
    }
}

#[derive(Debug)]
pub struct ActionController {
    phase: Phase,
    pending: Option<PendingAction>,
    control: SubmitControl,
    reload_delay_ms: u32,
}

impl ActionController {
    pub fn new(reload_delay_ms: u32) -> Self {
        ActionController {
            phase: Phase::Idle,
            pending: None,
            control: SubmitControl::new("", "Processing..."),
            reload_delay_ms,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn is_open(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Opens the dialog for `target_id`, replacing whatever was pending before.
    pub fn begin(
        &mut self,
        target_id: u64,
        kind: ActionKind,
        insufficient: bool,
    ) -> Result<(), ControllerError> {
        if self.phase == Phase::Submitting {
            return Err(ControllerError::Busy);
        }
        let dialog = ActionDialog::for_action(kind, insufficient);
        self.control.set_idle_label(dialog.button_label);
        self.pending = Some(PendingAction {
            target_id,
            kind,
            insufficient,
            comment: String::new(),
        });
        self.phase = Phase::DialogOpen;
        Ok(())
    }

    pub fn dialog(&self) -> Option<ActionDialog> {
        if self.phase == Phase::Idle {
            return None;
        }
        self.pending
            .as_ref()
            .map(|p| ActionDialog::for_action(p.kind, p.insufficient))
    }

    pub fn set_comment(&mut self, comment: String) {
        if self.phase != Phase::DialogOpen {
            return;
        }
        if let Some(pending) = self.pending.as_mut() {
            pending.comment = comment;
        }
    }

    pub fn cancel(&mut self) -> Result<(), ControllerError> {
        match self.phase {
            Phase::Submitting => Err(ControllerError::Busy),
            Phase::Idle => Err(ControllerError::NotOpen),
            Phase::DialogOpen => {
                self.phase = Phase::Idle;
                self.pending = None;
                Ok(())
            }
        }
    }

    /// Returns the target id and body to post. Refused while a previous submit is in flight.
    pub fn submit(&mut self) -> Result<(u64, ActionRequest), ControllerError> {
        match self.phase {
            Phase::Submitting => return Err(ControllerError::Busy),
            Phase::Idle => return Err(ControllerError::NoPendingAction),
            Phase::DialogOpen => {}
        }
        let pending = self
            .pending
            .as_ref()
            .ok_or(ControllerError::NoPendingAction)?;
        self.control.try_begin()?;
        self.phase = Phase::Submitting;
        Ok((
            pending.target_id,
            ActionRequest {
                action: pending.kind,
                comment: pending.comment.clone(),
            },
        ))
    }

    pub fn complete(&mut self, result: Result<(), FetchFailure>) -> Vec<Effect> {
        if self.phase != Phase::Submitting {
            return Vec::new();
        }
        self.control.restore();
        match result {
            Ok(()) => {
                let verb = match self.pending.as_ref().map(|p| p.kind) {
                    Some(ActionKind::Reject) => "rejected",
                    _ => "approved",
                };
                self.phase = Phase::Idle;
                self.pending = None;
                vec![
                    Effect::Notify(Notice::success(format!("Request {} successfully!", verb))),
                    Effect::Reload {
                        after_ms: self.reload_delay_ms,
                    },
                ]
            }
            Err(failure) => {
                self.phase = Phase::DialogOpen;
                let message = match failure {
                    FetchFailure::Application { message, .. } => format!("Error: {}", message),
                    FetchFailure::Transport(message) => format!("Action failed: {}", message),
                };
                vec![Effect::Notify(Notice::danger(message))]
            }
        }
    }
}

/// Read-only detail dialog. Nothing is retained once it closes.
#[derive(Debug, Default)]
pub struct DetailsController {
    shown: Option<RequestDetail>,
}

impl DetailsController {
    pub fn open(&mut self, detail: RequestDetail) {
        self.shown = Some(detail);
    }

    pub fn close(&mut self) {
        self.shown = None;
    }

    pub fn shown(&self) -> Option<&RequestDetail> {
        self.shown.as_ref()
    }

    pub fn failure_notice(failure: &FetchFailure) -> Notice {
        match failure {
            FetchFailure::Application { message, .. } => {
                Notice::danger(format!("Error loading request details: {}", message))
            }
            FetchFailure::Transport(_) => Notice::danger("Failed to load request details"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Severity;

    fn notices(effects: &[Effect]) -> Vec<&Notice> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Notify(notice) => Some(notice),
                _ => None,
            })
            .collect()
    }

    fn reloads(effects: &[Effect]) -> usize {
        effects
            .iter()
            .filter(|e| matches!(e, Effect::Reload { .. }))
            .count()
    }

    #[test]
    fn dialog_follows_kind_and_warning_flag() {
        let mut controller = ActionController::new(1000);
        assert!(controller.dialog().is_none());

        for &kind in [ActionKind::Approve, ActionKind::Reject].iter() {
            for &insufficient in [false, true].iter() {
                controller.begin(3, kind, insufficient).unwrap();
                let dialog = controller.dialog().unwrap();
                match kind {
                    ActionKind::Approve => {
                        assert_eq!(dialog.title, "Approve Request");
                        assert_eq!(dialog.button_class, "btn btn-success");
                        assert_eq!(dialog.button_label, "Approve Request");
                    }
                    ActionKind::Reject => {
                        assert_eq!(dialog.title, "Reject Request");
                        assert_eq!(dialog.button_class, "btn btn-danger");
                        assert_eq!(dialog.button_label, "Reject Request");
                    }
                }
                assert_eq!(dialog.warning.is_some(), insufficient);
                assert_eq!(controller.control().label(), dialog.button_label);
            }
        }
    }

    #[test]
    fn begin_clears_previous_comment_and_overwrites_target() {
        let mut controller = ActionController::new(1000);
        controller.begin(1, ActionKind::Approve, false).unwrap();
        controller.set_comment("ship it".to_string());
        controller.begin(2, ActionKind::Reject, false).unwrap();

        let pending = controller.pending().unwrap();
        assert_eq!(pending.target_id, 2);
        assert_eq!(pending.kind, ActionKind::Reject);
        assert_eq!(pending.comment, "");
    }

    #[test]
    fn submit_carries_kind_and_comment() {
        let mut controller = ActionController::new(1000);
        controller.begin(7, ActionKind::Reject, false).unwrap();
        controller.set_comment("duplicate".to_string());

        let (id, body) = controller.submit().unwrap();
        assert_eq!(id, 7);
        assert_eq!(body.action, ActionKind::Reject);
        assert_eq!(body.comment, "duplicate");
        assert_eq!(controller.phase(), Phase::Submitting);
        assert!(controller.control().is_disabled());
        assert_eq!(controller.control().label(), "Processing...");
    }

    #[test]
    fn second_submit_and_new_begin_refused_while_in_flight() {
        let mut controller = ActionController::new(1000);
        controller.begin(7, ActionKind::Approve, false).unwrap();
        controller.submit().unwrap();

        assert_eq!(controller.submit(), Err(ControllerError::Busy));
        assert_eq!(
            controller.begin(8, ActionKind::Reject, false),
            Err(ControllerError::Busy)
        );
        assert_eq!(controller.cancel(), Err(ControllerError::Busy));
        assert_eq!(controller.pending().unwrap().target_id, 7);
    }

    #[test]
    fn submit_without_dialog_is_refused() {
        let mut controller = ActionController::new(1000);
        assert_eq!(controller.submit(), Err(ControllerError::NoPendingAction));
    }

    #[test]
    fn success_notifies_once_closes_and_reloads_once() {
        let mut controller = ActionController::new(1000);
        controller.begin(7, ActionKind::Approve, false).unwrap();
        controller.submit().unwrap();

        let effects = controller.complete(Ok(()));
        let shown = notices(&effects);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].severity, Severity::Success);
        assert_eq!(shown[0].message, "Request approved successfully!");
        assert_eq!(reloads(&effects), 1);
        assert!(effects.contains(&Effect::Reload { after_ms: 1000 }));
        assert!(!controller.is_open());
        assert!(controller.pending().is_none());
    }

    #[test]
    fn failure_keeps_dialog_open_and_reenables_submit() {
        let failures = vec![
            FetchFailure::application(400, "Insufficient resource quantity"),
            FetchFailure::Transport("Failed to fetch".to_string()),
        ];
        for failure in failures {
            let mut controller = ActionController::new(1000);
            controller.begin(7, ActionKind::Approve, true).unwrap();
            controller.set_comment("partial".to_string());
            controller.submit().unwrap();

            let effects = controller.complete(Err(failure.clone()));
            assert_eq!(controller.phase(), Phase::DialogOpen);
            assert!(controller.dialog().is_some());
            assert!(!controller.control().is_disabled());
            assert_eq!(controller.control().label(), "Approve Request");
            assert_eq!(reloads(&effects), 0);

            let shown = notices(&effects);
            assert_eq!(shown.len(), 1);
            assert_eq!(shown[0].severity, Severity::Danger);
            match failure {
                FetchFailure::Application { .. } => {
                    assert_eq!(shown[0].message, "Error: Insufficient resource quantity")
                }
                FetchFailure::Transport(_) => {
                    assert_eq!(shown[0].message, "Action failed: Failed to fetch")
                }
            }

            // retry is allowed and keeps the comment
            let (_, body) = controller.submit().unwrap();
            assert_eq!(body.comment, "partial");
        }
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut controller = ActionController::new(1000);
        assert!(controller.complete(Ok(())).is_empty());
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut controller = ActionController::new(1000);
        assert_eq!(controller.cancel(), Err(ControllerError::NotOpen));
        controller.begin(1, ActionKind::Approve, false).unwrap();
        controller.cancel().unwrap();
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(controller.dialog().is_none());
    }

    #[test]
    fn details_dialog_shows_latest_detail_until_closed() {
        let detail = |id: u64| RequestDetail {
            id,
            user_name: Some("Ana".to_string()),
            resource_name: "Water".to_string(),
            event_name: "Flood".to_string(),
            quantity: 12,
            urgency: "High".to_string(),
            status: "Pending".to_string(),
            created_at: "2024-03-01T10:15:00".to_string(),
            response: None,
        };
        let mut details = DetailsController::default();
        assert!(details.shown().is_none());

        details.open(detail(4));
        assert_eq!(details.shown().map(|d| d.id), Some(4));
        details.open(detail(5));
        assert_eq!(details.shown().map(|d| d.id), Some(5));

        details.close();
        assert!(details.shown().is_none());
        details.close();
        assert!(details.shown().is_none());
    }

    #[test]
    fn details_failure_copy() {
        let notice =
            DetailsController::failure_notice(&FetchFailure::application(404, "Request not found"));
        assert_eq!(notice.message, "Error loading request details: Request not found");
        let notice = DetailsController::failure_notice(&FetchFailure::Transport("x".into()));
        assert_eq!(notice.message, "Failed to load request details");
    }
}
