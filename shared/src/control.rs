use crate::error::ControllerError;

/// State of a submit button: its resting label, the label shown while a call is in flight,
/// and whether a call is in flight right now.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitControl {
    idle_label: String,
    busy_label: String,
    busy: bool,
}

impl SubmitControl {
    pub fn new(idle_label: impl Into<String>, busy_label: impl Into<String>) -> Self {
        SubmitControl {
            idle_label: idle_label.into(),
            busy_label: busy_label.into(),
            busy: false,
        }
    }

    pub fn label(&self) -> &str {
        if self.busy {
            &self.busy_label
        } else {
            &self.idle_label
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_disabled(&self) -> bool {
        self.busy
    }

    /// Check-and-set: only one call may be in flight per control.
    pub fn try_begin(&mut self) -> Result<(), ControllerError> {
        if self.busy {
            return Err(ControllerError::Busy);
        }
        self.busy = true;
        Ok(())
    }

    pub fn restore(&mut self) {
        self.busy = false;
    }

    pub fn set_idle_label(&mut self, label: impl Into<String>) {
        self.idle_label = label.into();
    }
}
