use thiserror::Error;

/// Why a network call did not produce the expected payload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchFailure {
    /// No response was obtained (network error, aborted promise, undecodable body).
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Application { status: u16, message: String },
}

impl FetchFailure {
    pub fn application(status: u16, message: impl Into<String>) -> Self {
        FetchFailure::Application {
            status,
            message: message.into(),
        }
    }
}

/// Calls a controller refuses in its current state. A refused call changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("a submission is already in flight")]
    Busy,

    #[error("no action is pending")]
    NoPendingAction,

    #[error("the dialog is not open")]
    NotOpen,
}
