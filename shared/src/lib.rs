pub mod action;
pub mod api;
pub mod config;
pub mod control;
pub mod error;
pub mod format;
pub mod notification;
pub mod pending;
pub mod submission;
pub mod view;

use notification::Notice;

/// Side effects a controller asks the page to carry out once a network call resolves.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Notify(Notice),
    /// Reload the whole page after the given delay so it resyncs with the server.
    Reload { after_ms: u32 },
}
