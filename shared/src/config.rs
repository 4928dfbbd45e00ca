use serde::Deserialize;

use crate::notification::AUTO_DISMISS_MS;

/// Client settings. Every field has a default so a page can override any subset
/// through an inline JSON block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every endpoint, empty for same-origin.
    pub api_base: String,
    pub notification_timeout_ms: u32,
    pub action_reload_delay_ms: u32,
    pub submission_reload_delay_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_base: String::new(),
            notification_timeout_ms: AUTO_DISMISS_MS,
            action_reload_delay_ms: 1000,
            submission_reload_delay_ms: 1500,
        }
    }
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: ClientConfig = serde_json::from_str(raw)?;
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        Ok(config)
    }
}
