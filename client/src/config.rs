use seed::*;
use shared::config::ClientConfig;

const CONFIG_ELEMENT_ID: &str = "client-config";

/// Reads the inline `<script type="application/json" id="client-config">` block, if the page has one.
pub fn load() -> ClientConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => match ClientConfig::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                error!("ignoring malformed client config:", err.to_string());
                ClientConfig::default()
            }
        },
        _ => ClientConfig::default(),
    }
}
