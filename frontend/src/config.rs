use gloo_console::{info, warn};
use gloo_utils::document;
use mapty_lib::config::AppConfig;

const CONFIG_ELEMENT_ID: &str = "mapty-config";

/// Reads the optional JSON document embedded in the page, falling back to defaults.
pub fn load() -> AppConfig {
    let Some(text) = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return AppConfig::default();
    };

    match AppConfig::from_json(&text) {
        Ok(config) => {
            info!("Loaded configuration");
            config
        }
        Err(err) => {
            warn!(format!("Ignoring malformed configuration: {err}"));
            AppConfig::default()
        }
    }
}
