use web_sys::window;
use wheel_shared::WheelConfig;

/// Id of the optional `<script type="application/json">` block holding wheel settings.
pub const CONFIG_ELEMENT_ID: &str = "wheel-config";

pub fn load_wheel_config() -> WheelConfig {
    let raw = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => match WheelConfig::from_json(&raw) {
            Ok(config) => {
                log::info!("Loaded wheel config from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(e) => {
                log::warn!("Ignoring wheel config: {}", e);
                WheelConfig::default()
            }
        },
        _ => WheelConfig::default(),
    }
}

pub fn browser_language() -> Option<String> {
    window().and_then(|w| w.navigator().language())
}
