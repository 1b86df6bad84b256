use serde::Deserialize;
use web_sys::js_sys;

/// Optional host-page defaults, injected as a global `APP_CONFIG` object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub default_api_base: String,
}

pub fn read_config_from_head() -> Option<Config> {
    use wasm_bindgen::JsValue;
    use web_sys::window;

    let w = window()?;
    let v = js_sys::Reflect::get(&w, &JsValue::from_str("APP_CONFIG")).ok()?;
    serde_wasm_bindgen::from_value(v).ok()
}
