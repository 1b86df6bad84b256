use web_sys::window;

const BASE_URL_KEY: &str = "apiBaseUrl";

pub fn load_base_url() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|s| s.get_item(BASE_URL_KEY).ok())
        .flatten()
}

pub fn save_base_url(url: &str) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = storage.set_item(BASE_URL_KEY, url);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn base_url_round_trips_through_local_storage() {
        save_base_url("http://localhost:5002/api");
        assert_eq!(load_base_url().as_deref(), Some("http://localhost:5002/api"));
    }

    #[wasm_bindgen_test]
    fn missing_key_loads_none() {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
            let _ = storage.remove_item(BASE_URL_KEY);
        }
        assert_eq!(load_base_url(), None);
    }
}
