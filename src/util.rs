// Console logging for the browser build

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::debug_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clog(msg: &str) {
    // Native builds (tests, asset generation) have no console to write to
    let _ = msg;
}

/// Milliseconds since the epoch from the host clock.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1_000.0)
        .unwrap_or(0.0)
}
