use swipecard_foundation::InputCapabilities;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Probes once for touch support: `ontouchstart` on the window, or a
/// non-zero `navigator.maxTouchPoints`.
pub fn detect_capabilities(window: &Window) -> InputCapabilities {
    let has_touch_events =
        js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false);
    let max_touch_points = window.navigator().max_touch_points();
    let capabilities = classify(has_touch_events, max_touch_points);
    log::debug!(
        "input capabilities: ontouchstart={has_touch_events} maxTouchPoints={max_touch_points} -> {capabilities:?}"
    );
    capabilities
}

pub(crate) fn classify(has_touch_events: bool, max_touch_points: i32) -> InputCapabilities {
    if has_touch_events || max_touch_points > 0 {
        InputCapabilities::touch()
    } else {
        InputCapabilities::mouse_only()
    }
}

#[cfg(test)]
#[path = "tests/capabilities_tests.rs"]
mod tests;
