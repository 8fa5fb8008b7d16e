use field_core::Bounds;
use web_sys as web;

/// Current viewport size in CSS pixels; zero when the window reports nothing
/// usable.
pub fn viewport_bounds(window: &web::Window) -> Bounds {
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .map(|f| f.max(0.0) as u32)
            .unwrap_or(0)
    };
    Bounds::new(px(window.inner_width()), px(window.inner_height()))
}
