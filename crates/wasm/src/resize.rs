//! Resizes a canvas to fill the window at the device pixel ratio.

use wasm_bindgen::JsValue;
use web_sys::{HtmlCanvasElement, Window};
use webgl_kit_core::layout::{CanvasLayout, DisplayMetrics};
use webgl_kit_core::render::apply_viewport;

/// Reads `innerWidth`, `innerHeight` and `devicePixelRatio` from the window.
pub fn read_metrics(window: &Window) -> Result<DisplayMetrics, JsValue> {
    let dimension = |v: JsValue, name: &str| {
        v.as_f64()
            .ok_or_else(|| JsValue::from_str(&format!("window.{name} is not a number")))
    };
    Ok(DisplayMetrics {
        inner_width: dimension(window.inner_width()?, "innerWidth")?,
        inner_height: dimension(window.inner_height()?, "innerHeight")?,
        device_pixel_ratio: window.device_pixel_ratio(),
    })
}

/// Applies a layout to the canvas element: CSS size, backing store, and
/// the GL viewport.
pub fn apply_layout(
    canvas: &HtmlCanvasElement,
    gl: &glow::Context,
    layout: &CanvasLayout,
) -> Result<(), JsValue> {
    let style = canvas.style();
    style.set_property("width", &layout.css_width_px())?;
    style.set_property("height", &layout.css_height_px())?;
    canvas.set_width(layout.backing_width);
    canvas.set_height(layout.backing_height);
    apply_viewport(gl, layout);
    Ok(())
}

/// Sizes `canvas` to the window and updates the viewport to match.
/// Idempotent while the window metrics are unchanged.
pub fn resize_canvas(canvas: &HtmlCanvasElement, gl: &glow::Context) -> Result<CanvasLayout, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
    let layout = CanvasLayout::compute(&read_metrics(&window)?);
    apply_layout(canvas, gl, &layout)?;
    tracing::debug!(
        width = layout.backing_width,
        height = layout.backing_height,
        "canvas resized"
    );
    Ok(layout)
}
