//! DOM versions of the procedural placeholder surfaces.
//!
//! Each call creates a new detached `<canvas>` of `SURFACE_SIZE` square and
//! paints it with the 2D context, using the same stops as the CPU
//! generators in `webgl_kit_core::surface`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use webgl_kit_core::surface::{GRADIENT_END_HEX, GRADIENT_START_HEX, MASK_FILL_HEX, SURFACE_SIZE};

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Creates a detached canvas of the given size and returns it with its 2D context.
pub fn create_canvas(
    width: u32,
    height: u32,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let canvas: HtmlCanvasElement = document()?
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("created element is not a canvas"))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("context is not CanvasRenderingContext2d"))?;

    Ok((canvas, ctx))
}

/// Creates the 512x512 diagonal gradient placeholder canvas.
pub fn create_gradient_canvas() -> Result<HtmlCanvasElement, JsValue> {
    let size = SURFACE_SIZE as u32;
    let extent = SURFACE_SIZE as f64;
    let (canvas, ctx) = create_canvas(size, size)?;

    let gradient = ctx.create_linear_gradient(0.0, 0.0, extent, extent);
    gradient.add_color_stop(0.0, GRADIENT_START_HEX)?;
    gradient.add_color_stop(1.0, GRADIENT_END_HEX)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, extent, extent);

    Ok(canvas)
}

/// Creates the 512x512 solid white mask canvas.
pub fn create_mask_canvas() -> Result<HtmlCanvasElement, JsValue> {
    let size = SURFACE_SIZE as u32;
    let extent = SURFACE_SIZE as f64;
    let (canvas, ctx) = create_canvas(size, size)?;

    ctx.set_fill_style_str(MASK_FILL_HEX);
    ctx.fill_rect(0.0, 0.0, extent, extent);

    Ok(canvas)
}
