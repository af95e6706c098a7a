#![deny(unsafe_code)]
//! WASM bindings for webgl-kit.
//!
//! DOM counterparts of the core helpers: placeholder canvases, a network
//! image loader that falls back to the gradient, canvas resizing, console
//! logging, and the [`Backdrop`] entry point that ties them together.

pub mod canvas;
pub mod console;
pub mod loader;
pub mod resize;
pub mod source;

#[cfg(target_arch = "wasm32")]
mod backdrop;

#[cfg(target_arch = "wasm32")]
pub use backdrop::Backdrop;
pub use canvas::{create_gradient_canvas, create_mask_canvas};
pub use loader::load_image_or_gradient;
pub use resize::resize_canvas;
pub use source::ImageSource;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console::init_logging(tracing::Level::INFO);
}

/// Gradient placeholder canvas, for JS callers.
#[wasm_bindgen::prelude::wasm_bindgen(js_name = createGradientCanvas)]
pub fn js_create_gradient_canvas() -> Result<web_sys::HtmlCanvasElement, wasm_bindgen::JsValue> {
    create_gradient_canvas()
}

/// White mask canvas, for JS callers.
#[wasm_bindgen::prelude::wasm_bindgen(js_name = createMaskCanvas)]
pub fn js_create_mask_canvas() -> Result<web_sys::HtmlCanvasElement, wasm_bindgen::JsValue> {
    create_mask_canvas()
}
