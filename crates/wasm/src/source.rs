//! DOM pixel sources for texture uploads.

use web_sys::{HtmlCanvasElement, HtmlImageElement};

/// An image-like DOM element that can back a texture.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// A decoded `<img>`.
    Image(HtmlImageElement),
    /// A painted `<canvas>`.
    Canvas(HtmlCanvasElement),
}

impl ImageSource {
    /// Pixel width of the source (`naturalWidth` for images).
    pub fn width(&self) -> u32 {
        match self {
            ImageSource::Image(img) => img.natural_width(),
            ImageSource::Canvas(canvas) => canvas.width(),
        }
    }

    /// Pixel height of the source (`naturalHeight` for images).
    pub fn height(&self) -> u32 {
        match self {
            ImageSource::Image(img) => img.natural_height(),
            ImageSource::Canvas(canvas) => canvas.height(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ImageSource::Canvas(_))
    }
}

impl From<HtmlImageElement> for ImageSource {
    fn from(img: HtmlImageElement) -> Self {
        ImageSource::Image(img)
    }
}

impl From<HtmlCanvasElement> for ImageSource {
    fn from(canvas: HtmlCanvasElement) -> Self {
        ImageSource::Canvas(canvas)
    }
}

// glow only exposes DOM uploads on wasm32.
#[cfg(target_arch = "wasm32")]
impl webgl_kit_core::render::TextureSource for ImageSource {
    #[allow(unsafe_code)]
    fn upload(&self, gl: &glow::Context, flip_y: bool) {
        use glow::HasContext;
        use webgl_kit_core::render::texture::UNPACK_FLIP_Y_WEBGL;

        // SAFETY: the target texture is bound by create_texture; the DOM
        // element supplies its own dimensions. The flip flag is reset so
        // later uploads on this context are unaffected.
        unsafe {
            gl.pixel_store_bool(UNPACK_FLIP_Y_WEBGL, flip_y);
            match self {
                ImageSource::Image(img) => gl.tex_image_2d_with_html_image(
                    glow::TEXTURE_2D,
                    0,
                    glow::RGBA as i32,
                    glow::RGBA,
                    glow::UNSIGNED_BYTE,
                    img,
                ),
                ImageSource::Canvas(canvas) => gl.tex_image_2d_with_html_canvas(
                    glow::TEXTURE_2D,
                    0,
                    glow::RGBA as i32,
                    glow::RGBA,
                    glow::UNSIGNED_BYTE,
                    canvas,
                ),
            }
            gl.pixel_store_bool(UNPACK_FLIP_Y_WEBGL, false);
        }
    }
}
