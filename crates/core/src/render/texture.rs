//! Texture creation helpers for WebGL2 / OpenGL.
//!
//! [`create_texture`] selects a texture unit, creates and binds a 2-D
//! texture, fixes its sampling state (LINEAR filtering, CLAMP_TO_EDGE
//! wrapping) and uploads RGBA8 pixels from a [`TextureSource`] in one call.
//! The texture stays bound to the selected unit.

use serde::{Deserialize, Serialize};

use crate::surface::Surface;

/// `UNPACK_FLIP_Y_WEBGL` pixel-store parameter. Only meaningful on WebGL
/// contexts; native GL rejects it.
pub const UNPACK_FLIP_Y_WEBGL: u32 = 0x9240;

/// Upload options for [`create_texture`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureOptions {
    /// Store rows bottom-first so that image space (top-left origin)
    /// matches GL texture space (bottom-left origin).
    pub flip_y: bool,
}

impl TextureOptions {
    pub fn flipped() -> Self {
        Self { flip_y: true }
    }
}

/// Something that can fill the currently bound `TEXTURE_2D` with RGBA8 data.
pub trait TextureSource {
    /// Issues `texImage2D` for level 0 against the bound `TEXTURE_2D`
    /// target, with rows flipped when `flip_y` is set.
    fn upload(&self, gl: &glow::Context, flip_y: bool);
}

impl TextureSource for Surface {
    #[allow(unsafe_code)]
    fn upload(&self, gl: &glow::Context, flip_y: bool) {
        use glow::HasContext;

        let flipped;
        let pixels = if flip_y {
            flipped = self.rows_flipped();
            flipped.as_slice()
        } else {
            self.data()
        };

        // SAFETY: `pixels` holds exactly width * height * 4 bytes, matching
        // the RGBA / UNSIGNED_BYTE format and the declared dimensions.
        unsafe {
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                self.width() as i32,
                self.height() as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(pixels)),
            );
        }
    }
}

/// The `TEXTUREi` enumerant for texture unit `unit`.
pub fn texture_unit_enum(unit: u32) -> u32 {
    glow::TEXTURE0 + unit
}

/// Creates a LINEAR / CLAMP_TO_EDGE texture on `unit` and uploads `source`.
///
/// The upload itself has no error path; failures inside the driver are
/// not observable here.
///
/// # Errors
///
/// Returns an error string only if the context cannot allocate a texture name.
#[allow(unsafe_code)]
pub fn create_texture<S: TextureSource + ?Sized>(
    gl: &glow::Context,
    unit: u32,
    source: &S,
    options: TextureOptions,
) -> Result<glow::Texture, String> {
    use glow::HasContext;

    // SAFETY: glow wraps raw GL calls as unsafe. All enumerants below are
    // valid for TEXTURE_2D and the texture handle is freshly created.
    let texture = unsafe {
        gl.active_texture(texture_unit_enum(unit));
        gl.create_texture()?
    };

    unsafe {
        gl.bind_texture(glow::TEXTURE_2D, Some(texture));
        gl.tex_parameter_i32(
            glow::TEXTURE_2D,
            glow::TEXTURE_MIN_FILTER,
            glow::LINEAR as i32,
        );
        gl.tex_parameter_i32(
            glow::TEXTURE_2D,
            glow::TEXTURE_MAG_FILTER,
            glow::LINEAR as i32,
        );
        gl.tex_parameter_i32(
            glow::TEXTURE_2D,
            glow::TEXTURE_WRAP_S,
            glow::CLAMP_TO_EDGE as i32,
        );
        gl.tex_parameter_i32(
            glow::TEXTURE_2D,
            glow::TEXTURE_WRAP_T,
            glow::CLAMP_TO_EDGE as i32,
        );
    }

    source.upload(gl, options.flip_y);

    tracing::debug!(unit, flip_y = options.flip_y, "texture created");
    Ok(texture)
}
