//! `Backdrop`: a fullscreen canvas showing a remote image through a mask.
//!
//! Wires the helpers together: load the background (falling back to the
//! gradient), paint the mask, resize the canvas, compile the backdrop
//! program, upload both sources as textures and draw a fullscreen triangle.
//! GL objects are only created once every DOM source is ready.

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};
use webgl_kit_core::render::fullscreen::{
    BACKGROUND_UNIFORM, BACKGROUND_UNIT, MASK_UNIFORM, MASK_UNIT,
};
use webgl_kit_core::render::texture::texture_unit_enum;
use webgl_kit_core::render::{
    compile_program, create_texture, TextureOptions, BACKDROP_FRAGMENT_SHADER,
    FULLSCREEN_VERTEX_SHADER,
};

use crate::canvas::create_mask_canvas;
use crate::loader::load_image_or_gradient;
use crate::resize::resize_canvas;
use crate::source::ImageSource;

#[wasm_bindgen]
pub struct Backdrop {
    canvas: HtmlCanvasElement,
    gl: glow::Context,
    program: glow::Program,
    vao: glow::VertexArray,
    background: glow::Texture,
    mask: glow::Texture,
    used_fallback: bool,
}

#[wasm_bindgen]
impl Backdrop {
    /// Sets up a WebGL2 context on `canvas` and loads `image_url` as the
    /// background. `flip_y` flips both textures on upload.
    pub async fn create(
        canvas: HtmlCanvasElement,
        image_url: String,
        flip_y: bool,
    ) -> Result<Backdrop, JsValue> {
        let context: WebGl2RenderingContext = canvas
            .get_context("webgl2")?
            .ok_or_else(|| JsValue::from_str("WebGL2 is not supported"))?
            .dyn_into()?;
        let gl = glow::Context::from_webgl2_context(context);

        let options = TextureOptions { flip_y };
        let background_source = load_image_or_gradient(&image_url).await?;
        let mask_source = ImageSource::Canvas(create_mask_canvas()?);
        let used_fallback = background_source.is_fallback();

        resize_canvas(&canvas, &gl)?;

        let program = compile_program(&gl, FULLSCREEN_VERTEX_SHADER, BACKDROP_FRAGMENT_SHADER)
            .ok_or_else(|| JsValue::from_str("backdrop program failed to build, see console"))?;

        let (background, mask, vao) =
            match Self::build_objects(&gl, program, &background_source, &mask_source, options) {
                Ok(objects) => objects,
                Err(e) => {
                    delete_program(&gl, program);
                    return Err(e);
                }
            };

        tracing::info!(used_fallback, "backdrop ready");
        Ok(Backdrop {
            canvas,
            gl,
            program,
            vao,
            background,
            mask,
            used_fallback,
        })
    }

    /// Whether the gradient placeholder replaced the requested image.
    #[wasm_bindgen(getter)]
    pub fn used_fallback(&self) -> bool {
        self.used_fallback
    }

    /// Re-sizes the canvas to the window and redraws.
    pub fn resize(&self) -> Result<(), JsValue> {
        resize_canvas(&self.canvas, &self.gl)?;
        self.draw();
        Ok(())
    }

    /// Draws the masked background over the whole viewport.
    #[allow(unsafe_code)]
    pub fn draw(&self) {
        use glow::HasContext;

        // SAFETY: every handle was created on self.gl in create().
        unsafe {
            self.gl.clear_color(0.0, 0.0, 0.0, 0.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
            self.gl.use_program(Some(self.program));
            self.gl.active_texture(texture_unit_enum(BACKGROUND_UNIT));
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.background));
            self.gl.active_texture(texture_unit_enum(MASK_UNIT));
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.mask));
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl.draw_arrays(glow::TRIANGLES, 0, 3);
            self.gl.bind_vertex_array(None);
        }
    }

    /// Deletes all GL objects. The canvas and context stay with the caller.
    #[allow(unsafe_code)]
    pub fn destroy(self) {
        use glow::HasContext;

        // SAFETY: handles are valid and not used after this call.
        unsafe {
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_texture(self.background);
            self.gl.delete_texture(self.mask);
            self.gl.delete_program(self.program);
        }
    }
}

impl Backdrop {
    /// Creates both textures and the VAO. Anything created before a
    /// failure is deleted again; the program stays with the caller.
    fn build_objects(
        gl: &glow::Context,
        program: glow::Program,
        background_source: &ImageSource,
        mask_source: &ImageSource,
        options: TextureOptions,
    ) -> Result<(glow::Texture, glow::Texture, glow::VertexArray), JsValue> {
        let background = create_texture(gl, BACKGROUND_UNIT, background_source, options)
            .map_err(|e| JsValue::from_str(&e))?;
        let mask = match create_texture(gl, MASK_UNIT, mask_source, options) {
            Ok(mask) => mask,
            Err(e) => {
                delete_textures(gl, &[background]);
                return Err(JsValue::from_str(&e));
            }
        };
        match Self::init_pipeline(gl, program) {
            Ok(vao) => Ok((background, mask, vao)),
            Err(e) => {
                delete_textures(gl, &[background, mask]);
                Err(e)
            }
        }
    }

    #[allow(unsafe_code)]
    fn init_pipeline(gl: &glow::Context, program: glow::Program) -> Result<glow::VertexArray, JsValue> {
        use glow::HasContext;

        // SAFETY: program was linked on this context; uniform locations are
        // looked up on the same program before use.
        unsafe {
            let vao = gl.create_vertex_array().map_err(|e| JsValue::from_str(&e))?;
            gl.use_program(Some(program));
            let background = gl.get_uniform_location(program, BACKGROUND_UNIFORM);
            let mask = gl.get_uniform_location(program, MASK_UNIFORM);
            gl.uniform_1_i32(background.as_ref(), BACKGROUND_UNIT as i32);
            gl.uniform_1_i32(mask.as_ref(), MASK_UNIT as i32);
            gl.enable(glow::BLEND);
            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
            Ok(vao)
        }
    }
}

#[allow(unsafe_code)]
fn delete_textures(gl: &glow::Context, textures: &[glow::Texture]) {
    use glow::HasContext;

    // SAFETY: the textures were created on `gl` and are not referenced elsewhere.
    for &texture in textures {
        unsafe { gl.delete_texture(texture) };
    }
}

#[allow(unsafe_code)]
fn delete_program(gl: &glow::Context, program: glow::Program) {
    use glow::HasContext;

    // SAFETY: the program was linked on `gl` and is not referenced elsewhere.
    unsafe { gl.delete_program(program) };
}
