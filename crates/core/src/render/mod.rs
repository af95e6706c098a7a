//! WebGL2 helpers built on `glow`.
//!
//! This module is only available when the `render` feature is enabled.
//!
//! # Module overview
//!
//! - [`shader`] -- Shader compilation and program linking.
//! - [`texture`] -- Texture creation from CPU or DOM pixel sources.
//! - [`viewport`] -- Applying a [`crate::layout::CanvasLayout`] to the viewport.
//! - [`fullscreen`] -- Fullscreen backdrop shader sources.

pub mod fullscreen;
pub mod shader;
pub mod texture;
pub mod viewport;

pub use fullscreen::{BACKDROP_FRAGMENT_SHADER, FULLSCREEN_VERTEX_SHADER};
pub use shader::{
    compile_program, compile_shader, format_shader_error, link_program, try_compile_shader,
    try_link_program, ShaderError, ShaderStage,
};
pub use texture::{create_texture, TextureOptions, TextureSource};
pub use viewport::apply_viewport;
