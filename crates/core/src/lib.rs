#![deny(unsafe_code)]
//! Core helpers for setting up a WebGL rendering context.
//!
//! Provides the `Srgb` color type, 512x512 procedural `Surface`s (gradient
//! placeholder and white mask), `CanvasLayout` sizing math and `KitError`.
//! With the `render` feature, the [`render`] module adds `glow`-based
//! shader, program and texture helpers.

pub mod color;
pub mod error;
pub mod layout;
pub mod surface;

#[cfg(feature = "render")]
pub mod render;

pub use color::Srgb;
pub use error::KitError;
pub use layout::{CanvasLayout, DisplayMetrics, Viewport};
pub use surface::{gradient_surface, mask_surface, LinearGradient, Surface, SURFACE_SIZE};
