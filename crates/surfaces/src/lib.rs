#![deny(unsafe_code)]
//! Surface registry: maps surface names to the procedural generators and
//! provides PNG export.
//!
//! Both the CLI and the browser bindings resolve surfaces through
//! [`SurfaceKind`] so the set of names lives in one place.

#[cfg(feature = "png")]
pub mod snapshot;

use serde::{Deserialize, Serialize};
use webgl_kit_core::error::KitError;
use webgl_kit_core::surface::{gradient_surface, mask_surface, Surface};

/// All available surface names.
const SURFACE_NAMES: &[&str] = &["gradient", "mask"];

/// The procedural placeholder surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    /// Diagonal two-stop gradient used as a background placeholder.
    Gradient,
    /// Solid white mask.
    Mask,
}

impl SurfaceKind {
    /// Looks a surface up by name.
    ///
    /// Returns `KitError::UnknownSurface` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, KitError> {
        match name {
            "gradient" => Ok(SurfaceKind::Gradient),
            "mask" => Ok(SurfaceKind::Mask),
            _ => Err(KitError::UnknownSurface(name.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SurfaceKind::Gradient => "gradient",
            SurfaceKind::Mask => "mask",
        }
    }

    /// Returns a slice of all recognized surface names.
    pub fn list_surfaces() -> &'static [&'static str] {
        SURFACE_NAMES
    }

    /// Generates a fresh surface; nothing is cached between calls.
    pub fn generate(self) -> Surface {
        tracing::debug!(surface = self.name(), "generating surface");
        match self {
            SurfaceKind::Gradient => gradient_surface(),
            SurfaceKind::Mask => mask_surface(),
        }
    }
}
