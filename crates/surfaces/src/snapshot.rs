//! PNG export of a [`Surface`].
//!
//! Feature-gated behind `png` (default on) so that WASM builds can depend
//! on this crate without pulling in the `image` crate.

use std::path::Path;

use webgl_kit_core::error::KitError;
use webgl_kit_core::surface::Surface;

/// Writes a surface as an RGBA PNG.
///
/// Returns `KitError::InvalidDimensions` if the surface dimensions overflow
/// `u32`, or `KitError::Io` on write failure.
pub fn write_png(surface: &Surface, path: &Path) -> Result<(), KitError> {
    let w = u32::try_from(surface.width()).map_err(|_| KitError::InvalidDimensions)?;
    let h = u32::try_from(surface.height()).map_err(|_| KitError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, surface.data().to_vec())
        .ok_or_else(|| KitError::Io("RGBA buffer size mismatch".into()))?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| KitError::Io(e.to_string()))?;
    tracing::info!(path = %path.display(), width = w, height = h, "wrote png");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use webgl_kit_core::surface::{gradient_surface, mask_surface};

    #[test]
    fn write_png_preserves_dimensions_and_pixels() {
        let surface = gradient_surface();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradient.png");

        write_png(&surface, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 512);
        assert_eq!(img.height(), 512);
        assert_eq!(img.get_pixel(0, 0).0, surface.pixel(0, 0).unwrap());
        assert_eq!(img.get_pixel(511, 511).0, surface.pixel(511, 511).unwrap());
    }

    #[test]
    fn write_png_to_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("mask.png");
        let err = write_png(&mask_surface(), &path).unwrap_err();
        assert!(matches!(err, KitError::Io(_)), "got {err:?}");
    }
}
