//! CPU-side RGBA8 drawing surfaces and the procedural placeholder generators.
//!
//! Both generators produce a fresh `SURFACE_SIZE` x `SURFACE_SIZE` surface on
//! every call; nothing is cached. The browser crate draws the same content
//! into DOM canvases using the hex constants exported here.

use glam::DVec2;

use crate::color::Srgb;
use crate::error::KitError;

/// Edge length in pixels of every generated surface.
pub const SURFACE_SIZE: usize = 512;

/// First gradient stop (offset 0).
pub const GRADIENT_START_HEX: &str = "#ff9a9e";
/// Last gradient stop (offset 1).
pub const GRADIENT_END_HEX: &str = "#fad0c4";
/// Fill color of the mask surface.
pub const MASK_FILL_HEX: &str = "#ffffff";

const GRADIENT_START: Srgb = Srgb {
    r: 255.0 / 255.0,
    g: 154.0 / 255.0,
    b: 158.0 / 255.0,
};

const GRADIENT_END: Srgb = Srgb {
    r: 250.0 / 255.0,
    g: 208.0 / 255.0,
    b: 196.0 / 255.0,
};

/// A row-major RGBA8 image, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Surface {
    /// Creates a fully transparent surface.
    ///
    /// Returns `KitError::InvalidDimensions` if either dimension is zero
    /// or if the byte length overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, KitError> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Creates an opaque surface filled with a single color.
    pub fn filled(width: usize, height: usize, color: Srgb) -> Result<Self, KitError> {
        let len = byte_len(width, height)?;
        let pixel = color.to_rgba8();
        let data = pixel.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wraps an existing RGBA8 buffer.
    ///
    /// Returns `KitError::BufferSizeMismatch` if `data` is not exactly
    /// `width * height * 4` bytes.
    pub fn from_rgba(width: usize, height: usize, data: Vec<u8>) -> Result<Self, KitError> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(KitError::BufferSizeMismatch {
                width,
                height,
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA8 bytes, row-major, top row first.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the RGBA value at (x, y), or `None` outside the surface.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Returns a copy of the pixel data with the row order reversed
    /// (bottom row first), as GL expects when uploading with a Y flip.
    pub fn rows_flipped(&self) -> Vec<u8> {
        let stride = self.width * 4;
        self.data
            .chunks_exact(stride)
            .rev()
            .flatten()
            .copied()
            .collect()
    }
}

fn byte_len(width: usize, height: usize) -> Result<usize, KitError> {
    if width == 0 || height == 0 {
        return Err(KitError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or(KitError::InvalidDimensions)
}

/// A two-stop linear gradient between two points, with the same geometry
/// as `CanvasRenderingContext2D.createLinearGradient`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub start: DVec2,
    pub end: DVec2,
    pub from: Srgb,
    pub to: Srgb,
}

impl LinearGradient {
    /// Color at `point`: the point is projected onto the start-end line,
    /// and the projection parameter is clamped to [0, 1]. A degenerate
    /// line (start == end) yields the last stop everywhere.
    pub fn sample(&self, point: DVec2) -> Srgb {
        let axis = self.end - self.start;
        let len_sq = axis.length_squared();
        if len_sq == 0.0 {
            return self.to;
        }
        let t = (point - self.start).dot(axis) / len_sq;
        self.from.lerp(self.to, t)
    }

    /// Fills every pixel of `surface`, sampling at pixel centres.
    pub fn paint(&self, surface: &mut Surface) {
        let width = surface.width;
        for (i, px) in surface.data.chunks_exact_mut(4).enumerate() {
            let p = DVec2::new((i % width) as f64 + 0.5, (i / width) as f64 + 0.5);
            px.copy_from_slice(&self.sample(p).to_rgba8());
        }
    }
}

/// Generates the 512x512 diagonal placeholder gradient
/// (`#ff9a9e` at the top-left corner to `#fad0c4` at the bottom-right).
pub fn gradient_surface() -> Surface {
    let size = SURFACE_SIZE as f64;
    let gradient = LinearGradient {
        start: DVec2::ZERO,
        end: DVec2::new(size, size),
        from: GRADIENT_START,
        to: GRADIENT_END,
    };
    let mut surface = Surface {
        width: SURFACE_SIZE,
        height: SURFACE_SIZE,
        data: vec![0; SURFACE_SIZE * SURFACE_SIZE * 4],
    };
    gradient.paint(&mut surface);
    surface
}

/// Generates the 512x512 solid white mask.
pub fn mask_surface() -> Surface {
    Surface {
        width: SURFACE_SIZE,
        height: SURFACE_SIZE,
        data: vec![255; SURFACE_SIZE * SURFACE_SIZE * 4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_stop_constants_match_hex() {
        assert_eq!(GRADIENT_START.to_hex(), GRADIENT_START_HEX);
        assert_eq!(GRADIENT_END.to_hex(), GRADIENT_END_HEX);
        assert_eq!(Srgb::WHITE.to_hex(), MASK_FILL_HEX);
    }

    #[test]
    fn gradient_surface_is_512_square() {
        let s = gradient_surface();
        assert_eq!(s.width(), 512);
        assert_eq!(s.height(), 512);
        assert_eq!(s.data().len(), 512 * 512 * 4);
    }

    #[test]
    fn gradient_corners_approach_stops() {
        let s = gradient_surface();
        let top_left = s.pixel(0, 0).unwrap();
        let bottom_right = s.pixel(511, 511).unwrap();
        assert_eq!(top_left, [0xff, 0x9a, 0x9e, 255]);
        assert_eq!(bottom_right, [0xfa, 0xd0, 0xc4, 255]);
    }

    #[test]
    fn gradient_is_constant_along_anti_diagonal() {
        let s = gradient_surface();
        assert_eq!(s.pixel(511, 0), s.pixel(0, 511));
        assert_eq!(s.pixel(300, 10), s.pixel(10, 300));
    }

    #[test]
    fn gradient_is_opaque() {
        let s = gradient_surface();
        assert!(s.data().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn mask_surface_is_solid_white() {
        let s = mask_surface();
        assert_eq!(s.width(), SURFACE_SIZE);
        assert_eq!(s.height(), SURFACE_SIZE);
        assert!(s.data().iter().all(|&b| b == 255));
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(Surface::new(0, 4), Err(KitError::InvalidDimensions)));
        assert!(matches!(Surface::new(4, 0), Err(KitError::InvalidDimensions)));
    }

    #[test]
    fn new_rejects_overflowing_dimensions() {
        assert!(matches!(
            Surface::new(usize::MAX, 2),
            Err(KitError::InvalidDimensions)
        ));
    }

    #[test]
    fn new_is_transparent() {
        let s = Surface::new(3, 2).unwrap();
        assert!(s.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn filled_writes_every_pixel() {
        let c = Srgb::from_hex("#102030").unwrap();
        let s = Surface::filled(5, 3, c).unwrap();
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(s.pixel(x, y), Some([0x10, 0x20, 0x30, 255]));
            }
        }
    }

    #[test]
    fn from_rgba_checks_length() {
        let err = Surface::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            KitError::BufferSizeMismatch {
                expected: 16,
                got: 15,
                ..
            }
        ));
        assert!(Surface::from_rgba(2, 2, vec![0; 16]).is_ok());
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        let s = Surface::new(2, 2).unwrap();
        assert!(s.pixel(2, 0).is_none());
        assert!(s.pixel(0, 2).is_none());
    }

    #[test]
    fn rows_flipped_reverses_row_order_only() {
        let data = vec![
            1, 1, 1, 1, 2, 2, 2, 2, //
            3, 3, 3, 3, 4, 4, 4, 4, //
            5, 5, 5, 5, 6, 6, 6, 6,
        ];
        let s = Surface::from_rgba(2, 3, data).unwrap();
        let flipped = s.rows_flipped();
        assert_eq!(
            flipped,
            vec![
                5, 5, 5, 5, 6, 6, 6, 6, //
                3, 3, 3, 3, 4, 4, 4, 4, //
                1, 1, 1, 1, 2, 2, 2, 2,
            ]
        );
    }

    #[test]
    fn degenerate_gradient_uses_last_stop() {
        let g = LinearGradient {
            start: DVec2::new(1.0, 1.0),
            end: DVec2::new(1.0, 1.0),
            from: Srgb::from_hex("#000000").unwrap(),
            to: Srgb::WHITE,
        };
        assert_eq!(g.sample(DVec2::new(50.0, 3.0)), Srgb::WHITE);
    }

    #[test]
    fn gradient_clamps_beyond_endpoints() {
        let black = Srgb::from_hex("#000000").unwrap();
        let g = LinearGradient {
            start: DVec2::ZERO,
            end: DVec2::new(10.0, 0.0),
            from: black,
            to: Srgb::WHITE,
        };
        assert_eq!(g.sample(DVec2::new(-5.0, 0.0)), black);
        assert_eq!(g.sample(DVec2::new(25.0, 9.0)), Srgb::WHITE);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn double_flip_is_identity(w in 1usize..8, h in 1usize..8, seed in any::<u8>()) {
                let data: Vec<u8> = (0..w * h * 4).map(|i| (i as u8).wrapping_add(seed)).collect();
                let s = Surface::from_rgba(w, h, data.clone()).unwrap();
                let once = Surface::from_rgba(w, h, s.rows_flipped()).unwrap();
                prop_assert_eq!(once.rows_flipped(), data);
            }

            #[test]
            fn filled_surface_has_expected_length(w in 1usize..64, h in 1usize..64) {
                let s = Surface::filled(w, h, Srgb::WHITE).unwrap();
                prop_assert_eq!(s.data().len(), w * h * 4);
            }
        }
    }
}
