//! Canvas sizing math for matching a drawing surface to the display.
//!
//! The CSS size follows the window's inner size; the backing store and the
//! GL viewport are scaled by the device pixel ratio so rendering stays sharp
//! on high-density displays.

use serde::{Deserialize, Serialize};

/// Environment-derived display metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    /// Window inner width in CSS pixels.
    pub inner_width: f64,
    /// Window inner height in CSS pixels.
    pub inner_height: f64,
    /// Physical pixels per CSS pixel.
    pub device_pixel_ratio: f64,
}

impl DisplayMetrics {
    /// The effective scaling factor: non-finite or non-positive ratios
    /// fall back to 1.
    pub fn scale(&self) -> f64 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        }
    }
}

/// A GL viewport rectangle in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Resolved canvas sizes for one set of display metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasLayout {
    /// `style.width` in CSS pixels.
    pub css_width: f64,
    /// `style.height` in CSS pixels.
    pub css_height: f64,
    /// Backing store width (`canvas.width`).
    pub backing_width: u32,
    /// Backing store height (`canvas.height`).
    pub backing_height: u32,
    pub viewport: Viewport,
}

impl CanvasLayout {
    /// Computes CSS size (W, H), backing store (W*D, H*D) and a viewport
    /// covering the whole backing store.
    ///
    /// Fractional backing sizes truncate toward zero and negative or
    /// non-finite window sizes become zero, mirroring how the DOM converts
    /// a float assigned to `canvas.width`.
    pub fn compute(metrics: &DisplayMetrics) -> Self {
        let scale = metrics.scale();
        let css_width = sanitize(metrics.inner_width);
        let css_height = sanitize(metrics.inner_height);
        let backing_width = to_backing(css_width * scale);
        let backing_height = to_backing(css_height * scale);

        Self {
            css_width,
            css_height,
            backing_width,
            backing_height,
            viewport: Viewport {
                x: 0,
                y: 0,
                width: clamp_i32(backing_width),
                height: clamp_i32(backing_height),
            },
        }
    }

    /// `style.width` as a CSS length string, e.g. `"800px"`.
    pub fn css_width_px(&self) -> String {
        format!("{}px", self.css_width)
    }

    /// `style.height` as a CSS length string.
    pub fn css_height_px(&self) -> String {
        format!("{}px", self.css_height)
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

fn to_backing(v: f64) -> u32 {
    // `as` saturates and truncates toward zero.
    v as u32
}

fn clamp_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
