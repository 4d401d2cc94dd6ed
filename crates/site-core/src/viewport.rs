//! Viewport description shared by both animation loops.
//!
//! Sizes are in CSS pixels. The web frontend samples `innerWidth`,
//! `innerHeight` and `devicePixelRatio` each frame and hands a fresh value to
//! the streak field and the orbit projector, which keeps both responsive
//! without resize bookkeeping.

use crate::constants::{DPR_MAX, DPR_MIN, NARROW_VIEWPORT_MAX_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }

    pub fn with_device_pixel_ratio(mut self, dpr: f64) -> Self {
        self.device_pixel_ratio = dpr;
        self
    }

    /// Phones and small tablets get the slower, flatter orbit.
    #[inline]
    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_VIEWPORT_MAX_WIDTH
    }

    /// Pixel ratio used for the canvas backing store, clamped to `[1, 2]`.
    ///
    /// Non-finite or missing ratios fall back to 1.
    #[inline]
    pub fn backing_scale(&self) -> f64 {
        let dpr = if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            DPR_MIN
        };
        dpr.clamp(DPR_MIN, DPR_MAX)
    }

    /// Canvas backing size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        let scale = self.backing_scale();
        let w = (self.width.max(0.0) as f64 * scale).floor() as u32;
        let h = (self.height.max(0.0) as f64 * scale).floor() as u32;
        (w, h)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}
