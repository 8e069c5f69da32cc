use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

/// Tracked feature position at one frame, in normalized clip coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub co: na::Point2<f32>,
    #[serde(default)]
    pub mute: bool,
}

impl Marker {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            co: na::Point2::new(x, y),
            mute: false,
        }
    }

    #[inline]
    pub fn muted(x: f32, y: f32) -> Self {
        Self {
            co: na::Point2::new(x, y),
            mute: true,
        }
    }

    /// Builds a marker from a pixel position on a clip of the given size.
    #[inline]
    pub fn from_pixels(px: f32, py: f32, (w, h): (u32, u32)) -> Self {
        Self::new(px / w as f32, py / h as f32)
    }

    #[inline(always)]
    pub fn is_enabled(&self) -> bool {
        !self.mute
    }

    /// Position in pixels, in f64 for the difference computations.
    #[inline]
    pub fn pixels(&self, (w, h): (u32, u32)) -> na::Point2<f64> {
        na::Point2::new(
            f64::from(self.co.x) * f64::from(w),
            f64::from(self.co.y) * f64::from(h),
        )
    }
}
