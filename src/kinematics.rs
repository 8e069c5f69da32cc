//! First and second differences of marker positions.

use crate::error::{Error, Result};
use crate::store::MarkerStore;
use crate::trajectory::Trajectory;
use nalgebra as na;

impl<'a, S: MarkerStore + ?Sized> Trajectory<'a, S> {
    /// Pixel position of an enabled marker.
    pub fn enabled_position(&self, frame: i32) -> Result<na::Point2<f64>> {
        match self.marker(frame) {
            Some(m) if m.is_enabled() => Ok(m.pixels(self.clip_size())),
            _ => Err(Error::MissingMarker {
                track: self.id(),
                frame,
            }),
        }
    }

    fn previous_frame(&self, frame: i32) -> Result<i32> {
        frame.checked_sub(1).ok_or(Error::MissingMarker {
            track: self.id(),
            frame,
        })
    }

    /// `position(frame) - position(frame - 1)`; both markers must exist and be enabled.
    pub fn velocity(&self, frame: i32) -> Result<na::Vector2<f64>> {
        let a = self.enabled_position(frame)?;
        let b = self.enabled_position(self.previous_frame(frame)?)?;

        Ok(a - b)
    }

    /// `velocity(frame) - velocity(frame - 1)`; needs enabled markers at
    /// `frame`, `frame - 1` and `frame - 2`.
    pub fn slope(&self, frame: i32) -> Result<na::Vector2<f64>> {
        let v1 = self.velocity(frame)?;
        let v2 = self.velocity(self.previous_frame(frame)?)?;

        Ok(v1 - v2)
    }
}
