//! Slope averages over an evaluation window, per track and across tracks.

use crate::error::{Error, Result};
use crate::scene::Context;
use crate::store::{MarkerStore, TrackId};
use crate::trajectory::Trajectory;
use crate::window::window_start;
use nalgebra as na;
use tracing::debug;

impl<'a, S: MarkerStore + ?Sized> Trajectory<'a, S> {
    /// Mean of `slope(f)` over `f` in `[frame - window_len, frame)`.
    ///
    /// Callers check `has_full_evaluation_window` first. The slope of the
    /// window's first frame also reaches one marker before the window, so
    /// this can still fail with `MissingMarker`.
    pub fn average_slope(&self, frame: i32, window_len: u32) -> Result<na::Vector2<f64>> {
        if window_len == 0 {
            return Err(Error::EmptyWindow);
        }
        let start =
            window_start(frame, window_len).ok_or(Error::WindowOutOfRange { frame, window_len })?;

        let mut sum = na::Vector2::zeros();
        for f in start..frame {
            sum += self.slope(f)?;
        }

        Ok(sum / window_len as f64)
    }
}

/// Mean of the per-track average slopes of every track with a full
/// evaluation window at `frame`, leaving out `exclude`.
///
/// Candidates whose average cannot be computed are left out of the mean.
/// Fails with `EmptyConsensus` when no candidate remains.
pub fn global_average<S: MarkerStore + ?Sized>(
    ctx: &Context<'_, S>,
    frame: i32,
    window_len: u32,
    exclude: Option<TrackId>,
) -> Result<na::Vector2<f64>> {
    let mut sum = na::Vector2::zeros();
    let mut count = 0usize;

    for t in ctx.trajectories() {
        if Some(t.id()) == exclude || !t.has_full_evaluation_window(frame, window_len) {
            continue;
        }

        match t.average_slope(frame, window_len) {
            Ok(avg) => {
                sum += avg;
                count += 1;
            }
            Err(err) => debug!("leaving {} out of consensus: {}", t.name(), err),
        }
    }

    if count == 0 {
        return Err(Error::EmptyConsensus { frame });
    }

    Ok(sum / count as f64)
}
