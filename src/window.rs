//! Evaluation window checks gating slope averaging.

use crate::scene::Scene;
use crate::store::MarkerStore;
use crate::trajectory::Trajectory;

/// First frame of the window `[frame - window_len, frame)`, `None` when the
/// window is empty or reaches below `i32::MIN`.
pub(crate) fn window_start(frame: i32, window_len: u32) -> Option<i32> {
    if window_len == 0 {
        return None;
    }

    frame.checked_sub(i32::try_from(window_len).ok()?)
}

impl<'a, S: MarkerStore + ?Sized> Trajectory<'a, S> {
    /// True when every frame `f` in `[frame - window_len, frame)` has enabled
    /// markers at `f` and `f - 1`. A single gap or muted marker rejects the
    /// whole window; an empty window is never full.
    pub fn has_full_evaluation_window(&self, frame: i32, window_len: u32) -> bool {
        let start = match window_start(frame, window_len) {
            Some(start) => start,
            None => return false,
        };

        (start..frame).all(|f| {
            self.is_enabled(f) && f.checked_sub(1).map_or(false, |prev| self.is_enabled(prev))
        })
    }

    // enabled marker with any marker right before it
    fn is_valid_frame(&self, frame: i32) -> bool {
        self.is_enabled(frame) && frame.checked_sub(1).map_or(false, |prev| self.exists(prev))
    }

    /// Frames of the scene holding an enabled marker with any marker right before it.
    pub fn valid_frames(&self, scene: &Scene) -> Vec<i32> {
        scene.frames().filter(|&f| self.is_valid_frame(f)).collect()
    }

    /// Last frame of `valid_frames`, the frame a classifier looks at.
    pub fn last_valid_frame(&self, scene: &Scene) -> Option<i32> {
        scene.frames().rev().find(|&f| self.is_valid_frame(f))
    }
}
