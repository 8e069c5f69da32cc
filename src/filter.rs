//! Track-end and foreground classification.
//!
//! Classifiers only read through a [`Context`] and return decisions; the
//! `apply_*` functions write those decisions back to the store.

use crate::aggregate::global_average;
use crate::error::Result;
use crate::math::first_exceeding_axis;
use crate::scene::Context;
use crate::store::{MarkerStore, TrackId};
use crate::trajectory::Trajectory;
use serde_derive::{Deserialize, Serialize};
use tracing::debug;

/// Marker to mute: the last analyzable frame of a track whose final slope
/// departs from the track's own average slope.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MuteDecision {
    pub track: TrackId,
    pub frame: i32,
    pub axis: usize,
    pub difference: f64,
}

/// Track to select: its average slope departs from the average of the
/// other tracks at the same frame.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ForegroundDecision {
    pub track: TrackId,
    pub frame: i32,
    pub axis: usize,
    pub difference: f64,
}

fn classify_track_end<S: MarkerStore + ?Sized>(
    ctx: &Context<'_, S>,
    t: &Trajectory<'_, S>,
    window_len: u32,
    threshold: f64,
) -> Result<Option<MuteDecision>> {
    let frame = match t.last_valid_frame(&ctx.scene) {
        Some(frame) => frame,
        None => return Ok(None),
    };

    if !t.has_full_evaluation_window(frame, window_len) {
        return Ok(None);
    }

    let track_slope = t.slope(frame)?;
    let average_slope = t.average_slope(frame, window_len)?;

    Ok(
        first_exceeding_axis(&track_slope, &average_slope, 1.0, threshold).map(
            |(axis, difference)| MuteDecision {
                track: t.id(),
                frame,
                axis,
                difference,
            },
        ),
    )
}

/// Tracks whose last analyzable frame should be muted, in store order.
pub fn track_end_outliers<S: MarkerStore + ?Sized>(
    ctx: &Context<'_, S>,
    window_len: u32,
    threshold: f64,
) -> Vec<MuteDecision> {
    let mut decisions = Vec::new();

    for t in ctx.trajectories() {
        match classify_track_end(ctx, &t, window_len, threshold) {
            Ok(Some(decision)) => {
                debug!(
                    "track end outlier {} at frame {}: axis {} differs by {}",
                    t.name(),
                    decision.frame,
                    decision.axis,
                    decision.difference
                );
                decisions.push(decision);
            }
            Ok(None) => {}
            Err(err) => debug!("no track end verdict for {}: {}", t.name(), err),
        }
    }

    decisions
}

fn classify_foreground<S: MarkerStore + ?Sized>(
    ctx: &Context<'_, S>,
    t: &Trajectory<'_, S>,
    window_len: u32,
    threshold: f64,
) -> Result<Option<ForegroundDecision>> {
    let frame = match t.last_valid_frame(&ctx.scene) {
        Some(frame) => frame,
        None => return Ok(None),
    };

    if !t.has_full_evaluation_window(frame, window_len) {
        return Ok(None);
    }

    let track_average = t.average_slope(frame, window_len)?;
    let consensus = global_average(ctx, frame, window_len, Some(t.id()))?;

    debug!(
        "{} at frame {}: average slope {:?}, consensus {:?}",
        t.name(),
        frame,
        track_average,
        consensus
    );

    Ok(first_exceeding_axis(
        &track_average,
        &consensus,
        window_len as f64,
        threshold,
    )
    .map(|(axis, difference)| ForegroundDecision {
        track: t.id(),
        frame,
        axis,
        difference,
    }))
}

/// Tracks moving unlike the other tracks towards their end, in store order.
/// Each track appears at most once.
pub fn foreground_tracks<S: MarkerStore + ?Sized>(
    ctx: &Context<'_, S>,
    window_len: u32,
    threshold: f64,
) -> Vec<ForegroundDecision> {
    let mut decisions = Vec::new();

    for t in ctx.trajectories() {
        match classify_foreground(ctx, &t, window_len, threshold) {
            Ok(Some(decision)) => {
                debug!(
                    "foreground track {}: axis {} differs by {}",
                    t.name(),
                    decision.axis,
                    decision.difference
                );
                decisions.push(decision);
            }
            Ok(None) => {}
            Err(err) => debug!("no foreground verdict for {}: {}", t.name(), err),
        }
    }

    decisions
}

/// Mutes the marker of every decision. Returns the number of markers muted.
pub fn apply_mutes<S: MarkerStore + ?Sized>(
    store: &mut S,
    decisions: &[MuteDecision],
) -> Result<usize> {
    for d in decisions {
        store.set_muted(d.track, d.frame, true)?;
    }

    Ok(decisions.len())
}

/// Selects every decided track. Returns the number of tracks selected.
pub fn apply_selection<S: MarkerStore + ?Sized>(
    store: &mut S,
    decisions: &[ForegroundDecision],
) -> Result<usize> {
    for d in decisions {
        store.set_selected(d.track, true)?;
    }

    Ok(decisions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::Clip;
    use crate::marker::Marker;
    use crate::scene::Scene;
    use crate::track::Track;

    const SIZE: (u32, u32) = (1000, 1000);

    fn track(name: &str, xs: &[f32]) -> Track {
        Track::with_markers(
            name,
            1,
            xs.iter().map(|&x| Marker::from_pixels(x, 500.0, SIZE)),
        )
    }

    #[test]
    fn test_track_end_spike_is_reported_once() {
        let mut clip = Clip::new(SIZE.0, SIZE.1);
        // spike on both axes at the last frame
        let mut t = track("spike", &[100.0; 10]);
        t.insert(10, Marker::from_pixels(140.0, 540.0, SIZE));
        clip.push(t);

        let ctx = Context::new(Scene::new(1, 11), &clip);
        let decisions = track_end_outliers(&ctx, 5, 1.0);

        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].frame, 10);
        assert_eq!(decisions[0].axis, 0);
        assert!((decisions[0].difference - 40.0).abs() < 1e-2);
    }

    #[test]
    fn test_track_end_uses_last_valid_frame_in_scene() {
        let mut clip = Clip::new(SIZE.0, SIZE.1);
        let mut t = track("spike", &[100.0; 10]);
        t.insert(10, Marker::from_pixels(140.0, 500.0, SIZE));
        clip.push(t);

        // frame 10 is outside the scene
        let ctx = Context::new(Scene::new(1, 10), &clip);
        assert!(track_end_outliers(&ctx, 5, 1.0).is_empty());
    }

    #[test]
    fn test_track_end_skips_track_without_history_before_window() {
        let mut clip = Clip::new(SIZE.0, SIZE.1);
        // window [2, 6) is full but slope(2) needs frame 0
        clip.push(track("short", &[0.0, 0.0, 0.0, 0.0, 0.0, 50.0]));

        let ctx = Context::new(Scene::new(1, 7), &clip);
        assert!(track_end_outliers(&ctx, 4, 1.0).is_empty());
    }

    #[test]
    fn test_foreground_scaled_by_window() {
        let mut clip = Clip::new(SIZE.0, SIZE.1);
        clip.push(track("a", &[0.0; 8]));
        clip.push(track("b", &[0.0; 8]));
        // one slope of 1 in [4, 8): average 0.25, scaled by 4 -> 1.0
        clip.push(track("c", &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 2.0]));

        let ctx = Context::new(Scene::new(1, 9), &clip);

        let strict = foreground_tracks(&ctx, 4, 0.6);
        assert_eq!(strict.len(), 1);
        assert_eq!(strict[0].track, TrackId(2));

        assert!(foreground_tracks(&ctx, 4, 1.5).is_empty());
    }

    #[test]
    fn test_apply_decisions() {
        let mut clip = Clip::new(SIZE.0, SIZE.1);
        clip.push(track("a", &[0.0; 4]));
        clip.push(track("b", &[0.0; 4]));

        let mutes = [MuteDecision {
            track: TrackId(0),
            frame: 4,
            axis: 0,
            difference: 10.0,
        }];
        let selection = [ForegroundDecision {
            track: TrackId(1),
            frame: 4,
            axis: 1,
            difference: 10.0,
        }];

        assert_eq!(apply_mutes(&mut clip, &mutes).unwrap(), 1);
        assert_eq!(apply_selection(&mut clip, &selection).unwrap(), 1);
        assert!(clip.tracks[0].markers[&4].mute);
        assert!(!clip.tracks[0].select);
        assert!(clip.tracks[1].select);
    }
}
