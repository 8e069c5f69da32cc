//! User-facing filter operators.

use crate::clean::CLEAN_MIN_SEGMENT;
use crate::error::{Error, Result};
use crate::filter::{self, ForegroundDecision, MuteDecision};
use crate::scene::{Context, Scene};
use crate::store::MarkerStore;
use serde_derive::{Deserialize, Serialize};
use tracing::{debug, info};

pub const EVALUATION_TIME_MAX: u32 = 1000;
pub const THRESHOLD_MAX: u32 = 100;

pub trait Operator {
    type Report;

    fn label(&self) -> &'static str;

    fn validate(&self) -> Result<()>;

    fn execute<S: MarkerStore + ?Sized>(&self, scene: Scene, store: &mut S) -> Result<Self::Report>;

    /// Operators run only on an active clip with at least one track.
    fn poll<S: MarkerStore + ?Sized>(store: Option<&S>) -> bool {
        store.map_or(false, |s| s.track_count() > 0)
    }
}

/// Checks preconditions, then runs the operator against the active clip.
pub fn invoke<O, S>(op: &O, scene: Scene, store: Option<&mut S>) -> Result<O::Report>
where
    O: Operator,
    S: MarkerStore + ?Sized,
{
    let store = store.ok_or(Error::NoActiveClip)?;
    if !O::poll(Some(&*store)) {
        return Err(Error::NoTracks);
    }

    op.validate()?;
    debug!("running {}", op.label());
    op.execute(scene, store)
}

fn check_range(name: &'static str, value: u32, max: u32) -> Result<()> {
    if value > max {
        return Err(Error::InvalidParameter {
            name,
            value,
            min: 0,
            max,
        });
    }

    Ok(())
}

/// Mutes the end of tracks whose last frame jumps away from their recent trend.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct FilterTrackEnds {
    /// Length of the last part of the track that is evaluated.
    pub evaluation_time: u32,
    /// Difference over which a marker is considered an outlier.
    pub threshold: u32,
}

impl Default for FilterTrackEnds {
    fn default() -> Self {
        Self {
            evaluation_time: 10,
            threshold: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackEndsReport {
    pub markers_cleaned: usize,
    pub muted: Vec<MuteDecision>,
}

impl TrackEndsReport {
    pub fn message(&self) -> String {
        format!("Muted {} track ends", self.muted.len())
    }
}

impl Operator for FilterTrackEnds {
    type Report = TrackEndsReport;

    fn label(&self) -> &'static str {
        "Filter Track Ends"
    }

    fn validate(&self) -> Result<()> {
        check_range("evaluation_time", self.evaluation_time, EVALUATION_TIME_MAX)?;
        check_range("threshold", self.threshold, THRESHOLD_MAX)
    }

    fn execute<S: MarkerStore + ?Sized>(&self, scene: Scene, store: &mut S) -> Result<Self::Report> {
        let markers_cleaned = store.delete_short_segments(CLEAN_MIN_SEGMENT);

        let muted = {
            let ctx = Context::new(scene, &*store);
            filter::track_end_outliers(&ctx, self.evaluation_time, f64::from(self.threshold))
        };

        filter::apply_mutes(store, &muted)?;

        let report = TrackEndsReport {
            markers_cleaned,
            muted,
        };
        info!("{}", report.message());

        Ok(report)
    }
}

/// Selects tracks moving faster than the other tracks towards their end.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct FilterForeground {
    /// Length of the last part of the track that is evaluated.
    pub evaluation_time: u32,
    /// Difference over which a track is considered foreground.
    pub threshold: u32,
}

impl Default for FilterForeground {
    fn default() -> Self {
        Self {
            evaluation_time: 20,
            threshold: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForegroundReport {
    pub selected: Vec<ForegroundDecision>,
}

impl ForegroundReport {
    pub fn message(&self) -> String {
        format!("Selected {} foreground tracks", self.selected.len())
    }
}

impl Operator for FilterForeground {
    type Report = ForegroundReport;

    fn label(&self) -> &'static str {
        "Filter Foreground Tracks"
    }

    fn validate(&self) -> Result<()> {
        check_range("evaluation_time", self.evaluation_time, EVALUATION_TIME_MAX)?;
        check_range("threshold", self.threshold, THRESHOLD_MAX)
    }

    fn execute<S: MarkerStore + ?Sized>(&self, scene: Scene, store: &mut S) -> Result<Self::Report> {
        let selected = {
            let ctx = Context::new(scene, &*store);
            filter::foreground_tracks(&ctx, self.evaluation_time, f64::from(self.threshold))
        };

        filter::apply_selection(store, &selected)?;

        let report = ForegroundReport { selected };
        info!("{}", report.message());

        Ok(report)
    }
}
