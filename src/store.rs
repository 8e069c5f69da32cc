use crate::error::Result;
use crate::marker::Marker;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Position of a track in the store's stable iteration order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub usize);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Host-owned track and marker storage.
///
/// Analysis only reads through `marker`; the write methods are used once the
/// decisions of a pass are final.
pub trait MarkerStore {
    /// Clip dimensions in pixels (width, height).
    fn clip_size(&self) -> (u32, u32);

    fn track_count(&self) -> usize;

    fn track_name(&self, track: TrackId) -> Option<&str>;

    fn marker(&self, track: TrackId, frame: i32) -> Option<Marker>;

    fn set_muted(&mut self, track: TrackId, frame: i32, mute: bool) -> Result<()>;

    fn set_selected(&mut self, track: TrackId, select: bool) -> Result<()>;

    /// Deletes runs of consecutive enabled markers shorter than `min_len`
    /// frames. Returns the number of markers removed.
    fn delete_short_segments(&mut self, min_len: usize) -> usize;

    #[inline]
    fn track_ids(&self) -> Vec<TrackId> {
        (0..self.track_count()).map(TrackId).collect()
    }
}
