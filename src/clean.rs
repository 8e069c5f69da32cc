//! Removal of short broken segments ahead of track-end filtering.

use crate::track::Track;
use tracing::debug;

/// Segments shorter than this many frames are removed before filtering track ends.
pub const CLEAN_MIN_SEGMENT: usize = 3;

/// Deletes every run of consecutive enabled markers shorter than `min_len`.
/// Muted markers are kept. Returns the number of markers removed.
pub fn delete_short_segments(track: &mut Track, min_len: usize) -> usize {
    let mut removed = 0;

    for segment in track.segments() {
        let len = (segment.end() - segment.start() + 1) as usize;
        if len >= min_len {
            continue;
        }

        debug!(
            "deleting segment {}..={} of track {}",
            segment.start(),
            segment.end(),
            track.name
        );

        for frame in segment {
            if track.remove(frame).is_some() {
                removed += 1;
            }
        }
    }

    removed
}
