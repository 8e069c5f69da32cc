use crate::clean;
use crate::error::{Error, Result};
use crate::marker::Marker;
use crate::store::{MarkerStore, TrackId};
use crate::track::Track;
use serde_derive::{Deserialize, Serialize};
use std::io;
use tracing::info;

/// In-memory movie clip: pixel dimensions plus its tracks in stable order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Clip {
    pub size: (u32, u32),
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Clip {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            tracks: Vec::new(),
        }
    }

    pub fn push(&mut self, track: Track) -> TrackId {
        self.tracks.push(track);
        TrackId(self.tracks.len() - 1)
    }

    #[inline]
    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(id.0)
    }

    #[inline]
    pub fn track_mut(&mut self, id: TrackId) -> Option<&mut Track> {
        self.tracks.get_mut(id.0)
    }

    pub fn find(&self, name: &str) -> Option<TrackId> {
        self.tracks.iter().position(|t| t.name == name).map(TrackId)
    }

    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl MarkerStore for Clip {
    #[inline]
    fn clip_size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    fn track_count(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    fn track_name(&self, track: TrackId) -> Option<&str> {
        self.track(track).map(|t| t.name.as_str())
    }

    #[inline]
    fn marker(&self, track: TrackId, frame: i32) -> Option<Marker> {
        self.track(track)?.find_frame(frame).copied()
    }

    fn set_muted(&mut self, track: TrackId, frame: i32, mute: bool) -> Result<()> {
        let marker = self
            .track_mut(track)
            .ok_or(Error::UnknownTrack(track))?
            .find_frame_mut(frame)
            .ok_or(Error::UnknownMarker { track, frame })?;

        marker.mute = mute;
        Ok(())
    }

    fn set_selected(&mut self, track: TrackId, select: bool) -> Result<()> {
        self.track_mut(track).ok_or(Error::UnknownTrack(track))?.select = select;
        Ok(())
    }

    fn delete_short_segments(&mut self, min_len: usize) -> usize {
        let removed = self
            .tracks
            .iter_mut()
            .map(|t| clean::delete_short_segments(t, min_len))
            .sum();

        let before = self.tracks.len();
        self.tracks.retain(|t| !t.is_empty());

        if removed > 0 {
            info!(
                "cleanup removed {} markers and {} empty tracks",
                removed,
                before - self.tracks.len()
            );
        }

        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip() -> Clip {
        let mut clip = Clip::new(100, 50);
        clip.push(Track::with_markers("a", 1, vec![Marker::new(0.1, 0.2); 4]));
        clip.push(Track::with_markers("b", 1, vec![Marker::new(0.3, 0.4); 2]));
        clip
    }

    #[test]
    fn test_store_reads() {
        let clip = clip();
        assert_eq!(clip.track_ids(), vec![TrackId(0), TrackId(1)]);
        assert_eq!(clip.track_name(TrackId(1)), Some("b"));
        assert_eq!(clip.marker(TrackId(0), 3), Some(Marker::new(0.1, 0.2)));
        assert_eq!(clip.marker(TrackId(0), 9), None);
        assert_eq!(clip.marker(TrackId(5), 1), None);
    }

    #[test]
    fn test_store_writes() {
        let mut clip = clip();
        clip.set_muted(TrackId(0), 2, true).unwrap();
        clip.set_selected(TrackId(1), true).unwrap();

        assert!(clip.tracks[0].markers[&2].mute);
        assert!(clip.tracks[1].select);
        assert!(matches!(
            clip.set_muted(TrackId(0), 42, true),
            Err(Error::UnknownMarker { frame: 42, .. })
        ));
        assert!(matches!(
            clip.set_selected(TrackId(7), true),
            Err(Error::UnknownTrack(TrackId(7)))
        ));
    }

    #[test]
    fn test_cleanup_drops_empty_tracks() {
        let mut clip = clip();
        assert_eq!(clip.delete_short_segments(3), 2);
        assert_eq!(clip.track_count(), 1);
        assert_eq!(clip.find("a"), Some(TrackId(0)));
        assert_eq!(clip.find("b"), None);
    }

    #[test]
    fn test_json() {
        let src = r#"{
            "size": [1920, 1080],
            "tracks": [
                { "name": "t1", "markers": { "1": { "co": [0.1, 0.1] }, "2": { "co": [0.2, 0.1], "mute": true } } }
            ]
        }"#;
        let clip = Clip::from_json(src).unwrap();
        assert_eq!(clip.size, (1920, 1080));
        assert_eq!(clip.tracks[0].len(), 2);
        assert!(clip.tracks[0].markers[&2].mute);

        let back = Clip::from_json(&clip.to_json().unwrap()).unwrap();
        assert_eq!(back, clip);
    }
}
