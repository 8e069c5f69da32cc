use crate::marker::Marker;
use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Track {
    pub name: String,

    // sparse, keyed by frame number
    #[serde(default)]
    pub markers: BTreeMap<i32, Marker>,

    #[serde(default)]
    pub select: bool,
}

impl Track {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            markers: BTreeMap::new(),
            select: false,
        }
    }

    /// Builds a track from consecutive markers starting at `first_frame`.
    pub fn with_markers<S, I>(name: S, first_frame: i32, markers: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Marker>,
    {
        let mut track = Self::new(name);
        for (frame, marker) in (first_frame..).zip(markers) {
            track.insert(frame, marker);
        }
        track
    }

    #[inline]
    pub fn insert(&mut self, frame: i32, marker: Marker) -> Option<Marker> {
        self.markers.insert(frame, marker)
    }

    #[inline]
    pub fn find_frame(&self, frame: i32) -> Option<&Marker> {
        self.markers.get(&frame)
    }

    #[inline]
    pub fn find_frame_mut(&mut self, frame: i32) -> Option<&mut Marker> {
        self.markers.get_mut(&frame)
    }

    #[inline]
    pub fn remove(&mut self, frame: i32) -> Option<Marker> {
        self.markers.remove(&frame)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Maximal runs of consecutive frames holding enabled markers, in frame order.
    pub fn segments(&self) -> Vec<RangeInclusive<i32>> {
        let mut segments = Vec::new();
        let mut current: Option<(i32, i32)> = None;

        for (&frame, marker) in &self.markers {
            if !marker.is_enabled() {
                if let Some((start, end)) = current.take() {
                    segments.push(start..=end);
                }
                continue;
            }

            current = match current {
                Some((start, end)) if end + 1 == frame => Some((start, frame)),
                Some((start, end)) => {
                    segments.push(start..=end);
                    Some((frame, frame))
                }
                None => Some((frame, frame)),
            };
        }

        if let Some((start, end)) = current {
            segments.push(start..=end);
        }

        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_frame() {
        let track = Track::with_markers("a", 5, vec![Marker::new(0.1, 0.1); 3]);
        assert!(track.find_frame(4).is_none());
        assert!(track.find_frame(5).is_some());
        assert!(track.find_frame(7).is_some());
        assert!(track.find_frame(8).is_none());
        assert_eq!(track.len(), 3);
    }

    #[test]
    fn test_segments_split_on_gaps_and_mutes() {
        let mut track = Track::with_markers("a", 1, vec![Marker::new(0.0, 0.0); 4]);
        track.insert(6, Marker::new(0.0, 0.0));
        track.insert(7, Marker::muted(0.0, 0.0));
        track.insert(8, Marker::new(0.0, 0.0));
        track.insert(9, Marker::new(0.0, 0.0));

        assert_eq!(track.segments(), vec![1..=4, 6..=6, 8..=9]);
    }

    #[test]
    fn test_segments_empty() {
        assert!(Track::new("empty").segments().is_empty());
    }
}
