use crate::marker::Marker;
use crate::store::{MarkerStore, TrackId};
use nalgebra as na;

/// Read-only view of one track's markers in pixel space.
pub struct Trajectory<'a, S: MarkerStore + ?Sized> {
    store: &'a S,
    track: TrackId,
}

impl<'a, S: MarkerStore + ?Sized> Clone for Trajectory<'a, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            track: self.track,
        }
    }
}

impl<'a, S: MarkerStore + ?Sized> Copy for Trajectory<'a, S> {}

impl<'a, S: MarkerStore + ?Sized> Trajectory<'a, S> {
    #[inline]
    pub fn new(store: &'a S, track: TrackId) -> Self {
        Self { store, track }
    }

    #[inline(always)]
    pub fn id(&self) -> TrackId {
        self.track
    }

    #[inline]
    pub fn name(&self) -> &'a str {
        self.store.track_name(self.track).unwrap_or("<unknown>")
    }

    #[inline]
    pub fn clip_size(&self) -> (u32, u32) {
        self.store.clip_size()
    }

    #[inline]
    pub fn marker(&self, frame: i32) -> Option<Marker> {
        self.store.marker(self.track, frame)
    }

    /// Marker position in pixels, `None` when the track has no marker at `frame`.
    #[inline]
    pub fn position(&self, frame: i32) -> Option<na::Point2<f64>> {
        self.marker(frame).map(|m| m.pixels(self.store.clip_size()))
    }

    /// False when there is no marker at `frame`.
    #[inline]
    pub fn is_muted(&self, frame: i32) -> bool {
        self.marker(frame).map_or(false, |m| m.mute)
    }

    /// A marker exists at `frame` and is not muted.
    #[inline]
    pub fn is_enabled(&self, frame: i32) -> bool {
        self.marker(frame).map_or(false, |m| m.is_enabled())
    }

    #[inline]
    pub fn exists(&self, frame: i32) -> bool {
        self.marker(frame).is_some()
    }
}
