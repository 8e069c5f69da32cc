use crate::store::{MarkerStore, TrackId};
use crate::trajectory::Trajectory;
use serde_derive::{Deserialize, Serialize};
use std::ops::Range;

/// Scene frame range, `frame_end` exclusive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    pub frame_start: i32,
    pub frame_end: i32,
}

impl Scene {
    #[inline]
    pub fn new(frame_start: i32, frame_end: i32) -> Self {
        Self {
            frame_start,
            frame_end,
        }
    }

    #[inline]
    pub fn frames(&self) -> Range<i32> {
        self.frame_start..self.frame_end
    }
}

/// Everything an analysis pass reads: the scene range and the host store.
pub struct Context<'a, S: MarkerStore + ?Sized> {
    pub scene: Scene,
    pub store: &'a S,
}

impl<'a, S: MarkerStore + ?Sized> Clone for Context<'a, S> {
    fn clone(&self) -> Self {
        Self {
            scene: self.scene,
            store: self.store,
        }
    }
}

impl<'a, S: MarkerStore + ?Sized> Copy for Context<'a, S> {}

impl<'a, S: MarkerStore + ?Sized> Context<'a, S> {
    pub fn new(scene: Scene, store: &'a S) -> Self {
        Self { scene, store }
    }

    #[inline]
    pub fn trajectory(&self, track: TrackId) -> Trajectory<'a, S> {
        Trajectory::new(self.store, track)
    }

    /// All tracks of the store as trajectories, in stable store order.
    pub fn trajectories(&self) -> impl Iterator<Item = Trajectory<'a, S>> + 'a {
        let store = self.store;
        store
            .track_ids()
            .into_iter()
            .map(move |id| Trajectory::new(store, id))
    }
}
