use crate::store::TrackId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no enabled marker for track {track} at frame {frame}")]
    MissingMarker { track: TrackId, frame: i32 },

    #[error("no comparison tracks with a full evaluation window at frame {frame}")]
    EmptyConsensus { frame: i32 },

    #[error("evaluation window is empty")]
    EmptyWindow,

    #[error("evaluation window of {window_len} frames before frame {frame} is out of range")]
    WindowOutOfRange { frame: i32, window_len: u32 },

    #[error("no active clip")]
    NoActiveClip,

    #[error("clip has no tracks")]
    NoTracks,

    #[error("unknown track {0}")]
    UnknownTrack(TrackId),

    #[error("track {track} has no marker at frame {frame}")]
    UnknownMarker { track: TrackId, frame: i32 },

    #[error("parameter `{name}` = {value} is out of range [{min}, {max}]")]
    InvalidParameter {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
