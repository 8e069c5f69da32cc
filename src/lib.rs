pub mod aggregate;
pub mod clean;
pub mod clip;
pub mod error;
pub mod filter;
pub mod marker;
pub mod math;
pub mod operator;
pub mod scene;
pub mod store;
pub mod track;
pub mod trajectory;

mod kinematics;
mod window;

pub use clip::Clip;
pub use error::{Error, Result};
pub use filter::{ForegroundDecision, MuteDecision};
pub use marker::Marker;
pub use operator::{invoke, FilterForeground, FilterTrackEnds, Operator};
pub use scene::{Context, Scene};
pub use store::{MarkerStore, TrackId};
pub use track::Track;
pub use trajectory::Trajectory;
