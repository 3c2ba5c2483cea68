//! The immersive list: a horizontally or vertically scrolling rail whose
//! selected item stays anchored while the rest slides past.

mod config;
mod list;
mod physics;
mod state;
mod velocity;

pub use config::ImmersiveListConfig;
pub use list::{DragPhase, ImmersiveList, ImmersiveListParams, Orientation, Placement, Release};
pub use physics::{FlingDecay, Spring};
pub use state::ImmersiveListState;
pub use velocity::VelocityTracker;
