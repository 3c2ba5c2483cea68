mod controller;
mod destination;

pub use controller::{BackStackEntry, NavController};
pub use destination::{Destination, TopNavDestination};
