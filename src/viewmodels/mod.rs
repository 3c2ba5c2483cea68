//! Presentation state derived from the game library.

mod games;
mod navigation;
mod search;
mod systems;

pub use games::{concat_details, GameItemViewModel, GamesViewModel};
pub use navigation::NavigationViewModel;
pub use search::SearchViewModel;
pub use systems::{SystemItem, SystemsViewModel};
