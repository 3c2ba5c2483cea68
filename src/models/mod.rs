mod achievement;
mod game;
mod system;

pub use achievement::Achievement;
pub use game::Game;
pub use system::GameSystem;
