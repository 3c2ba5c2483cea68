//! Emulair: a TV and gamepad front-end for browsing an emulator game
//! library. The platform-independent model lives here; the SDL renderer is
//! behind the `sdl` feature.

pub mod app;
pub mod carousel;
pub mod config;
pub mod data_state;
pub mod error;
pub mod format;
pub mod immersive;
pub mod input;
pub mod models;
pub mod navigation;
pub mod screens;
pub mod services;
pub mod style;
pub mod text;
#[cfg(feature = "sdl")]
pub mod ui;
pub mod viewmodels;

pub use app::App;
pub use error::{FrontendError, Result};

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. `RUST_LOG` overrides the default `info`
/// level. Safe to call more than once.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
