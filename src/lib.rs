//! Hunter's Meal: roam a scrolling meadow, eat smaller creatures, dodge
//! bigger ones, and grow past the win size.
//!
//! The library holds the whole simulation and never touches the terminal;
//! the binary drives it and draws the result.

pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod player;
pub mod spawn;
pub mod world;

pub use config::Config;
pub use error::{ConfigError, GameError};
