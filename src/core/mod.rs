//! Shared building blocks: card configuration and the draw RNG.

pub mod config;
pub mod rng;

pub use config::{CardConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use rng::{DrawRng, DrawRngState};
