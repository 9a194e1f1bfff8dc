//! # bingo-card
//!
//! A single bingo card: a grid of optional numbers that are crossed out as
//! they are called, and checked against winning patterns.
//!
//! ## Flow
//!
//! 1. Load a `NumberCatalog` once from a `CatalogSource`.
//! 2. Place catalog records onto a `BingoCard` with `put_number`.
//! 3. For every call, `mark_number` with the called record.
//! 4. Ask `check` whether the card has won.
//!
//! Records are shared between the catalog and the cards via `Arc`, never
//! copied.
//!
//! ## Modules
//!
//! - `core`: Card configuration and the seedable draw RNG
//! - `numbers`: Number records, the catalog, and random draws
//! - `card`: The card grid and winning patterns
//! - `error`: Error types

pub mod card;
pub mod core;
pub mod error;
pub mod numbers;

// Re-export commonly used types
pub use crate::card::{BingoCard, WinPattern};
pub use crate::core::{CardConfig, DrawRng, DrawRngState};
pub use crate::error::{Axis, CardError, CatalogError, DrawError};
pub use crate::numbers::{
    draw_card_numbers, draw_number, CatalogSource, JsonDocument, JsonFile, NumberCatalog,
    NumberRecord, NumberValue, YamlFile,
};
