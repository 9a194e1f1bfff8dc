//! Bingo numbers: records, the catalog that owns them, and random draws.
//!
//! ## Key Types
//!
//! - `NumberValue`: The bare number (1, 2, ... 90)
//! - `NumberRecord`: A number with its traditional call and explanation
//! - `NumberCatalog`: Lookup from value to shared record
//! - `CatalogSource`: Where a catalog document comes from

pub mod catalog;
pub mod draw;
pub mod record;

pub use catalog::{CatalogSource, JsonDocument, JsonFile, NumberCatalog, YamlFile};
pub use draw::{draw_card_numbers, draw_number};
pub use record::{NumberRecord, NumberValue};
