//! Error types for cards, catalogs, and number draws.

use std::path::PathBuf;

use thiserror::Error;

/// Which coordinate of a card access was out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    fn plural(self) -> &'static str {
        match self {
            Axis::Row => "rows",
            Axis::Column => "columns",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors raised by `BingoCard` accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error(
        "{axis} index ({index}) is too large: this card has {limit} {}, so the {axis} must be between 0 and {}",
        .axis.plural(),
        .limit.saturating_sub(1)
    )]
    OutOfRange {
        axis: Axis,
        index: usize,
        limit: usize,
    },
}

pub type CardResult<T> = std::result::Result<T, CardError>;

/// Errors raised while loading a `NumberCatalog`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog entry ({reason}): {entry}")]
    MalformedEntry {
        reason: String,
        entry: serde_json::Value,
    },
    #[error("catalog document has no `numbers` list")]
    MissingNumbers,
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to parse YAML catalog: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Errors raised by the number-draw helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("cannot draw from an empty range (max {max})")]
    EmptyRange { max: u32 },
    #[error("cannot draw {count} distinct numbers, only {available} available")]
    NotEnoughNumbers { count: usize, available: usize },
}

pub type DrawResult<T> = std::result::Result<T, DrawError>;
