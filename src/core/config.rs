//! Card configuration.
//!
//! Bingo halls disagree on card sizes. British 90-ball cards are 3 rows by
//! 9 columns, which is the default here.

use serde::{Deserialize, Serialize};

/// Default number of rows on a card.
pub const DEFAULT_HEIGHT: usize = 3;

/// Default number of columns on a card.
pub const DEFAULT_WIDTH: usize = 9;

/// Dimensions of a bingo card.
///
/// ```
/// use bingo_card::core::CardConfig;
///
/// let config = CardConfig::new().with_height(3).with_width(5);
/// assert_eq!(config.cell_count(), 15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Number of rows.
    pub height: usize,

    /// Number of columns.
    pub width: usize,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

impl CardConfig {
    /// Create a 3×9 configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rows.
    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set the number of columns.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }
}
