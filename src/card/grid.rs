//! The bingo card grid.
//!
//! Cells are stored row by row in two parallel vectors, so a 2×3 card
//!
//! ```text
//! +---+---+---+
//! | A | B | C |
//! +---+---+---+
//! | D | E | F |
//! +---+---+---+
//! ```
//!
//! lives at indices `0..=2` for the first row and `3..=5` for the second.

use std::sync::Arc;

use log::debug;

use super::pattern::WinPattern;
use crate::core::CardConfig;
use crate::error::{Axis, CardError, CardResult};
use crate::numbers::NumberRecord;

/// A single player's bingo card.
///
/// Fields may stay blank. Called numbers are crossed out with
/// `mark_number`, and `check` tells whether the card has a winning pattern.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use bingo_card::card::BingoCard;
/// use bingo_card::numbers::{NumberRecord, NumberValue};
///
/// let three = NumberValue::new(3).unwrap();
/// let tea = Arc::new(NumberRecord::new(three, "Cup of tea", "Rhymes with Three"));
///
/// let mut card = BingoCard::default();
/// card.put_number(1, 2, Arc::clone(&tea)).unwrap();
/// card.mark_number(&tea);
///
/// assert!(card.is_marked(1, 2).unwrap());
/// assert!(!card.check());
/// ```
#[derive(Clone, Debug)]
pub struct BingoCard {
    height: usize,
    width: usize,
    cells: Vec<Option<Arc<NumberRecord>>>,
    marked: Vec<bool>,
}

impl Default for BingoCard {
    fn default() -> Self {
        Self::from_config(&CardConfig::default())
    }
}

impl BingoCard {
    /// Create a blank card with the given dimensions.
    ///
    /// Panics if either dimension is zero, or if the card has more fields
    /// than fit in a `usize`.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0, "Card must have at least 1 row");
        assert!(width > 0, "Card must have at least 1 column");

        let Some(cell_count) = height.checked_mul(width) else {
            panic!("Card of {height} rows by {width} columns has too many fields");
        };
        Self {
            height,
            width,
            cells: vec![None; cell_count],
            marked: vec![false; cell_count],
        }
    }

    /// Create a blank card from a configuration.
    #[must_use]
    pub fn from_config(config: &CardConfig) -> Self {
        Self::new(config.height, config.width)
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    fn index(&self, row: usize, col: usize) -> CardResult<usize> {
        if row >= self.height {
            return Err(CardError::OutOfRange {
                axis: Axis::Row,
                index: row,
                limit: self.height,
            });
        }
        if col >= self.width {
            return Err(CardError::OutOfRange {
                axis: Axis::Column,
                index: col,
                limit: self.width,
            });
        }
        Ok(row * self.width + col)
    }

    /// The record in a field, or `None` if it is blank.
    pub fn get_number(&self, row: usize, col: usize) -> CardResult<Option<&Arc<NumberRecord>>> {
        let index = self.index(row, col)?;
        Ok(self.cells[index].as_ref())
    }

    /// Write a record into a field, replacing whatever was there.
    ///
    /// The field's mark is left as it was.
    pub fn put_number(
        &mut self,
        row: usize,
        col: usize,
        record: Arc<NumberRecord>,
    ) -> CardResult<()> {
        let index = self.index(row, col)?;
        self.cells[index] = Some(record);
        Ok(())
    }

    /// Check if a field holds no number.
    pub fn is_blank(&self, row: usize, col: usize) -> CardResult<bool> {
        let index = self.index(row, col)?;
        Ok(self.cells[index].is_none())
    }

    /// Check if a field has been crossed out.
    pub fn is_marked(&self, row: usize, col: usize) -> CardResult<bool> {
        let index = self.index(row, col)?;
        Ok(self.marked[index])
    }

    /// Cross out every field holding the called number.
    pub fn mark_number(&mut self, called: &NumberRecord) {
        let mut hits = 0;
        for (cell, marked) in self.cells.iter().zip(self.marked.iter_mut()) {
            if cell.as_ref().is_some_and(|r| r.value == called.value) {
                *marked = true;
                hits += 1;
            }
        }
        debug!("called {} ({}): {} field(s) on card", called.value, called.description, hits);
    }

    /// Number of fields holding a record.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of crossed-out fields.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.marked.iter().filter(|&&m| m).count()
    }

    /// Marks of one row, left to right. Callers guarantee `row < height`.
    pub(crate) fn row_marks(&self, row: usize) -> &[bool] {
        let start = row * self.width;
        &self.marked[start..start + self.width]
    }

    /// Check if the card has any winning pattern.
    #[must_use]
    pub fn check(&self) -> bool {
        self.winning_pattern().is_some()
    }

    /// The first pattern in `WinPattern::CHECK_ORDER` the card satisfies.
    #[must_use]
    pub fn winning_pattern(&self) -> Option<WinPattern> {
        let found = WinPattern::CHECK_ORDER
            .iter()
            .copied()
            .find(|pattern| pattern.matches(self));
        if let Some(pattern) = found {
            debug!("card wins with {:?}", pattern);
        }
        found
    }
}
