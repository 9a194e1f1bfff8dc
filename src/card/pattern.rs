//! Winning patterns.
//!
//! Different halls play by different rules. The common British patterns
//! are listed at <https://en.wikipedia.org/wiki/Bingo_(British_version)#Gameplay>.
//! Only the line pattern is evaluated so far; the others never match yet.

use serde::{Deserialize, Serialize};

use super::grid::BingoCard;

/// Run of consecutive marks that makes a line.
pub const LINE_LENGTH: usize = 5;

/// A winning arrangement of marked fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinPattern {
    /// Five consecutive marks within one row.
    Line,
    /// All four corners marked.
    FourCorners,
    /// Every number on the card marked.
    FullHouse,
    /// Two lines on the same card.
    TwoLines,
}

impl WinPattern {
    /// Order in which `BingoCard::check` tries the patterns.
    pub const CHECK_ORDER: [WinPattern; 4] = [
        WinPattern::Line,
        WinPattern::FourCorners,
        WinPattern::FullHouse,
        WinPattern::TwoLines,
    ];

    /// Check whether `card` satisfies this pattern.
    #[must_use]
    pub fn matches(self, card: &BingoCard) -> bool {
        match self {
            WinPattern::Line => has_line(card),
            WinPattern::FourCorners => has_four_corners(card),
            WinPattern::FullHouse => has_full_house(card),
            WinPattern::TwoLines => has_two_lines(card),
        }
    }
}

/// Any row with `LINE_LENGTH` consecutive marks, not necessarily the whole row.
fn has_line(card: &BingoCard) -> bool {
    if card.width() < LINE_LENGTH {
        return false;
    }

    (0..card.height()).any(|row| {
        let mut run = 0;
        card.row_marks(row).iter().any(|&marked| {
            run = if marked { run + 1 } else { 0 };
            run >= LINE_LENGTH
        })
    })
}

// Not evaluated yet.
fn has_four_corners(_card: &BingoCard) -> bool {
    false
}

// Not evaluated yet.
fn has_full_house(_card: &BingoCard) -> bool {
    false
}

// Not evaluated yet.
fn has_two_lines(_card: &BingoCard) -> bool {
    false
}
