//! Card grid property tests.
//!
//! Random dimensions and coordinates exercise the bounds checks and the
//! put/get/mark contract of `BingoCard`.

use std::sync::Arc;

use bingo_card::card::BingoCard;
use bingo_card::numbers::{NumberRecord, NumberValue};
use bingo_card::{Axis, CardError};
use proptest::prelude::*;
use serde_json::json;

fn record(value: u32) -> Arc<NumberRecord> {
    Arc::new(NumberRecord::new(NumberValue::new(value).unwrap(), format!("call {value}"), ""))
}

proptest! {
    /// Every field of a fresh card is blank and unmarked.
    #[test]
    fn fresh_card_blank(height in 1usize..8, width in 1usize..12) {
        let card = BingoCard::new(height, width);
        for row in 0..height {
            for col in 0..width {
                prop_assert!(card.is_blank(row, col).unwrap());
                prop_assert!(!card.is_marked(row, col).unwrap());
            }
        }
        prop_assert!(!card.check());
    }

    /// Whatever is put into a field comes back out of it.
    #[test]
    fn put_then_get(
        height in 1usize..8,
        width in 1usize..12,
        value in 1u32..=90,
        seed in any::<u64>(),
    ) {
        let row = (seed as usize) % height;
        let col = (seed as usize / 7) % width;

        let mut card = BingoCard::new(height, width);
        let rec = record(value);
        card.put_number(row, col, Arc::clone(&rec)).unwrap();

        prop_assert!(Arc::ptr_eq(card.get_number(row, col).unwrap().unwrap(), &rec));
        prop_assert!(!card.is_blank(row, col).unwrap());
        prop_assert_eq!(card.filled_count(), 1);
    }

    /// Row or column at the boundary is rejected by every accessor.
    #[test]
    fn boundary_rejected(height in 1usize..8, width in 1usize..12, extra in 0usize..5) {
        let mut card = BingoCard::new(height, width);

        let row_err = CardError::OutOfRange {
            axis: Axis::Row,
            index: height + extra,
            limit: height,
        };
        prop_assert_eq!(card.get_number(height + extra, 0).unwrap_err(), row_err.clone());
        prop_assert_eq!(card.is_blank(height + extra, 0).unwrap_err(), row_err.clone());
        prop_assert_eq!(card.is_marked(height + extra, 0).unwrap_err(), row_err.clone());
        prop_assert_eq!(card.put_number(height + extra, 0, record(1)).unwrap_err(), row_err);

        let col_err = CardError::OutOfRange {
            axis: Axis::Column,
            index: width + extra,
            limit: width,
        };
        prop_assert_eq!(card.get_number(0, width + extra).unwrap_err(), col_err.clone());
        prop_assert_eq!(card.put_number(0, width + extra, record(1)).unwrap_err(), col_err);
    }

    /// Marks only ever land on filled fields.
    #[test]
    fn marks_only_filled_fields(
        values in proptest::collection::vec(proptest::option::of(1u32..20), 15),
        calls in proptest::collection::vec(1u32..20, 0..30),
    ) {
        let mut card = BingoCard::new(3, 5);
        for (i, value) in values.iter().enumerate() {
            if let Some(v) = value {
                card.put_number(i / 5, i % 5, record(*v)).unwrap();
            }
        }
        for call in &calls {
            card.mark_number(&record(*call));
        }

        for row in 0..3 {
            for col in 0..5 {
                let expected = values[row * 5 + col].is_some_and(|v| calls.contains(&v));
                prop_assert_eq!(card.is_marked(row, col).unwrap(), expected);
                if card.is_marked(row, col).unwrap() {
                    prop_assert!(!card.is_blank(row, col).unwrap());
                }
            }
        }
    }
}

/// Marking a number twice changes nothing the second time.
#[test]
fn test_mark_idempotent() {
    let mut card = BingoCard::default();
    let called = record(27);
    card.put_number(1, 2, Arc::clone(&called)).unwrap();
    card.put_number(0, 0, record(28)).unwrap();

    card.mark_number(&called);
    assert!(card.is_marked(1, 2).unwrap());
    assert!(!card.is_marked(0, 0).unwrap());

    card.mark_number(&called);
    assert_eq!(card.marked_count(), 1);
}

/// The error message points at the offending coordinate and its range.
#[test]
fn test_out_of_range_message() {
    let card = BingoCard::new(3, 9);
    let message = card.get_number(0, 9).unwrap_err().to_string();
    assert!(message.contains("column index (9)"));
    assert!(message.contains("between 0 and 8"));
}

/// Zero is not a bingo number, however the record is built.
#[test]
fn test_zero_never_reaches_a_card() {
    assert!(NumberValue::new(0).is_none());

    let zero = json!({"value": 0, "description": "zero", "explanation": ""});
    assert!(serde_json::from_value::<NumberRecord>(zero).is_err());

    let one = json!({"value": 1, "description": "Kelly's eye", "explanation": ""});
    let record: NumberRecord = serde_json::from_value(one).unwrap();

    let mut card = BingoCard::new(1, 5);
    let shared = Arc::new(record);
    for col in 0..5 {
        card.put_number(0, col, Arc::clone(&shared)).unwrap();
    }
    card.mark_number(&shared);
    assert_eq!(card.get_number(0, 0).unwrap().unwrap().value, NumberValue::MIN);
    assert!(card.check());
}
