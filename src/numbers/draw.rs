//! Random number draws for the caller and for filling cards.
//!
//! Neither helper touches the catalog; they only produce values.

use log::debug;

use super::record::NumberValue;
use crate::core::DrawRng;
use crate::error::{DrawError, DrawResult};

/// Call a single number, uniform in `[1, max]`.
pub fn draw_number(rng: &mut DrawRng, max: u32) -> DrawResult<NumberValue> {
    if max == 0 {
        return Err(DrawError::EmptyRange { max });
    }
    let value = NumberValue::from_offset(rng.gen_inclusive(0, max - 1));
    debug!("called number {}", value);
    Ok(value)
}

/// Draw `count` distinct numbers for a card, from `[1, max)`.
///
/// `max` itself is never drawn, unlike `draw_number`. See DESIGN.md.
pub fn draw_card_numbers(
    rng: &mut DrawRng,
    count: usize,
    max: u32,
) -> DrawResult<Vec<NumberValue>> {
    let available = max.saturating_sub(1) as usize;
    if count > available {
        return Err(DrawError::NotEnoughNumbers { count, available });
    }
    Ok(rng
        .sample_indices(available, count)
        .into_iter()
        .map(|index| NumberValue::from_offset(index as u32))
        .collect())
}
