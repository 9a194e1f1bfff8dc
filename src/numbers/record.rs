//! Number records - the static data behind each bingo number.
//!
//! Every bingo number has a traditional call ("Cup of tea" for 3) and a
//! short explanation of where the call comes from. Records are built once
//! when the catalog loads and are shared by reference afterwards.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CatalogError, CatalogResult};

/// A bingo number. Always at least 1.
///
/// ```
/// use bingo_card::numbers::NumberValue;
///
/// assert_eq!(NumberValue::new(3).map(NumberValue::raw), Some(3));
/// assert_eq!(NumberValue::new(0), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NumberValue(NonZeroU32);

impl NumberValue {
    /// The lowest bingo number.
    pub const MIN: Self = Self(NonZeroU32::MIN);

    /// Create a number value, or `None` for 0.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// The number `offset` places above 1, saturating at `u32::MAX`.
    #[must_use]
    pub const fn from_offset(offset: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(offset))
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0.get()
    }
}

impl From<NonZeroU32> for NumberValue {
    fn from(value: NonZeroU32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for NumberValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable catalog record for one number.
///
/// ## Example
///
/// ```
/// use bingo_card::numbers::{NumberRecord, NumberValue};
///
/// let three = NumberValue::new(3).unwrap();
/// let tea = NumberRecord::new(three, "Cup of tea", "Rhymes with Three");
/// assert_eq!(tea.value.raw(), 3);
/// assert_eq!(tea.description, "Cup of tea");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRecord {
    /// The number itself.
    pub value: NumberValue,

    /// Short traditional call.
    pub description: String,

    /// Where the call comes from.
    pub explanation: String,
}

impl NumberRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(
        value: NumberValue,
        description: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            value,
            description: description.into(),
            explanation: explanation.into(),
        }
    }

    /// Build a record from one raw catalog entry.
    ///
    /// The entry must be an object carrying `number` (integer ≥ 1), `desc`
    /// and `explanation` (text). Anything else is a `MalformedEntry` that
    /// carries the whole raw entry.
    pub fn from_entry(entry: &Value) -> CatalogResult<Self> {
        let malformed = |reason: String| CatalogError::MalformedEntry {
            reason,
            entry: entry.clone(),
        };

        let fields = entry
            .as_object()
            .ok_or_else(|| malformed("entry is not an object".into()))?;

        let number = fields
            .get("number")
            .ok_or_else(|| malformed("missing field `number`".into()))?;
        let value = number
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .and_then(NumberValue::new)
            .ok_or_else(|| {
                malformed(format!("`number` must be a positive integer, got {number}"))
            })?;

        let text = |name: &str| -> CatalogResult<String> {
            let field = fields
                .get(name)
                .ok_or_else(|| malformed(format!("missing field `{name}`")))?;
            field
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| malformed(format!("`{name}` must be text, got {field}")))
        };

        Ok(Self::new(value, text("desc")?, text("explanation")?))
    }
}
