//! The number catalog: every known bingo number and its call.
//!
//! A catalog document looks like:
//!
//! ```json
//! { "numbers": [ { "number": 3, "desc": "Cup of tea", "explanation": "Rhymes with Three" } ] }
//! ```
//!
//! Where the document lives is the caller's business. `CatalogSource`
//! abstracts over it; `JsonDocument`, `JsonFile` and `YamlFile` cover the
//! common cases. YAML catalogs have the same shape:
//!
//! ```yaml
//! numbers:
//!   - number: 3
//!     desc: Cup of tea
//!     explanation: Rhymes with Three
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, warn};
use rustc_hash::FxHashMap;
use serde_json::Value;

use super::record::{NumberRecord, NumberValue};
use crate::error::{CatalogError, CatalogResult};

/// Something that can produce a catalog document.
///
/// `read` is called exactly once per `NumberCatalog::load`.
pub trait CatalogSource {
    /// Read and parse the whole document.
    fn read(&self) -> CatalogResult<Value>;
}

/// An already-parsed document held in memory.
#[derive(Clone, Debug)]
pub struct JsonDocument(pub Value);

impl CatalogSource for JsonDocument {
    fn read(&self) -> CatalogResult<Value> {
        Ok(self.0.clone())
    }
}

/// A JSON document on disk.
#[derive(Clone, Debug)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Point at a catalog file. Nothing is read until the catalog loads.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFile {
    fn read(&self) -> CatalogResult<Value> {
        let text = read_text(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// A YAML document on disk.
#[derive(Clone, Debug)]
pub struct YamlFile {
    path: PathBuf,
}

impl YamlFile {
    /// Point at a catalog file. Nothing is read until the catalog loads.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for YamlFile {
    fn read(&self) -> CatalogResult<Value> {
        let text = read_text(&self.path)?;
        Ok(serde_yaml::from_str(&text)?)
    }
}

fn read_text(path: &Path) -> CatalogResult<String> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl<S: CatalogSource + ?Sized> CatalogSource for &S {
    fn read(&self) -> CatalogResult<Value> {
        (**self).read()
    }
}

/// Read-only lookup from number to record.
///
/// ## Example
///
/// ```
/// use bingo_card::numbers::{JsonDocument, NumberCatalog, NumberValue};
/// use serde_json::json;
///
/// let source = JsonDocument(json!({
///     "numbers": [{"number": 3, "desc": "Cup of tea", "explanation": "Rhymes with Three"}]
/// }));
/// let catalog = NumberCatalog::load(&source).unwrap();
///
/// assert_eq!(catalog.description(NumberValue::new(3).unwrap()), Some("Cup of tea"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct NumberCatalog {
    records: FxHashMap<NumberValue, Arc<NumberRecord>>,
}

impl NumberCatalog {
    /// Load a catalog from `source`.
    ///
    /// The first malformed entry aborts the whole load. A number that
    /// appears twice keeps its last entry.
    pub fn load<S: CatalogSource>(source: S) -> CatalogResult<Self> {
        let document = source.read()?;
        let entries = document
            .get("numbers")
            .and_then(Value::as_array)
            .ok_or(CatalogError::MissingNumbers)?;

        let mut records = FxHashMap::default();
        for entry in entries {
            let record = NumberRecord::from_entry(entry)?;
            let value = record.value;
            if records.insert(value, Arc::new(record)).is_some() {
                warn!("catalog lists number {} more than once, keeping the last entry", value);
            }
        }

        debug!("loaded {} catalog numbers", records.len());
        Ok(Self { records })
    }

    /// Look up a record by number.
    #[must_use]
    pub fn get(&self, value: NumberValue) -> Option<&Arc<NumberRecord>> {
        self.records.get(&value)
    }

    /// Short call for a number, if the catalog knows it.
    #[must_use]
    pub fn description(&self, value: NumberValue) -> Option<&str> {
        self.get(value).map(|r| r.description.as_str())
    }

    /// Check if a number is in the catalog.
    #[must_use]
    pub fn contains(&self, value: NumberValue) -> bool {
        self.records.contains_key(&value)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (NumberValue, &Arc<NumberRecord>)> {
        self.records.iter().map(|(value, record)| (*value, record))
    }

    /// All known numbers, ascending.
    #[must_use]
    pub fn values(&self) -> Vec<NumberValue> {
        let mut values: Vec<_> = self.records.keys().copied().collect();
        values.sort_unstable();
        values
    }
}
