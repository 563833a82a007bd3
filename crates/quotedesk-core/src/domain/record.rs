use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use time::OffsetDateTime;

use crate::search::SearchIndex;
use crate::{Symbol, ValidationError};

/// One row of the reference dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct StockRecord {
    pub symbol: Symbol,
    pub name: String,
    pub price: f64,
}

impl StockRecord {
    pub fn new(
        symbol: Symbol,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !price.is_finite() {
            return Err(ValidationError::NonFinitePrice { value: price });
        }
        if price <= 0.0 {
            return Err(ValidationError::NonPositivePrice { value: price });
        }
        Ok(Self {
            symbol,
            name,
            price,
        })
    }

    /// Display label, always derived from symbol and name.
    pub fn label(&self) -> String {
        format!("{} - {}", self.symbol, self.name)
    }
}

impl Serialize for StockRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StockRecord", 4)?;
        state.serialize_field("symbol", &self.symbol)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("price", &self.price)?;
        state.serialize_field("label", &self.label())?;
        state.end()
    }
}

/// Where the current dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    Remote,
    Fallback,
}

/// Immutable dataset snapshot published by the service.
///
/// Replaced wholesale on every load; readers holding an `Arc` to a previous
/// snapshot keep a complete, consistent view.
#[derive(Debug)]
pub struct Dataset {
    records: Vec<StockRecord>,
    index: SearchIndex,
    origin: DataOrigin,
    loaded_at: OffsetDateTime,
}

impl Dataset {
    pub fn new(records: Vec<StockRecord>, origin: DataOrigin) -> Self {
        let index = SearchIndex::build(&records);
        Self {
            records,
            index,
            origin,
            loaded_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn records(&self) -> &[StockRecord] {
        &self.records
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn origin(&self) -> DataOrigin {
        self.origin
    }

    pub fn loaded_at(&self) -> OffsetDateTime {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose symbol matches the uppercase-trimmed input.
    ///
    /// The feed does not guarantee symbol uniqueness; first-match is the
    /// documented behavior, not a deduplication.
    pub fn find_by_symbol(&self, symbol: &str) -> Option<&StockRecord> {
        let wanted = symbol.trim().to_uppercase();
        if wanted.is_empty() {
            return None;
        }
        self.records
            .iter()
            .find(|record| record.symbol.as_str() == wanted)
    }
}
