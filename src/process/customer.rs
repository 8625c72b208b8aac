// src/process/customer.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ScrapeError;
use crate::tables::RawTable;

/// Field separator inside the summary blob: two consecutive spaces.
const FIELD_SEP: &str = "  ";

/// Ordered field-name → field-value mapping for one account holder.
///
/// Backed by `serde_json::Map`, which with the `preserve_order` feature
/// keeps insertion order through serialization. A repeated label replaces
/// the earlier value but the entry keeps its first-insertion position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerRecord {
    fields: Map<String, Value>,
}

impl CustomerRecord {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields.get(label).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// Parse the account/customer summary table.
///
/// Cell [0][0] holds one long blob of `label: value` pairs separated by
/// two-space runs. Segments without a colon are formatting artifacts and
/// are dropped silently; each survivor splits on its FIRST colon only, so
/// the value keeps any further colons and its leading whitespace. An empty
/// blob is an empty record, not an error.
pub fn parse_customer_record(table: &RawTable) -> Result<CustomerRecord, ScrapeError> {
    let blob = table
        .rows
        .first()
        .and_then(|row| row.first())
        .ok_or_else(|| ScrapeError::malformed("customer table has no cells"))?;

    let mut fields = Map::new();
    for segment in blob.split(FIELD_SEP) {
        let Some((label, value)) = segment.split_once(':') else {
            continue;
        };
        fields.insert(label.to_string(), Value::String(value.to_string()));
    }
    Ok(CustomerRecord { fields })
}
