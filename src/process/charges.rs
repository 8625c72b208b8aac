// src/process/charges.rs

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ScrapeError;
use crate::tables::RawTable;

/// One charge category with its per-period amounts, or the synthetic
/// per-column totals group. Serializes as a single-entry JSON map,
/// `{"Water": ["10", "20"]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeGroup {
    pub label: String,
    pub values: Vec<String>,
}

impl ChargeGroup {
    pub fn new(label: impl Into<String>, values: Vec<String>) -> Self {
        ChargeGroup {
            label: label.into(),
            values,
        }
    }
}

/// Parse the real-estate charges grid.
///
/// Each row is one charge category: first cell the label, middle cells the
/// per-period amounts, last cell that row's total. Per-row groups keep the
/// table's reading order. The trailing totals column carries a single
/// aggregate rather than a time series, so it becomes one synthetic group
/// appended after all rows.
pub fn parse_charge_groups(table: &RawTable) -> Result<Vec<ChargeGroup>, ScrapeError> {
    if table.rows.is_empty() {
        return Err(ScrapeError::malformed("charges table has no rows"));
    }

    let mut groups = Vec::with_capacity(table.rows.len() + 1);
    for row in &table.rows {
        let label = row.first().cloned().unwrap_or_default();
        // middle cells only; a short row still yields its (empty) group
        let values = row
            .get(1..row.len().saturating_sub(1))
            .map(<[String]>::to_vec)
            .unwrap_or_default();
        groups.push(ChargeGroup { label, values });
    }
    groups.push(totals_group(&table.rows)?);
    Ok(groups)
}

/// Totals extraction, kept separate from the row walk: the key is whatever
/// the header row's last cell says, a convention tied to this site's table
/// layout. When the layout drifts, this is the function to touch.
fn totals_group(rows: &[Vec<String>]) -> Result<ChargeGroup, ScrapeError> {
    let label = rows
        .first()
        .and_then(|header| header.last())
        .ok_or_else(|| ScrapeError::malformed("charges table header has no cells"))?
        .clone();
    let values = rows[1..]
        .iter()
        .filter_map(|row| row.last().cloned())
        .collect();
    Ok(ChargeGroup { label, values })
}

impl Serialize for ChargeGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.label, &self.values)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for ChargeGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GroupVisitor;

        impl<'de> Visitor<'de> for GroupVisitor {
            type Value = ChargeGroup;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map with exactly one label entry")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let (label, values) = access
                    .next_entry::<String, Vec<String>>()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                if access.next_key::<String>()?.is_some() {
                    return Err(de::Error::custom("charge group must hold a single label"));
                }
                Ok(ChargeGroup { label, values })
            }
        }

        deserializer.deserialize_map(GroupVisitor)
    }
}
