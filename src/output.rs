// src/output.rs

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::ScrapeError;
use crate::process::{ChargeGroup, CustomerRecord};

/// The one JSON value a run writes: the customer summary plus the charge
/// groups, in their source order with the synthetic totals group last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDocument {
    pub customer: CustomerRecord,
    pub charges: Vec<ChargeGroup>,
}

/// Write `doc` pretty-printed to `<out_dir>/<uuid4>_<account_no>.json`,
/// creating the directory if needed. The random id keeps concurrent runs
/// against a shared output directory from colliding.
pub fn write_document(
    out_dir: &Path,
    account_no: &str,
    doc: &AccountDocument,
) -> Result<PathBuf, ScrapeError> {
    fs::create_dir_all(out_dir)?;
    let filename = format!("{}_{}.json", Uuid::new_v4(), account_no);
    let path = out_dir.join(filename);
    let json = serde_json::to_string_pretty(doc)?;
    fs::write(&path, json)?;
    debug!(path = %path.display(), "account document written");
    Ok(path)
}
