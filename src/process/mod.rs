// src/process/mod.rs

pub mod charges;
pub mod customer;

pub use charges::{parse_charge_groups, ChargeGroup};
pub use customer::{parse_customer_record, CustomerRecord};

use crate::error::ScrapeError;
use crate::tables::RawTable;

/// Interpret the extracted tables for one account: table 0 is the
/// account/customer summary block, table 1 the real-estate charges grid.
///
/// The lookup site renders a nonexistent account as a page without the two
/// data tables, so "fewer than two tables" classifies as `AccountNotFound`;
/// shape failures inside a table mean the layout changed and surface as
/// `MalformedTable`.
pub fn interpret(
    account_no: &str,
    tables: &[RawTable],
) -> Result<(CustomerRecord, Vec<ChargeGroup>), ScrapeError> {
    if tables.len() < 2 {
        return Err(ScrapeError::AccountNotFound {
            account_no: account_no.to_string(),
            tables_found: tables.len(),
        });
    }
    let customer = customer::parse_customer_record(&tables[0])?;
    let charges = charges::parse_charge_groups(&tables[1])?;
    Ok((customer, charges))
}
