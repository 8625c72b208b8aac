//! One-shot scraper for a municipal real-estate lookup site: fetch the page
//! for one account number, reshape its two data tables, write one JSON
//! document to disk.

pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod process;
pub mod tables;
