// src/config.rs

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::error::ScrapeError;

/// Config file layout: everything lives under one `data` section.
///
/// ```yaml
/// data:
///   url_basename: "https://lookup.example.gov/account?number="
///   account_no: "1234567890"
///   out_dir: "out"        # optional
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    pub data: DataSection,
}

#[derive(Debug, Deserialize)]
pub struct DataSection {
    pub url_basename: String,
    pub account_no: String,
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("out")
}

impl Config {
    /// Full lookup URL: `<url_basename><account_no>`, validated up front so
    /// a bad compose fails as a config error rather than mid-request.
    pub fn lookup_url(&self) -> Result<Url, ScrapeError> {
        let joined = format!("{}{}", self.data.url_basename, self.data.account_no);
        Url::parse(&joined)
            .map_err(|e| ScrapeError::Config(format!("bad lookup url `{joined}`: {e}")))
    }
}

/// Load the config file. A missing file, unparsable YAML, or missing
/// required key all surface as `ScrapeError::Config`.
pub fn load(path: &Path) -> Result<Config, ScrapeError> {
    let text = fs::read_to_string(path)
        .map_err(|e| ScrapeError::Config(format!("reading {}: {e}", path.display())))?;
    serde_yaml::from_str(&text)
        .map_err(|e| ScrapeError::Config(format!("parsing {}: {e}", path.display())))
}
