use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use estatescraper::{config, error::ScrapeError, fetch, output, process, tables};
use reqwest::Client;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Wall-clock bound on the single page fetch. No retry on expiry.
const FETCH_DEADLINE: Duration = Duration::from_secs(10);

const DEFAULT_CONFIG: &str = "lookup.yaml";

#[tokio::main]
async fn main() {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    if let Err(err) = run().await {
        error!("{err:#}");
        let code = err
            .downcast_ref::<ScrapeError>()
            .map(ScrapeError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

async fn run() -> Result<()> {
    // ─── 2) load config ──────────────────────────────────────────────
    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let cfg = config::load(&config_path)?;
    let account_no = cfg.data.account_no.clone();
    let url = cfg.lookup_url()?;
    info!(config = %config_path.display(), account = %account_no, "startup");

    // ─── 3) fetch the lookup page ────────────────────────────────────
    let client = Client::new();
    let page = fetch::fetch_page(&client, &url, FETCH_DEADLINE).await?;

    // ─── 4) extract + interpret the two tables ───────────────────────
    let raw_tables = tables::extract_tables(&page.body);
    info!(tables = raw_tables.len(), status = %page.status, "page parsed");
    let (customer, charges) = process::interpret(&account_no, &raw_tables)
        .with_context(|| format!("interpreting page for account {account_no}"))?;
    info!(
        customer_fields = customer.len(),
        charge_groups = charges.len(),
        "tables interpreted"
    );

    // ─── 5) write the account document ───────────────────────────────
    let doc = output::AccountDocument { customer, charges };
    let path = output::write_document(&cfg.data.out_dir, &account_no, &doc)
        .with_context(|| format!("writing document for account {account_no}"))?;
    info!(path = %path.display(), "done");
    Ok(())
}
