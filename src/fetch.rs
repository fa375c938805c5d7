use anyhow::{Context, Result};
use log::info;
use reqwest::blocking::Client;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::record::PageRecord;
use crate::RECORDS_FILE;

pub mod search;

/// Production GraphQL endpoint.
pub const ENDPOINT: &str = "https://api-prod.omnivore.app/api/graphql";

const USER_AGENT: &str = concat!("omnivore-export/", env!("CARGO_PKG_VERSION"));

pub struct FetchOptions {
    pub api_key: String,
    pub query: String,
    pub endpoint: String,
}

/// Fetch every saved page matching the query and write the result to
/// `nodes-id-url.json` in the working directory.
pub fn run(opts: &FetchOptions) -> Result<()> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("couldn't build HTTP client")?;

    info!("fetching saved pages matching \"{}\"", opts.query);

    let records = fetch_all(&client, opts)?;
    write_records(Path::new(RECORDS_FILE), &records)?;

    info!("saved {} records to {}", records.len(), RECORDS_FILE);
    Ok(())
}

/// Paginate through the search API, accumulating records in arrival order.
///
/// The cursor for each request is the last edge of the previous page. The
/// loop ends on the first page with no edges, or when the API reports no
/// further pages. Any request or API error aborts the whole run.
pub fn fetch_all(client: &Client, opts: &FetchOptions) -> Result<Vec<PageRecord>> {
    let mut records: Vec<PageRecord> = Vec::new();
    let mut after: Option<String> = None;

    loop {
        let page = search::search_page(client, opts, after.as_deref())?;

        if page.records.is_empty() {
            break;
        }

        info!(
            "fetched {} records ({} total)",
            page.records.len(),
            records.len() + page.records.len()
        );

        records.extend(page.records);

        if !page.has_next_page {
            break;
        }

        after = page.next_cursor;
    }

    Ok(records)
}

/// Write the full result set as a single JSON array.
pub fn write_records(path: &Path, records: &[PageRecord]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("couldn't create {}", path.display()))?;
    let mut out = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut out, records)
        .with_context(|| format!("couldn't write {}", path.display()))?;
    out.write_all(b"\n")?;
    out.flush()?;

    Ok(())
}
