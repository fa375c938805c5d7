pub mod convert;
pub mod fetch;
pub mod record;

pub use record::PageRecord;

/// Intermediate file produced by `fetch` and consumed by `convert`.
pub const RECORDS_FILE: &str = "nodes-id-url.json";

/// Final CSV file produced by `convert`.
pub const CSV_FILE: &str = "nodes-id-url.csv";
