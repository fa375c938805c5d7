use anyhow::{Context, Result};
use log::info;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::record::PageRecord;
use crate::{CSV_FILE, RECORDS_FILE};

/// Cells longer than this are cut down to exactly this many characters.
pub const MAX_CELL_CHARS: usize = 30_000;

/// Convert `nodes-id-url.json` in the working directory to
/// `nodes-id-url.csv` beside it.
pub fn run() -> Result<()> {
    convert_file(Path::new(RECORDS_FILE), Path::new(CSV_FILE))
}

pub fn convert_file(input: &Path, output: &Path) -> Result<()> {
    let records = read_records(input)?;
    write_csv(output, &records)?;

    info!("wrote {} rows to {}", records.len(), output.display());
    Ok(())
}

/// Read back the result set written by the fetch step.
pub fn read_records(path: &Path) -> Result<Vec<PageRecord>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("couldn't read {}", path.display()))?;
    let records = serde_json::from_str(&data)
        .with_context(|| format!("{} is not a valid record list", path.display()))?;

    Ok(records)
}

/// Write one row per record, column order `id,url`, header first.
pub fn write_csv(path: &Path, records: &[PageRecord]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("couldn't create {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "id,url")?;
    for record in records {
        writeln!(
            out,
            "{},{}",
            csv_field(truncate_cell(&record.id)),
            csv_field(truncate_cell(&record.url)),
        )?;
    }
    out.flush()
        .with_context(|| format!("couldn't write {}", path.display()))?;

    Ok(())
}

/// Cap cell content at `MAX_CELL_CHARS` characters, never splitting a
/// multi-byte character.
fn truncate_cell(value: &str) -> &str {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// Quote a field if it contains a delimiter, quote or line break, doubling
/// any inner quotes.
fn csv_field(value: &str) -> String {
    let needs_quoting = value
        .chars()
        .any(|c| matches!(c, ',' | '"' | '\n' | '\r'));

    if needs_quoting {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
