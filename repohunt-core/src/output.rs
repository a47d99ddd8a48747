// JSON array output of scraped results

use crate::error::ScrapeError;
use repohunt_scanner::ResultRecord;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `records` to `path` as a compact JSON array, replacing any existing file
pub fn write_output(records: &[ResultRecord], path: &Path) -> Result<(), ScrapeError> {
    let file = File::create(path).map_err(|e| ScrapeError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, records).map_err(ScrapeError::Output)?;
    writer.flush().map_err(|e| ScrapeError::io(path, e))?;

    Ok(())
}

/// Read back a file produced by [`write_output`]
pub fn read_output(path: &Path) -> Result<Vec<ResultRecord>, ScrapeError> {
    let content = fs::read_to_string(path).map_err(|e| ScrapeError::io(path, e))?;
    serde_json::from_str(&content).map_err(ScrapeError::Output)
}
