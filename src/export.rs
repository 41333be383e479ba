//! Writing the cleaned dataset to disk.

use crate::error::{Result, ScrapeError};
use crate::models::CleanRecord;
use serde::Serialize;
use std::path::Path;
use tracing::info;

pub const CSV_HEADER: [&str; 8] = [
    "index",
    "title",
    "rooms",
    "building_area",
    "land_area",
    "price",
    "City",
    "District",
];

/// One CSV row: the record preceded by its position in the run
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    index: usize,
    title: &'a str,
    rooms: Option<&'a str>,
    building_area: Option<&'a str>,
    land_area: Option<&'a str>,
    price: Option<&'a str>,
    city: Option<&'a str>,
    district: Option<&'a str>,
}

impl<'a> CsvRow<'a> {
    fn new(index: usize, record: &'a CleanRecord) -> Self {
        Self {
            index,
            title: &record.title,
            rooms: record.rooms.as_deref(),
            building_area: record.building_area.as_deref(),
            land_area: record.land_area.as_deref(),
            price: record.price.as_deref(),
            city: record.city.as_deref(),
            district: record.district.as_deref(),
        }
    }
}

/// Render records as UTF-8 CSV with a header row and a leading index column
pub fn to_csv(records: &[CleanRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;

    for (index, record) in records.iter().enumerate() {
        writer.serialize(CsvRow::new(index, record))?;
    }

    writer
        .into_inner()
        .map_err(|e| ScrapeError::Io(e.into_error()))
}

async fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    Ok(())
}

pub async fn write_csv(path: &Path, records: &[CleanRecord]) -> Result<()> {
    let bytes = to_csv(records)?;
    ensure_parent(path).await?;
    tokio::fs::write(path, bytes).await?;
    info!("💾 Saved {} records to {}", records.len(), path.display());
    Ok(())
}

pub async fn write_json(path: &Path, records: &[CleanRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    ensure_parent(path).await?;
    tokio::fs::write(path, json).await?;
    info!("💾 Saved JSON snapshot to {}", path.display());
    Ok(())
}
