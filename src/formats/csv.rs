//! CSV export of the emotion catalog
//!
//! Columns: `id,quadrant,slot,name_ko,name_en`, one row per emotion in
//! catalog order.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::models::{MoodEmotion, MoodQuadrant, MoodTaxonomy};

#[derive(Serialize)]
struct CatalogRow<'a> {
    id: &'a str,
    quadrant: MoodQuadrant,
    slot: usize,
    name_ko: &'a str,
    name_en: &'a str,
}

impl<'a> From<&'a MoodEmotion> for CatalogRow<'a> {
    fn from(e: &'a MoodEmotion) -> Self {
        Self {
            id: &e.id,
            quadrant: e.quadrant,
            slot: e.slot,
            name_ko: e.name_ko,
            name_en: e.name_en,
        }
    }
}

fn write_rows<W: std::io::Write>(writer: &mut csv::Writer<W>, taxonomy: &MoodTaxonomy) -> Result<()> {
    for emotion in taxonomy.emotions() {
        writer
            .serialize(CatalogRow::from(emotion))
            .with_context(|| format!("Failed to write row for '{}'", emotion.id))?;
    }
    writer.flush().with_context(|| "Failed to flush CSV writer")?;
    Ok(())
}

pub fn catalog_to_csv_string(taxonomy: &MoodTaxonomy) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_rows(&mut writer, taxonomy)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to finish CSV: {}", e))?;
    String::from_utf8(bytes).with_context(|| "CSV output is not UTF-8")
}

/// Write the catalog to `path` as UTF-8 CSV
pub fn write_catalog_csv(taxonomy: &MoodTaxonomy, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    write_rows(&mut writer, taxonomy)?;
    tracing::info!(path = %path.display(), rows = taxonomy.len(), "catalog exported");
    Ok(())
}
