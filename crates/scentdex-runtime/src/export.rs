use scentdex_types::Item;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::Result;

const HEADER: [&str; 7] = ["code", "name", "brand", "gender", "accords", "seasons", "occasions"];

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    code: &'a str,
    name: &'a str,
    brand: &'a str,
    gender: &'a str,
    accords: String,
    seasons: String,
    occasions: String,
}

impl<'a> From<&'a Item> for ExportRow<'a> {
    fn from(item: &'a Item) -> Self {
        Self {
            code: &item.code,
            name: &item.name,
            brand: &item.brand,
            gender: item.gender.map(|g| g.as_str()).unwrap_or(""),
            accords: item.accords.join("; "),
            seasons: item.seasons.join("; "),
            occasions: item.occasions.join("; "),
        }
    }
}

/// Write items as CSV. The header row is written even for an empty set;
/// multi-valued tags are `; `-joined.
pub fn write_csv<W: Write>(writer: W, items: &[&Item]) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for item in items {
        csv_writer.serialize(ExportRow::from(*item))?;
    }
    csv_writer.flush()?;
    Ok(items.len())
}

pub fn export_csv(path: &Path, items: &[&Item]) -> Result<usize> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    let written = write_csv(file, items)?;
    tracing::info!(path = %path.display(), rows = written, "exported results");
    Ok(written)
}
