use crate::domain::listing::ListingRecord;
use crate::errors::ExportError;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes a header row followed by one row per record. Records must share one schema
/// (see `pad_batch`).
pub fn write_listings_csv<W: Write>(
    records: &[ListingRecord],
    writer: W,
) -> Result<(), ExportError> {
    let first = records.first().ok_or(ExportError::EmptyBatch)?;

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(first.keys())?;
    for record in records {
        csv.write_record(record.values())?;
    }
    csv.flush().map_err(csv::Error::from)?;

    Ok(())
}

pub fn export_listings_csv(records: &[ListingRecord], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    write_listings_csv(records, file)?;

    info!(path = %path.display(), rows = records.len(), "wrote CSV");
    Ok(())
}
