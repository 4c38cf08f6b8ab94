use crate::domain::listing::ListingRecord;
use crate::errors::ExportError;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tracing::info;

/// Column widths for the scalar fields; image columns use `IMAGE_COL_WIDTH`.
const COL_WIDTHS: [f64; 9] = [40.0, 40.0, 16.0, 28.0, 14.0, 10.0, 10.0, 10.0, 60.0];
const IMAGE_COL_WIDTH: f64 = 40.0;

pub fn listings_xlsx_buffer(records: &[ListingRecord]) -> Result<Vec<u8>, ExportError> {
    let first = records.first().ok_or(ExportError::EmptyBatch)?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    // Headers
    for (col, header) in first.keys().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, header, &bold)?;
        let width = COL_WIDTHS
            .get(col as usize)
            .copied()
            .unwrap_or(IMAGE_COL_WIDTH);
        worksheet.set_column_width(col, width)?;
    }

    // Rows
    for (i, record) in records.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, value) in record.values().enumerate() {
            worksheet.write_string(r, col as u16, value)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

pub fn export_listings_xlsx(records: &[ListingRecord], path: &Path) -> Result<(), ExportError> {
    let buffer = listings_xlsx_buffer(records)?;

    std::fs::write(path, buffer).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), rows = records.len(), "wrote XLSX");
    Ok(())
}
