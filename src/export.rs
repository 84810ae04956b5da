//! Multi-sheet xlsx export
//!
//! One worksheet per area that has records, named after the area, with a bold header
//! row of [`COLUMNS`] and one string row per record. Sheets follow the area order of the
//! [`ResultSet`], so identical input always produces identical sheets.

use crate::error::{Result, ScrapeError};
use crate::listing::{COLUMNS, ListingRecord, ResultSet, total_records};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Build the workbook in memory. Areas without records get no sheet.
pub fn build_workbook(results: &ResultSet) -> Result<Workbook> {
    if total_records(results) == 0 {
        return Err(ScrapeError::NoData);
    }

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    for (area, records) in results.iter().filter(|(_, records)| !records.is_empty()) {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(area.as_str())?;
        write_sheet(worksheet, records, &header)?;
    }

    Ok(workbook)
}

fn write_sheet(worksheet: &mut Worksheet, records: &[ListingRecord], header: &Format) -> Result<()> {
    for (col, title) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, header)?;
    }

    for (row, record) in records.iter().enumerate() {
        for (col, value) in record.cells().iter().enumerate() {
            worksheet.write_string(row as u32 + 1, col as u16, *value)?;
        }
    }

    worksheet.autofit();
    Ok(())
}

/// Write `results` to an xlsx file at `path`, returning the number of sheets written.
///
/// Nothing is written when no area has records. Failures are logged here and returned.
pub fn export(results: &ResultSet, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();

    let mut workbook = match build_workbook(results) {
        Ok(workbook) => workbook,
        Err(ScrapeError::NoData) => {
            log::error!("No structured data collected across all areas.");
            return Err(ScrapeError::NoData);
        }
        Err(e) => {
            log::error!("An error occurred while building the Excel workbook: {}", e);
            return Err(e);
        }
    };

    if let Err(e) = workbook.save(path) {
        log::error!("An error occurred while saving the Excel file {}: {}", path.display(), e);
        return Err(e.into());
    }

    let sheets = results.values().filter(|records| !records.is_empty()).count();
    log::info!("Excel file created successfully: {}", path.display());
    Ok(sheets)
}
