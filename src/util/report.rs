//! People report export.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use time::Date;

use crate::net::types::{ReportRow, wire_date};

pub const REPORT_HEADERS: [&str; 8] = [
    "Product Name",
    "Product Location",
    "Product Tags",
    "Person Name",
    "CDSID",
    "Person Role",
    "Person Note",
    "Person Tags",
];

/// Render report rows as CSV with every field quoted and no trailing newline.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn report_to_csv(rows: &[ReportRow]) -> Result<String, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(REPORT_HEADERS)?;
    for row in rows {
        writer.write_record([
            &row.product_name,
            &row.product_location,
            &row.product_tags,
            &row.person_name,
            &row.custom_field1,
            &row.person_role,
            &row.person_note,
            &row.person_tags,
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.trim_end_matches('\n').to_owned())
}

/// `<space>_<YYYY-MM-DD>.csv`, with path separators in the space name
/// replaced so the result is always a bare file name.
#[must_use]
pub fn report_file_name(space_name: &str, date: Date) -> String {
    let safe: String = space_name.chars().map(|c| if matches!(c, '/' | '\\') { '_' } else { c }).collect();
    format!("{safe}_{}.csv", wire_date::format(date))
}
