//! Bulk person import from the tab-separated template.
//!
//! DESIGN
//! ======
//! The first row must be the template header. Every following non-blank row
//! becomes one `PersonImportRequest`; the backend creates unknown roles and
//! tags by name. Rows are validated locally so nothing is sent when any row
//! is bad.
//!
//! ERROR HANDLING
//! ==============
//! Errors carry the 1-based line number of the offending row.

#[cfg(test)]
#[path = "import_test.rs"]
mod import_test;

use crate::error::ErrorCode;
use crate::net::types::{NamedTag, PersonImportRequest};

pub const TEMPLATE_HEADER: [&str; 5] = ["Person Name", "CDSID", "Person Role", "Person Note", "Person Tags"];

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("import file is empty")]
    Empty,
    #[error("unexpected header `{found}`; expected `{}`", TEMPLATE_HEADER.join("\\t"))]
    BadHeader { found: String },
    #[error("line {line}: person name is required")]
    MissingName { line: u64 },
    #[error("line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

impl ErrorCode for ImportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "E_IMPORT_EMPTY",
            Self::BadHeader { .. } => "E_IMPORT_HEADER",
            Self::MissingName { .. } => "E_IMPORT_NAME",
            Self::Csv { .. } => "E_IMPORT_CSV",
        }
    }
}

/// Header line plus one example row, matching the downloadable template.
#[must_use]
pub fn template() -> String {
    format!("{}\r\nBruce Wayne\timbatman\tSuperhero\tLikes champagne\tNight Shift", TEMPLATE_HEADER.join("\t"))
}

fn non_empty(field: Option<&str>) -> Option<String> {
    field.map(str::trim).filter(|f| !f.is_empty()).map(str::to_owned)
}

fn split_tags(field: Option<&str>) -> Vec<NamedTag> {
    field
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|name| NamedTag { name: name.to_owned() })
        .collect()
}

/// Parse template text into import requests.
///
/// # Errors
///
/// Returns an error for a missing or wrong header, a malformed row, or a row
/// without a person name.
pub fn parse_import(text: &str) -> Result<Vec<PersonImportRequest>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = reader.records();
    let header = match records.next() {
        None => return Err(ImportError::Empty),
        Some(record) => record.map_err(|source| ImportError::Csv { line: 1, source })?,
    };
    let header_matches = header.len() >= TEMPLATE_HEADER.len()
        && header.iter().zip(TEMPLATE_HEADER).all(|(found, expected)| found.eq_ignore_ascii_case(expected));
    if !header_matches {
        return Err(ImportError::BadHeader { found: header.iter().collect::<Vec<_>>().join("\t") });
    }

    let mut people = Vec::new();
    for (index, record) in records.enumerate() {
        let fallback_line = index as u64 + 2;
        let record = record.map_err(|source| ImportError::Csv { line: fallback_line, source })?;
        let line = record.position().map_or(fallback_line, csv::Position::line);
        if record.iter().all(str::is_empty) {
            continue;
        }
        let name = non_empty(record.get(0)).ok_or(ImportError::MissingName { line })?;
        people.push(PersonImportRequest {
            name,
            custom_field1: non_empty(record.get(1)),
            space_role: non_empty(record.get(2)).map(|name| NamedTag { name }),
            notes: non_empty(record.get(3)),
            tags: split_tags(record.get(4)),
            new_person: false,
        });
    }
    Ok(people)
}
