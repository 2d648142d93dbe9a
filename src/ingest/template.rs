//! Template export boundary.
//!
//! The document-generation collaborator writes the actual spreadsheet
//! file; this module only supplies the canonical example data, header
//! order, and suggested column widths.

use crate::ingest::normalize::EXPECTED_HEADERS;
use serde::Serialize;

/// Suggested display width per column, in character units.
pub const TEMPLATE_COLUMN_WIDTHS: [u16; 5] = [15, 15, 15, 12, 12];

/// Canonical template contents: headers in column order, a two-row
/// example dataset, and suggested column widths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSheet {
    pub headers: [&'static str; 5],
    pub rows: [[&'static str; 5]; 2],
    pub column_widths: [u16; 5],
}

/// The fixed example template handed to the document collaborator.
pub fn template_sheet() -> TemplateSheet {
    TemplateSheet {
        headers: EXPECTED_HEADERS,
        rows: [
            ["Juan", "Pérez", "Madrid", "2025-08-01", "2025-08-05"],
            ["Ana", "López", "Barcelona", "2025-08-02", "2025-08-06"],
        ],
        column_widths: TEMPLATE_COLUMN_WIDTHS,
    }
}

#[cfg(test)]
mod tests {
    use super::template_sheet;
    use crate::ingest::codec::decode_date;
    use crate::ingest::raw::CellValue;

    #[test]
    fn test_template_headers_and_widths() {
        let sheet = template_sheet();
        assert_eq!(
            sheet.headers,
            ["nombre", "apellido", "centro", "llegada", "salida"]
        );
        assert_eq!(sheet.column_widths, [15, 15, 15, 12, 12]);
    }

    #[test]
    fn test_template_dates_are_valid_iso() {
        for row in template_sheet().rows {
            for date in &row[3..] {
                assert!(decode_date(&CellValue::Text(date.to_string())).is_some());
            }
        }
    }
}
