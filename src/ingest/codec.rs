//! Date codec: one canonical calendar day out of three raw encodings.

use crate::ingest::raw::CellValue;
use crate::models::CalendarDate;

/// Decode a raw cell into a calendar date.
///
/// - Native date-time cells contribute only their date component.
/// - Numbers are spreadsheet day-serials (day 0 = 1899-12-30).
/// - Text must be a strict ISO-8601 `YYYY-MM-DD`; no locale formats.
///
/// Any other shape, or a value that does not resolve to a real date,
/// yields `None`. Pure and deterministic.
pub fn decode_date(value: &CellValue) -> Option<CalendarDate> {
    match value {
        CellValue::DateTime(dt) => Some(CalendarDate::new(dt.date())),
        CellValue::Number(serial) => CalendarDate::from_day_serial(*serial),
        CellValue::Text(s) => CalendarDate::parse_iso(s.trim()),
        CellValue::Empty => None,
    }
}

#[cfg(test)]
mod tests {
    use super::decode_date;
    use crate::ingest::raw::CellValue;
    use crate::models::CalendarDate;
    use chrono::NaiveDate;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse_iso(s).expect("valid test date")
    }

    #[test]
    fn test_decode_iso_string() {
        let cell = CellValue::Text("2024-08-01".to_string());
        assert_eq!(decode_date(&cell), Some(date("2024-08-01")));
    }

    #[test]
    fn test_decode_string_with_whitespace() {
        let cell = CellValue::Text("  2024-08-01 ".to_string());
        assert_eq!(decode_date(&cell), Some(date("2024-08-01")));
    }

    #[test]
    fn test_decode_day_serial() {
        assert_eq!(
            decode_date(&CellValue::Number(45504.0)),
            Some(date("2024-08-01"))
        );
    }

    #[test]
    fn test_serial_and_iso_agree() {
        let from_serial = decode_date(&CellValue::Number(45504.0));
        let from_iso = decode_date(&CellValue::Text("2024-08-01".to_string()));
        assert_eq!(from_serial, from_iso);
    }

    #[test]
    fn test_decode_native_datetime_drops_time() {
        let dt = NaiveDate::from_ymd_opt(2025, 8, 3)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(
            decode_date(&CellValue::DateTime(dt)),
            Some(date("2025-08-03"))
        );
    }

    #[test]
    fn test_decode_rejects_non_date_text() {
        assert_eq!(decode_date(&CellValue::Text("agosto 3".to_string())), None);
        assert_eq!(decode_date(&CellValue::Text("03/08/2025".to_string())), None);
    }

    #[test]
    fn test_decode_rejects_empty() {
        assert_eq!(decode_date(&CellValue::Empty), None);
        assert_eq!(decode_date(&CellValue::Text("".to_string())), None);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let cell = CellValue::Number(45504.25);
        assert_eq!(decode_date(&cell), decode_date(&cell));
    }
}
