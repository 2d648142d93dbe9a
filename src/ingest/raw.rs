use chrono::NaiveDateTime;
use serde_json::Value;
use std::collections::HashMap;

/// Loosely-typed value of one parsed spreadsheet cell.
///
/// This is the shape the parsing collaborator produces: text, a number
/// (which for date columns is a spreadsheet day-serial), a native
/// date-time, or nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
    Empty,
}

impl CellValue {
    /// Whether the cell carries no usable content.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Coerce to trimmed text, as the original column values are coerced.
    /// Date-time cells do not coerce to text; only date columns accept them.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Text(s) => Some(s.trim().to_string()),
            CellValue::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl From<&Value> for CellValue {
    /// Map a JSON value to a cell. Booleans, arrays, and objects have no
    /// cell equivalent and become empty cells.
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => CellValue::Text(s.clone()),
            Value::Number(n) => match n.as_f64() {
                Some(f) => CellValue::Number(f),
                None => CellValue::Empty,
            },
            _ => CellValue::Empty,
        }
    }
}

/// One untyped input row: verbatim field names mapped to cell values.
/// Never mutated by this crate.
pub type RawRow = HashMap<String, CellValue>;

/// Convert a JSON array of objects (the shape a sheet-to-JSON parser
/// emits) into raw rows. Non-object elements are skipped.
pub fn rows_from_json(value: &Value) -> Vec<RawRow> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| item.as_object())
        .map(|obj| {
            obj.iter()
                .map(|(k, v)| (k.clone(), CellValue::from(v)))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{rows_from_json, CellValue};
    use serde_json::json;

    #[test]
    fn test_cell_emptiness() {
        assert!(CellValue::Empty.is_empty());
        assert!(CellValue::Text("   ".to_string()).is_empty());
        assert!(!CellValue::Text("Ana".to_string()).is_empty());
        assert!(!CellValue::Number(0.0).is_empty());
    }

    #[test]
    fn test_as_text_trims() {
        let cell = CellValue::Text("  Madrid ".to_string());
        assert_eq!(cell.as_text().as_deref(), Some("Madrid"));
    }

    #[test]
    fn test_as_text_coerces_numbers() {
        assert_eq!(CellValue::Number(5.0).as_text().as_deref(), Some("5"));
    }

    #[test]
    fn test_rows_from_json() {
        let rows = rows_from_json(&json!([
            { "nombre": "Ana", "llegada": 45504, "extra": null },
            "not an object"
        ]));
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].get("nombre"),
            Some(&CellValue::Text("Ana".to_string()))
        );
        assert_eq!(rows[0].get("llegada"), Some(&CellValue::Number(45504.0)));
        assert_eq!(rows[0].get("extra"), Some(&CellValue::Empty));
    }
}
