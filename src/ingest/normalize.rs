//! Record normalizer: heterogeneous raw rows into a validated roster.

use crate::error::{ImportError, ImportResult};
use crate::ingest::codec::decode_date;
use crate::ingest::raw::{CellValue, RawRow};
use crate::models::{CalendarDate, Roster, StayRecord};
use log::{debug, warn};

/// Accepted column-name aliases per canonical field, probed in order with
/// case-sensitive exact matches. Covers the native-language and English
/// variants the source files use; the first present, non-empty alias wins.
pub const GIVEN_NAME_ALIASES: &[&str] = &["nombre", "Nombre", "NOMBRE", "name", "Name"];
pub const FAMILY_NAME_ALIASES: &[&str] = &[
    "apellido",
    "Apellido",
    "APELLIDO",
    "apellidos",
    "Apellidos",
    "surname",
    "Surname",
];
pub const LOCATION_ALIASES: &[&str] = &[
    "centro", "Centro", "CENTRO", "city", "City", "ciudad", "Ciudad",
];
pub const ARRIVAL_ALIASES: &[&str] = &[
    "llegada", "Llegada", "LLEGADA", "arrival", "Arrival", "inicio", "Inicio",
];
pub const DEPARTURE_ALIASES: &[&str] = &[
    "salida", "Salida", "SALIDA", "departure", "Departure", "fin", "Fin",
];

/// Canonical header names, in column order, for caller guidance and for
/// the template export.
pub const EXPECTED_HEADERS: [&str; 5] = ["nombre", "apellido", "centro", "llegada", "salida"];

/// First alias present in the row with a non-empty cell.
fn lookup<'a>(row: &'a RawRow, aliases: &[&str]) -> Option<&'a CellValue> {
    aliases
        .iter()
        .filter_map(|alias| row.get(*alias))
        .find(|cell| !cell.is_empty())
}

/// Resolve a text field: first matching alias, coerced to trimmed text.
fn resolve_text(row: &RawRow, aliases: &[&str]) -> Option<String> {
    lookup(row, aliases)?.as_text().filter(|s| !s.is_empty())
}

/// Resolve a date field through the codec.
fn resolve_date(row: &RawRow, aliases: &[&str]) -> Option<CalendarDate> {
    decode_date(lookup(row, aliases)?)
}

/// Normalize one raw row. `None` when any of the five fields fails to
/// resolve or the interval is inverted; the caller drops such rows.
fn normalize_row(row: &RawRow) -> Option<StayRecord> {
    let given_name = resolve_text(row, GIVEN_NAME_ALIASES)?;
    let family_name = resolve_text(row, FAMILY_NAME_ALIASES)?;
    let location = resolve_text(row, LOCATION_ALIASES)?;
    let arrival = resolve_date(row, ARRIVAL_ALIASES)?;
    let departure = resolve_date(row, DEPARTURE_ALIASES)?;
    StayRecord::try_new(&given_name, &family_name, &location, arrival, departure)
}

/// Normalize a batch of raw rows into a roster.
///
/// Invalid rows are dropped silently, valid ones kept in input order.
/// Zero rows in is the distinct [`ImportError::EmptyInput`] condition;
/// rows in but zero records out is [`ImportError::NoUsableRows`], which
/// carries the expected header names for caller guidance.
pub fn normalize(rows: &[RawRow]) -> ImportResult<Roster> {
    if rows.is_empty() {
        return Err(ImportError::EmptyInput);
    }

    let records: Vec<StayRecord> = rows.iter().filter_map(normalize_row).collect();

    let dropped = rows.len() - records.len();
    if dropped > 0 {
        warn!("dropped {} of {} raw rows during normalization", dropped, rows.len());
    }
    debug!("normalized {} records from {} raw rows", records.len(), rows.len());

    if records.is_empty() {
        return Err(ImportError::no_usable_rows());
    }
    Ok(Roster::new(records))
}
