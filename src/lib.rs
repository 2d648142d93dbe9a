//! # Roster Matrix
//!
//! Availability matrix engine for person-stay rosters.
//!
//! This crate ingests loosely-typed tabular rows describing people with a
//! stay interval (arrival/departure dates) and a location, and derives a
//! per-day availability view: who is present on which day, how many are
//! present per day, and summary statistics — all recomputed consistently
//! under a location filter.
//!
//! ## Features
//!
//! - **Normalization**: Resolve heterogeneous, multi-language column names
//!   into canonical stay records, dropping rows that cannot be validated
//! - **Date Decoding**: Accept ISO-8601 strings, spreadsheet day-serial
//!   numbers, and native date-time cells, all mapped onto one calendar type
//! - **Calendar Ranges**: Contiguous day sequences spanning the full roster
//! - **Availability**: Per-record/per-day presence and per-day occupancy
//! - **Statistics**: Population size, average stay duration, peak occupancy
//!
//! ## Architecture
//!
//! - [`models`]: Core data types (`CalendarDate`, `StayRecord`, `Roster`)
//! - [`ingest`]: Raw-row boundary, date codec, normalizer, template export
//! - [`services`]: Pure derivations — range building, filtering,
//!   availability evaluation, and summary statistics
//! - [`engine`]: Stateful orchestrator holding the working roster and
//!   producing the combined availability view
//!
//! The crate performs no I/O: spreadsheet parsing and rendering are
//! external collaborators that exchange [`ingest::RawRow`] values and
//! [`engine::AvailabilityView`] snapshots with this engine.

pub mod engine;
pub mod error;
pub mod ingest;
pub mod models;
pub mod services;

pub use engine::{AvailabilityRow, AvailabilityView, RosterEngine};
pub use error::ImportError;
pub use models::{CalendarDate, Roster, StayRecord};
pub use services::filter::LocationFilter;
pub use services::summary::Statistics;
