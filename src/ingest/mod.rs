//! Ingest layer: the boundary with the spreadsheet/CSV parsing
//! collaborator.
//!
//! The parsing collaborator hands this layer a sequence of loosely-typed
//! [`RawRow`] values with column names exactly as authored in the source
//! file. Normalization resolves those names through per-field alias lists,
//! decodes dates, and produces a validated [`crate::models::Roster`].

pub mod codec;
pub mod normalize;
pub mod raw;
pub mod template;

pub use codec::decode_date;
pub use normalize::normalize;
pub use raw::{CellValue, RawRow};
pub use template::{template_sheet, TemplateSheet};
