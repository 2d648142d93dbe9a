//! Pure derivations over roster snapshots.
//!
//! Everything in this layer recomputes wholesale from an immutable roster
//! and a filter criterion; nothing here caches or mutates state. The
//! calendar range is always built from the unfiltered roster while the
//! occupancy and statistics are built from the filtered one — an
//! intentional asymmetry the engine relies on.

pub mod availability;
pub mod filter;
pub mod range;
pub mod summary;

pub use availability::{daily_totals, occupancy, presence_row};
pub use filter::{distinct_locations, filter_roster, LocationFilter};
pub use range::{build_range, CalendarRange};
pub use summary::{summarize, Statistics};
