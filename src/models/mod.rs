pub mod date;
pub mod record;

pub use date::*;
pub use record::*;
