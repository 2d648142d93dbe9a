//! Error types for roster import operations.

use crate::ingest::normalize::EXPECTED_HEADERS;

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;

/// Error type for import operations.
///
/// An import either replaces the whole working roster or fails with one of
/// these conditions; there is no partial-success mode. All variants are
/// recoverable by a subsequent import attempt.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The parsing collaborator produced zero rows. The input was readable
    /// but empty, which is distinct from containing no usable rows.
    #[error("input contained no rows")]
    EmptyInput,

    /// Non-empty input, but every row was dropped during normalization.
    /// Carries the canonical header names so the caller can surface
    /// guidance about the expected column layout.
    #[error("no usable rows found; expected columns: {}", expected_headers.join(", "))]
    NoUsableRows {
        expected_headers: Vec<&'static str>,
    },

    /// The parsing collaborator could not read the byte stream at all.
    /// Opaque by design: the engine does not interpret parser internals.
    #[error("import failed: {0}")]
    Parse(anyhow::Error),
}

impl From<anyhow::Error> for ImportError {
    fn from(err: anyhow::Error) -> Self {
        ImportError::Parse(err)
    }
}

impl ImportError {
    /// Construct the no-usable-rows condition with the canonical headers.
    pub fn no_usable_rows() -> Self {
        ImportError::NoUsableRows {
            expected_headers: EXPECTED_HEADERS.to_vec(),
        }
    }
}
