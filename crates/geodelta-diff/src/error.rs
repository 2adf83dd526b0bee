//! Error types for the diff engine.

use std::fmt;

use geodelta_geom::GeomError;

/// Which input collection an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Old => write!(f, "old"),
            Self::New => write!(f, "new"),
        }
    }
}

/// Errors that abort a diff invocation.
///
/// The engine is fail-fast: no partial output collection is ever produced.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The key field or a compared field is missing from a layer schema.
    #[error("field {field:?} not found in the {side} layer schema")]
    MissingField { field: String, side: Side },

    /// The input schema already carries the synthetic classification field.
    #[error("the {side} layer already has a {field:?} field")]
    ReservedField { field: String, side: Side },

    /// Geometry equality or symmetric difference failed for one key.
    #[error("geometry computation failed for key {key:?}")]
    Geometry {
        key: String,
        #[source]
        source: GeomError,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
