use thiserror::Error;

use crate::kind::GeometryKind;

/// Errors produced by geometry comparison and difference operations.
///
/// Either variant aborts the whole diff invocation: a partially computed,
/// silently incomplete diff is worse than a clear failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeomError {
    /// The geometry failed validation (e.g. a self-intersecting ring), so
    /// equality and overlay results would be meaningless.
    #[error("invalid {kind} geometry on {role} side")]
    InvalidGeometry {
        role: &'static str,
        kind: GeometryKind,
    },

    /// No symmetric-difference rule exists for this combination of kinds.
    #[error("symmetric difference unsupported between {left} and {right}")]
    UnsupportedSymDifference {
        left: GeometryKind,
        right: GeometryKind,
    },
}

/// Convenience alias for geometry results.
pub type GeomResult<T> = Result<T, GeomError>;
