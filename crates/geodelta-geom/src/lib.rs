//! Geometry adapter for geodelta.
//!
//! Wraps the georust `geo` algorithms behind the two operations the diff
//! engine needs: topological equality between two record geometries, and
//! the symmetric difference (the region covered by exactly one of the two)
//! for changed geometries. Both treat absent and empty geometries uniformly.
//!
//! # Key Types
//!
//! - [`spatial_eq`] — Order-of-vertices-insensitive spatial equality
//! - [`sym_difference`] — Symmetric-difference geometry of two records
//! - [`GeometryKind`] — Coarse geometry type tag for layer metadata
//! - [`GeomError`] / [`GeomResult`] — Failure taxonomy of the adapter

pub mod compare;
pub mod error;
pub mod kind;
pub mod symdiff;

pub use compare::spatial_eq;
pub use error::{GeomError, GeomResult};
pub use kind::GeometryKind;
pub use symdiff::sym_difference;
