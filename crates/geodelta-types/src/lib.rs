//! Foundation types for geodelta.
//!
//! This crate provides the scalar value model, field schemas, and change
//! classification tags used throughout the geodelta system. Every other
//! geodelta crate depends on `geodelta-types`.
//!
//! # Key Types
//!
//! - [`Value`] — Scalar attribute value (null, bool, int, float, text)
//! - [`FieldType`] — Declared type of a field, with typed value equality
//! - [`Field`] / [`Schema`] — Ordered, named field schema of a collection
//! - [`ChangeType`] — Five-way classification tag for emitted diff records

pub mod change;
pub mod error;
pub mod field;
pub mod schema;
pub mod value;

pub use change::{ChangeType, CHANGE_TYPE_FIELD};
pub use error::TypeError;
pub use field::{Field, FieldType};
pub use schema::Schema;
pub use value::Value;
