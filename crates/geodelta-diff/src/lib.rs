//! Diff engine for geodelta.
//!
//! Compares two versions of a feature collection and produces a third
//! collection that classifies every record as added, deleted,
//! attribute-changed, geometry-changed, or unchanged, plus a synthetic
//! record per geometry change carrying the symmetric-difference geometry.
//!
//! The engine is a pure transform: `(old layer, new layer, key field) →
//! diff layer`. Inputs are read-only and never mutated; the output is
//! exclusively owned by the invocation. There is no internal concurrency
//! and no retry logic; a failure on given inputs recurs identically.
//!
//! # Key Types
//!
//! - [`diff_layers`] — The whole engine as one call
//! - [`build_index`] / [`KeyedIndex`] — Key → record lookup per collection
//! - [`reconcile`] / [`Disposition`] — Per-key classification
//! - [`emit`] — Diff record materialization
//! - [`DiffError`] / [`DiffResult`] — Fail-fast error taxonomy

pub mod emit;
pub mod error;
pub mod index;
pub mod reconcile;

pub use emit::emit;
pub use error::{DiffError, DiffResult, Side};
pub use index::{build_index, KeyedIndex};
pub use reconcile::{reconcile, Disposition};

use geodelta_layer::{Layer, MemoryLayer};
use geodelta_types::{Field, CHANGE_TYPE_FIELD};
use tracing::debug;

/// Compare two collections and produce the classified diff collection.
///
/// `key_field` names the field identifying a record across the two
/// collections; it must exist in both schemas. The compared fields are the
/// new collection's fields, all of which the old schema must also expose.
/// Schema problems fail fast before any record is touched, and a geometry
/// computation failure on any key aborts the whole run; no partial output
/// collection is ever produced.
pub fn diff_layers(
    old: &dyn Layer,
    new: &dyn Layer,
    key_field: &str,
) -> DiffResult<MemoryLayer> {
    for (side, layer) in [(Side::Old, old), (Side::New, new)] {
        if layer.schema().contains(CHANGE_TYPE_FIELD) {
            return Err(DiffError::ReservedField {
                field: CHANGE_TYPE_FIELD.to_string(),
                side,
            });
        }
    }

    let compare_fields: Vec<Field> = new.schema().iter().cloned().collect();
    for field in &compare_fields {
        if !old.schema().contains(&field.name) {
            return Err(DiffError::MissingField {
                field: field.name.clone(),
                side: Side::Old,
            });
        }
    }

    let old_index = build_index(old, key_field, Side::Old)?;
    let new_index = build_index(new, key_field, Side::New)?;
    debug!(
        old = old_index.len(),
        new = new_index.len(),
        key = key_field,
        "indexed input layers"
    );

    let dispositions = reconcile(&old_index, &new_index, &compare_fields)?;
    emit(&dispositions, new)
}
