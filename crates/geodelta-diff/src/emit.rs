//! Materialize the output collection from reconciled dispositions.
//!
//! Only changes are surfaced: unchanged keys emit nothing. A geometry
//! change emits two records: the changed record itself and a synthetic
//! record carrying the symmetric-difference geometry.

use geo_types::Geometry;
use geodelta_geom::sym_difference;
use geodelta_layer::{Feature, Layer, MemoryLayer};
use geodelta_types::{ChangeType, FieldType, Schema, Value, CHANGE_TYPE_FIELD};

use crate::error::{DiffError, DiffResult};
use crate::reconcile::Disposition;

/// Build the diff collection for a sequence of classified keys.
///
/// The output schema is the new layer's fields, in order, plus a trailing
/// `change_type` text field; geometry kind and spatial reference are
/// inherited from the new layer. Inputs are never mutated.
pub fn emit(
    dispositions: &[(String, Disposition<'_>)],
    new_layer: &dyn Layer,
) -> DiffResult<MemoryLayer> {
    let schema = new_layer
        .schema()
        .with_field(CHANGE_TYPE_FIELD, FieldType::Text);
    let mut out = MemoryLayer::new(
        schema.clone(),
        new_layer.geometry_kind(),
        new_layer.spatial_ref().clone(),
    );

    for (key, disposition) in dispositions {
        match disposition {
            Disposition::Added(new) => {
                out.push(diff_record(&schema, new, new.geometry.clone(), ChangeType::Added));
            }
            Disposition::Deleted(old) => {
                out.push(diff_record(&schema, old, old.geometry.clone(), ChangeType::Deleted));
            }
            Disposition::Unchanged => {}
            Disposition::AttrChanged { new, .. } => {
                out.push(diff_record(&schema, new, new.geometry.clone(), ChangeType::Attr));
            }
            Disposition::GeomChanged { old, new } => {
                out.push(diff_record(&schema, new, new.geometry.clone(), ChangeType::Geom));
                let diff_geom = sym_difference(old.geometry.as_ref(), new.geometry.as_ref())
                    .map_err(|source| DiffError::Geometry {
                        key: key.clone(),
                        source,
                    })?;
                out.push(diff_record(&schema, new, diff_geom, ChangeType::GeomDiff));
            }
        }
    }
    Ok(out)
}

/// One output record: the source record's value for every schema field
/// (verbatim), the classification tag, and the given geometry.
fn diff_record(
    schema: &Schema,
    source: &Feature,
    geometry: Option<Geometry<f64>>,
    change: ChangeType,
) -> Feature {
    let mut feature = Feature::new();
    for field in schema.iter() {
        if field.name == CHANGE_TYPE_FIELD {
            continue;
        }
        feature
            .attrs
            .insert(field.name.clone(), source.attr(&field.name).clone());
    }
    feature.attrs.insert(
        CHANGE_TYPE_FIELD.to_string(),
        Value::Text(change.as_str().to_string()),
    );
    feature.geometry = geometry;
    feature
}
