//! Key-set reconciliation: classify every key of `old ∪ new` into exactly
//! one disposition.
//!
//! Old-only keys are deletions, new-only keys are additions, and the
//! intersection is classified per key by geometry and attribute comparison.
//! Geometry change takes classification priority: a key whose attributes
//! and geometry both differ is `GeomChanged`, never `AttrChanged`.

use geodelta_geom::spatial_eq;
use geodelta_layer::Feature;
use geodelta_types::Field;
use tracing::debug;

use crate::error::{DiffError, DiffResult};
use crate::index::KeyedIndex;

/// The reconciliation outcome assigned to one key.
#[derive(Clone, Copy, Debug)]
pub enum Disposition<'a> {
    /// Key present only in the new collection.
    Added(&'a Feature),
    /// Key present only in the old collection.
    Deleted(&'a Feature),
    /// Present in both; no compared attribute differs and the geometries
    /// are spatially equal.
    Unchanged,
    /// Present in both; at least one compared attribute differs, the
    /// geometries are spatially equal.
    AttrChanged {
        old: &'a Feature,
        new: &'a Feature,
    },
    /// Present in both; the geometries are not spatially equal, regardless
    /// of attribute equality.
    GeomChanged {
        old: &'a Feature,
        new: &'a Feature,
    },
}

/// Classify every key of the two indices.
///
/// Output order is deterministic: the old index's keys in sorted order
/// (matched and deleted interleaved), then new-only keys in sorted order.
/// Complexity is O(n + m) plus one geometric equality test per matched key.
pub fn reconcile<'a>(
    old: &KeyedIndex<'a>,
    new: &KeyedIndex<'a>,
    compare_fields: &[Field],
) -> DiffResult<Vec<(String, Disposition<'a>)>> {
    let mut dispositions = Vec::with_capacity(old.len() + new.len());

    // Matched and deleted keys.
    for (key, old_feature) in old.iter() {
        let disposition = match new.get(key) {
            Some(new_feature) => classify_pair(key, old_feature, new_feature, compare_fields)?,
            None => Disposition::Deleted(old_feature),
        };
        dispositions.push((key.to_string(), disposition));
    }

    // Added keys.
    for (key, new_feature) in new.iter() {
        if !old.contains(key) {
            dispositions.push((key.to_string(), Disposition::Added(new_feature)));
        }
    }

    debug!(keys = dispositions.len(), "reconciled key sets");
    Ok(dispositions)
}

fn classify_pair<'a>(
    key: &str,
    old: &'a Feature,
    new: &'a Feature,
    compare_fields: &[Field],
) -> DiffResult<Disposition<'a>> {
    let geom_equal = spatial_eq(old.geometry.as_ref(), new.geometry.as_ref()).map_err(|source| {
        DiffError::Geometry {
            key: key.to_string(),
            source,
        }
    })?;
    if !geom_equal {
        return Ok(Disposition::GeomChanged { old, new });
    }

    let attr_changed = compare_fields
        .iter()
        .any(|field| !field.ty.values_equal(old.attr(&field.name), new.attr(&field.name)));
    if attr_changed {
        Ok(Disposition::AttrChanged { old, new })
    } else {
        Ok(Disposition::Unchanged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{Geometry, Rect};
    use geodelta_geom::GeometryKind;
    use geodelta_layer::{Layer, MemoryLayer, SpatialRef};
    use geodelta_types::{FieldType, Schema};

    use crate::error::Side;
    use crate::index::build_index;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Geometry<f64> {
        Geometry::Polygon(Rect::new((x0, y0), (x1, y1)).to_polygon())
    }

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("id", FieldType::Int),
            Field::new("name", FieldType::Text),
        ])
    }

    fn layer_with(features: Vec<Feature>) -> MemoryLayer {
        MemoryLayer::with_features(schema(), GeometryKind::Polygon, SpatialRef::wgs84(), features)
    }

    fn reconcile_layers<'a>(
        old: &'a MemoryLayer,
        new: &'a MemoryLayer,
    ) -> DiffResult<Vec<(String, Disposition<'a>)>> {
        let compare: Vec<Field> = new.schema().iter().cloned().collect();
        let old_index = build_index(old, "id", Side::Old)?;
        let new_index = build_index(new, "id", Side::New)?;
        reconcile(&old_index, &new_index, &compare)
    }

    fn feat(id: i64, name: &str, geom: Option<Geometry<f64>>) -> Feature {
        let mut f = Feature::new().with_attr("id", id).with_attr("name", name);
        f.geometry = geom;
        f
    }

    #[test]
    fn partitions_into_added_deleted_matched() {
        let old = layer_with(vec![
            feat(1, "keep", Some(square(0.0, 0.0, 1.0, 1.0))),
            feat(2, "drop", Some(square(0.0, 0.0, 1.0, 1.0))),
        ]);
        let new = layer_with(vec![
            feat(1, "keep", Some(square(0.0, 0.0, 1.0, 1.0))),
            feat(3, "new", Some(square(0.0, 0.0, 1.0, 1.0))),
        ]);
        let dispositions = reconcile_layers(&old, &new).unwrap();
        assert_eq!(dispositions.len(), 3);

        let by_key = |k: &str| {
            dispositions
                .iter()
                .find(|(key, _)| key == k)
                .map(|(_, d)| d)
                .unwrap()
        };
        assert!(matches!(by_key("1"), Disposition::Unchanged));
        assert!(matches!(by_key("2"), Disposition::Deleted(_)));
        assert!(matches!(by_key("3"), Disposition::Added(_)));
    }

    #[test]
    fn attribute_change_with_equal_geometry() {
        let old = layer_with(vec![feat(1, "A", Some(square(0.0, 0.0, 1.0, 1.0)))]);
        let new = layer_with(vec![feat(1, "A2", Some(square(0.0, 0.0, 1.0, 1.0)))]);
        let dispositions = reconcile_layers(&old, &new).unwrap();
        assert!(matches!(dispositions[0].1, Disposition::AttrChanged { .. }));
    }

    #[test]
    fn geometry_change_with_equal_attributes() {
        let old = layer_with(vec![feat(1, "A", Some(square(0.0, 0.0, 2.0, 2.0)))]);
        let new = layer_with(vec![feat(1, "A", Some(square(1.0, 1.0, 3.0, 3.0)))]);
        let dispositions = reconcile_layers(&old, &new).unwrap();
        assert!(matches!(dispositions[0].1, Disposition::GeomChanged { .. }));
    }

    #[test]
    fn geometry_takes_precedence_over_attributes() {
        let old = layer_with(vec![feat(1, "A", Some(square(0.0, 0.0, 2.0, 2.0)))]);
        let new = layer_with(vec![feat(1, "B", Some(square(1.0, 1.0, 3.0, 3.0)))]);
        let dispositions = reconcile_layers(&old, &new).unwrap();
        assert!(
            matches!(dispositions[0].1, Disposition::GeomChanged { .. }),
            "both-changed keys must classify as geometry changes"
        );
    }

    #[test]
    fn both_null_geometries_are_equal() {
        let old = layer_with(vec![feat(1, "A", None)]);
        let new = layer_with(vec![feat(1, "A", None)]);
        let dispositions = reconcile_layers(&old, &new).unwrap();
        assert!(matches!(dispositions[0].1, Disposition::Unchanged));
    }

    #[test]
    fn one_sided_null_geometry_is_a_geometry_change() {
        let old = layer_with(vec![feat(1, "A", None)]);
        let new = layer_with(vec![feat(1, "A", Some(square(0.0, 0.0, 1.0, 1.0)))]);
        let dispositions = reconcile_layers(&old, &new).unwrap();
        assert!(matches!(dispositions[0].1, Disposition::GeomChanged { .. }));
    }

    #[test]
    fn vertex_order_does_not_mask_equality() {
        use geo_types::polygon;
        let ring_a: Geometry<f64> = polygon![
            (x: 0.0, y: 0.0),
            (x: 2.0, y: 0.0),
            (x: 2.0, y: 2.0),
            (x: 0.0, y: 2.0),
        ]
        .into();
        let ring_b: Geometry<f64> = polygon![
            (x: 2.0, y: 2.0),
            (x: 2.0, y: 0.0),
            (x: 0.0, y: 0.0),
            (x: 0.0, y: 2.0),
        ]
        .into();
        let old = layer_with(vec![feat(1, "A", Some(ring_a))]);
        let new = layer_with(vec![feat(1, "A", Some(ring_b))]);
        let dispositions = reconcile_layers(&old, &new).unwrap();
        assert!(matches!(dispositions[0].1, Disposition::Unchanged));
    }

    #[test]
    fn invalid_geometry_aborts_the_run() {
        use geo_types::polygon;
        let bowtie: Geometry<f64> = polygon![
            (x: 0.0, y: 0.0),
            (x: 2.0, y: 2.0),
            (x: 2.0, y: 0.0),
            (x: 0.0, y: 2.0),
        ]
        .into();
        let old = layer_with(vec![feat(1, "A", Some(bowtie))]);
        let new = layer_with(vec![feat(1, "A", Some(square(0.0, 0.0, 1.0, 1.0)))]);
        let err = reconcile_layers(&old, &new).unwrap_err();
        match err {
            DiffError::Geometry { key, .. } => assert_eq!(key, "1"),
            other => panic!("expected Geometry error, got {:?}", other),
        }
    }
}
