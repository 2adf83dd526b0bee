//! Key → record lookup, built once per input collection.
//!
//! Purely structural: a single pass in source order, no attribute or
//! geometry inspection. Keys are the canonical textual form of the key
//! field's value, so the index is deterministic and order-insensitive to
//! the numeric representation of a key.

use std::collections::BTreeMap;

use geodelta_layer::{Feature, Layer};
use tracing::debug;

use crate::error::{DiffError, DiffResult, Side};

/// Mapping from key value (canonical text form) to a borrowed record.
#[derive(Debug, Default)]
pub struct KeyedIndex<'a> {
    entries: BTreeMap<String, &'a Feature>,
}

impl<'a> KeyedIndex<'a> {
    /// Number of distinct keys. Always ≤ the input collection's size.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the index holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the record indexed under a key.
    pub fn get(&self, key: &str) -> Option<&'a Feature> {
        self.entries.get(key).copied()
    }

    /// Returns `true` if the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate `(key, record)` pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a Feature)> {
        self.entries.iter().map(|(k, f)| (k.as_str(), *f))
    }
}

/// Build the key → record index for one input collection.
///
/// On a duplicate key the later record in source order wins; that is a
/// defined policy, not an error. A record with no stored value for the key
/// field indexes under the null key.
pub fn build_index<'a>(
    layer: &'a dyn Layer,
    key_field: &str,
    side: Side,
) -> DiffResult<KeyedIndex<'a>> {
    if !layer.schema().contains(key_field) {
        return Err(DiffError::MissingField {
            field: key_field.to_string(),
            side,
        });
    }

    let mut entries: BTreeMap<String, &'a Feature> = BTreeMap::new();
    for feature in layer.features() {
        let key = feature.attr(key_field).to_string();
        if entries.insert(key.clone(), feature).is_some() {
            debug!(%side, key = %key, "duplicate key, keeping the later record");
        }
    }
    Ok(KeyedIndex { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use geodelta_geom::GeometryKind;
    use geodelta_layer::{MemoryLayer, SpatialRef};
    use geodelta_types::{Field, FieldType, Schema, Value};

    fn layer_with(features: Vec<Feature>) -> MemoryLayer {
        let schema = Schema::new(vec![
            Field::new("id", FieldType::Int),
            Field::new("name", FieldType::Text),
        ]);
        MemoryLayer::with_features(schema, GeometryKind::Polygon, SpatialRef::wgs84(), features)
    }

    #[test]
    fn index_covers_every_key() {
        let layer = layer_with(vec![
            Feature::new().with_attr("id", 1i64),
            Feature::new().with_attr("id", 2i64),
        ]);
        let index = build_index(&layer, "id", Side::Old).unwrap();
        assert_eq!(index.len(), 2);
        assert!(index.contains("1"));
        assert!(index.contains("2"));
        assert!(!index.contains("3"));
    }

    #[test]
    fn missing_key_field_fails_fast() {
        let layer = layer_with(vec![]);
        let err = build_index(&layer, "code", Side::New).unwrap_err();
        match err {
            DiffError::MissingField { field, side } => {
                assert_eq!(field, "code");
                assert_eq!(side, Side::New);
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_key_keeps_the_later_record() {
        let layer = layer_with(vec![
            Feature::new().with_attr("id", 1i64).with_attr("name", "first"),
            Feature::new().with_attr("id", 1i64).with_attr("name", "second"),
        ]);
        let index = build_index(&layer, "id", Side::Old).unwrap();
        assert_eq!(index.len(), 1);
        let winner = index.get("1").unwrap();
        assert_eq!(winner.attr("name"), &Value::Text("second".into()));
    }

    #[test]
    fn missing_key_value_indexes_under_null() {
        let layer = layer_with(vec![Feature::new().with_attr("name", "orphan")]);
        let index = build_index(&layer, "id", Side::Old).unwrap();
        assert!(index.contains("NULL"));
    }

    #[test]
    fn iteration_is_key_sorted() {
        let layer = layer_with(vec![
            Feature::new().with_attr("id", "b"),
            Feature::new().with_attr("id", "a"),
        ]);
        let index = build_index(&layer, "id", Side::Old).unwrap();
        let keys: Vec<_> = index.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, ["a", "b"]);
    }
}
