use std::collections::BTreeMap;

use geo_types::Geometry;
use geodelta_types::Value;

const NULL: Value = Value::Null;

/// One record of a collection: attribute values keyed by field name, plus
/// at most one geometry.
///
/// A feature does not carry its schema; the owning layer does. An attribute
/// name missing from the map reads as null, mirroring the NULL slot every
/// schema'd field has in the source data model.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feature {
    /// Attribute values keyed by field name.
    pub attrs: BTreeMap<String, Value>,
    /// The feature geometry; `None` means no geometry.
    pub geometry: Option<Geometry<f64>>,
}

impl Feature {
    /// Create an empty feature (no attributes, no geometry).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute value, returning the feature for chaining.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set the geometry, returning the feature for chaining.
    pub fn with_geometry(mut self, geometry: Geometry<f64>) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Read an attribute value. Missing names read as [`Value::Null`].
    pub fn attr(&self, name: &str) -> &Value {
        self.attrs.get(name).unwrap_or(&NULL)
    }
}
