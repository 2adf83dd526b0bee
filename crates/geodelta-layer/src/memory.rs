use geodelta_geom::GeometryKind;
use geodelta_types::Schema;

use crate::feature::Feature;
use crate::srs::SpatialRef;
use crate::traits::Layer;

/// Vec-backed in-memory layer.
///
/// Serves as the engine's output collection and as the input collection for
/// tests and embedding hosts that already hold their features in memory.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryLayer {
    schema: Schema,
    geometry_kind: GeometryKind,
    spatial_ref: SpatialRef,
    features: Vec<Feature>,
}

impl MemoryLayer {
    /// Create an empty layer with the given identity.
    pub fn new(schema: Schema, geometry_kind: GeometryKind, spatial_ref: SpatialRef) -> Self {
        Self {
            schema,
            geometry_kind,
            spatial_ref,
            features: Vec::new(),
        }
    }

    /// Create a layer holding the given features.
    pub fn with_features(
        schema: Schema,
        geometry_kind: GeometryKind,
        spatial_ref: SpatialRef,
        features: Vec<Feature>,
    ) -> Self {
        Self {
            schema,
            geometry_kind,
            spatial_ref,
            features,
        }
    }

    /// Append a feature in source order.
    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if the layer holds no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Layer for MemoryLayer {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn geometry_kind(&self) -> GeometryKind {
        self.geometry_kind
    }

    fn spatial_ref(&self) -> &SpatialRef {
        &self.spatial_ref
    }

    fn features(&self) -> Box<dyn Iterator<Item = &Feature> + '_> {
        Box::new(self.features.iter())
    }

    fn feature_count(&self) -> usize {
        self.features.len()
    }
}
