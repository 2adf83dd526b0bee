use geodelta_geom::GeometryKind;
use geodelta_types::Schema;

use crate::feature::Feature;
use crate::srs::SpatialRef;

/// Read-only feature collection capability.
///
/// All implementations must satisfy these invariants:
/// - Every feature conforms to `schema()`: attribute names come from the
///   schema, and a name missing from a feature reads as null.
/// - Iteration order is the collection's source order and is stable across
///   calls for the lifetime of the borrow.
/// - The collection is never mutated through this trait; concurrent reads
///   are always safe.
pub trait Layer: Send + Sync {
    /// The ordered field schema shared by every feature.
    fn schema(&self) -> &Schema;

    /// The collection's declared geometry kind.
    fn geometry_kind(&self) -> GeometryKind;

    /// The collection's spatial reference identifier.
    fn spatial_ref(&self) -> &SpatialRef;

    /// Iterate the features in source order.
    fn features(&self) -> Box<dyn Iterator<Item = &Feature> + '_>;

    /// Number of features. Default implementation walks the iterator;
    /// implementations with a cheap count may override.
    fn feature_count(&self) -> usize {
        self.features().count()
    }
}
