//! Spatial equality between two record geometries.
//!
//! Equality is topological: two geometries are equal iff they cover the
//! identical spatial extent, regardless of vertex order, ring direction, or
//! redundant vertices. Byte-exact representation equality is only a fast
//! path.

use geo::{HasDimensions, Relate, Validation};
use geo_types::Geometry;

use crate::error::{GeomError, GeomResult};
use crate::kind::GeometryKind;

/// Decide whether two record geometries cover the same spatial extent.
///
/// An absent (`None`) geometry and an empty geometry are treated alike:
/// equal to each other, unequal to any non-empty geometry. Invalid input
/// geometry is an error, not a comparison result.
pub fn spatial_eq(
    old: Option<&Geometry<f64>>,
    new: Option<&Geometry<f64>>,
) -> GeomResult<bool> {
    match (nonempty(old), nonempty(new)) {
        (None, None) => Ok(true),
        (None, Some(_)) | (Some(_), None) => Ok(false),
        (Some(a), Some(b)) => {
            ensure_valid(a, "old")?;
            ensure_valid(b, "new")?;
            if a == b {
                return Ok(true);
            }
            Ok(a.relate(b).is_equal_topo())
        }
    }
}

/// Strip absent and empty geometries down to `None`.
fn nonempty(g: Option<&Geometry<f64>>) -> Option<&Geometry<f64>> {
    g.filter(|g| !g.is_empty())
}

pub(crate) fn ensure_valid(g: &Geometry<f64>, role: &'static str) -> GeomResult<()> {
    if g.is_valid() {
        Ok(())
    } else {
        Err(GeomError::InvalidGeometry {
            role,
            kind: GeometryKind::of(g),
        })
    }
}
