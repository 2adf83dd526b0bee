//! Symmetric-difference geometry: the region covered by exactly one of two
//! record geometries (union minus intersection).
//!
//! Areal inputs go through polygon overlay; puntal inputs through exact
//! coordinate-set difference. Mixed or linear combinations have no defined
//! symmetric-difference region here and fail rather than silently skip.

use geo::{BooleanOps, HasDimensions};
use geo_types::{Geometry, MultiPoint, MultiPolygon, Point};

use crate::compare::ensure_valid;
use crate::error::{GeomError, GeomResult};
use crate::kind::GeometryKind;

/// Compute the symmetric-difference geometry of two record geometries.
///
/// An absent or empty side contributes nothing, so the result is the other
/// side unchanged (`A xor empty = A`); two absent sides yield `None`.
/// Non-overlapping inputs yield their union; that is an expected outcome,
/// not an error.
pub fn sym_difference(
    old: Option<&Geometry<f64>>,
    new: Option<&Geometry<f64>>,
) -> GeomResult<Option<Geometry<f64>>> {
    let old = old.filter(|g| !g.is_empty());
    let new = new.filter(|g| !g.is_empty());
    match (old, new) {
        (None, None) => Ok(None),
        (Some(a), None) => Ok(Some(a.clone())),
        (None, Some(b)) => Ok(Some(b.clone())),
        (Some(a), Some(b)) => pair_sym_difference(a, b).map(Some),
    }
}

fn pair_sym_difference(a: &Geometry<f64>, b: &Geometry<f64>) -> GeomResult<Geometry<f64>> {
    ensure_valid(a, "old")?;
    ensure_valid(b, "new")?;

    if let (Some(pa), Some(pb)) = (as_areal(a), as_areal(b)) {
        return Ok(Geometry::MultiPolygon(pa.xor(&pb)));
    }
    if let (Some(pa), Some(pb)) = (as_puntal(a), as_puntal(b)) {
        return Ok(Geometry::MultiPoint(point_set_xor(&pa, &pb)));
    }
    Err(GeomError::UnsupportedSymDifference {
        left: GeometryKind::of(a),
        right: GeometryKind::of(b),
    })
}

fn as_areal(g: &Geometry<f64>) -> Option<MultiPolygon<f64>> {
    match g {
        Geometry::Polygon(p) => Some(MultiPolygon::new(vec![p.clone()])),
        Geometry::MultiPolygon(mp) => Some(mp.clone()),
        Geometry::Rect(r) => Some(MultiPolygon::new(vec![r.to_polygon()])),
        Geometry::Triangle(t) => Some(MultiPolygon::new(vec![t.to_polygon()])),
        _ => None,
    }
}

fn as_puntal(g: &Geometry<f64>) -> Option<Vec<Point<f64>>> {
    match g {
        Geometry::Point(p) => Some(vec![*p]),
        Geometry::MultiPoint(mp) => Some(mp.0.clone()),
        _ => None,
    }
}

fn point_set_xor(a: &[Point<f64>], b: &[Point<f64>]) -> MultiPoint<f64> {
    let mut out: Vec<Point<f64>> = Vec::new();
    for p in a {
        if !b.contains(p) && !out.contains(p) {
            out.push(*p);
        }
    }
    for p in b {
        if !a.contains(p) && !out.contains(p) {
            out.push(*p);
        }
    }
    MultiPoint::new(out)
}
