use std::fmt;

use geo_types::Geometry;

/// Coarse geometry type tag, used for layer metadata and error messages.
///
/// Degenerate areal shapes (`Rect`, `Triangle`) report as `Polygon`, and a
/// bare `Line` segment reports as `LineString`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    /// The kind of a concrete geometry value.
    pub fn of(geometry: &Geometry<f64>) -> Self {
        match geometry {
            Geometry::Point(_) => Self::Point,
            Geometry::MultiPoint(_) => Self::MultiPoint,
            Geometry::Line(_) | Geometry::LineString(_) => Self::LineString,
            Geometry::MultiLineString(_) => Self::MultiLineString,
            Geometry::Polygon(_) | Geometry::Rect(_) | Geometry::Triangle(_) => Self::Polygon,
            Geometry::MultiPolygon(_) => Self::MultiPolygon,
            Geometry::GeometryCollection(_) => Self::GeometryCollection,
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point => write!(f, "Point"),
            Self::MultiPoint => write!(f, "MultiPoint"),
            Self::LineString => write!(f, "LineString"),
            Self::MultiLineString => write!(f, "MultiLineString"),
            Self::Polygon => write!(f, "Polygon"),
            Self::MultiPolygon => write!(f, "MultiPolygon"),
            Self::GeometryCollection => write!(f, "GeometryCollection"),
        }
    }
}
