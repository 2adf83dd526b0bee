use std::fmt;

/// Spatial reference authority identifier, e.g. `EPSG:4326`.
///
/// Carried as an opaque string: the engine only propagates it from the new
/// collection to the output, it never reprojects.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpatialRef(String);

impl SpatialRef {
    /// Create a spatial reference from an authority identifier.
    pub fn new(authid: impl Into<String>) -> Self {
        Self(authid.into())
    }

    /// WGS 84 geographic coordinates, the GeoJSON default.
    pub fn wgs84() -> Self {
        Self::new("EPSG:4326")
    }

    /// The authority identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpatialRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wgs84_authid() {
        assert_eq!(SpatialRef::wgs84().as_str(), "EPSG:4326");
        assert_eq!(SpatialRef::wgs84().to_string(), "EPSG:4326");
    }

    #[test]
    fn custom_authid() {
        let srs = SpatialRef::new("EPSG:3857");
        assert_eq!(srs.as_str(), "EPSG:3857");
    }
}
