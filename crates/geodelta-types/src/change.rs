use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Name of the synthetic classification field appended to the diff output
/// schema. Input collections must not already carry a field of this name.
pub const CHANGE_TYPE_FIELD: &str = "change_type";

/// Classification tag carried by every emitted diff record.
///
/// Exactly one of `Added`/`Deleted`/`Attr`/`Geom` is assigned per changed
/// key; `GeomDiff` labels the secondary symmetric-difference record emitted
/// alongside a `Geom` record, never on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// Key present only in the new collection.
    Added,
    /// Key present only in the old collection.
    Deleted,
    /// Key present in both; at least one compared attribute differs.
    Attr,
    /// Key present in both; geometries are not spatially equal.
    Geom,
    /// Synthetic record carrying the symmetric-difference geometry.
    GeomDiff,
}

impl ChangeType {
    /// All five tags, in the order the host renders them.
    pub const ALL: [ChangeType; 5] = [
        ChangeType::Added,
        ChangeType::Deleted,
        ChangeType::Attr,
        ChangeType::Geom,
        ChangeType::GeomDiff,
    ];

    /// The wire label stored in the `change_type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Deleted => "deleted",
            Self::Attr => "attr",
            Self::Geom => "geom",
            Self::GeomDiff => "geom_diff",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChangeType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "added" => Ok(Self::Added),
            "deleted" => Ok(Self::Deleted),
            "attr" => Ok(Self::Attr),
            "geom" => Ok(Self::Geom),
            "geom_diff" => Ok(Self::GeomDiff),
            other => Err(TypeError::UnknownChangeType(other.to_string())),
        }
    }
}
