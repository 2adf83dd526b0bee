//! Feature collection abstraction for geodelta.
//!
//! The diff engine never talks to a host application object model. It sees
//! collections only through the [`Layer`] capability trait (read the
//! schema, iterate the records, report geometry kind and spatial
//! reference) and produces its output as a [`MemoryLayer`].
//!
//! # Key Types
//!
//! - [`Feature`] — One record: named attribute values plus an optional geometry
//! - [`Layer`] — Read-only collection capability consumed by the engine
//! - [`MemoryLayer`] — In-memory `Layer` for engine output, tests, and embedding
//! - [`SpatialRef`] — Spatial reference authority identifier (e.g. `EPSG:4326`)

pub mod feature;
pub mod memory;
pub mod srs;
pub mod traits;

pub use feature::Feature;
pub use memory::MemoryLayer;
pub use srs::SpatialRef;
pub use traits::Layer;
