//! This is a library for keeping track of georeferenced locations inside of a
//! database. Each location is a single point on the WGS 84 ellipsoid
//! (EPSG:4326), stored with a database-assigned identity.

pub mod core;
pub mod geometry;
pub mod location;

pub use crate::core::error::Error;
pub use crate::core::error::Result;
