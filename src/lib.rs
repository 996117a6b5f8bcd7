//! route-geometry
//!
//! Decoding and snapping kernel behind the route map: turns a polyline6
//! route geometry into `(longitude, latitude)` pairs and finds where a point
//! of interest meets the route.

pub mod error;
pub mod polyline;
pub mod segment;
pub mod nearest;
pub mod haversine;
pub mod route;
pub mod bounds;
pub mod connector;

pub use error::{GeometryError, Result};
pub use nearest::nearest;
pub use polyline::{decode, Polyline, RouteGeometry};
pub use segment::project;

/// A `(longitude, latitude)` pair in decimal degrees.
pub type LngLat = (f64, f64);
