//! Great-circle distances along a route.
//!
//! Used for reporting (mile markers, stop offsets), never for the snapping
//! search itself, which stays planar.

use crate::LngLat;

/// Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3958.7613;

/// Haversine distance between two `(longitude, latitude)` points in miles.
pub fn haversine_miles(from: LngLat, to: LngLat) -> f64 {
    let (lng1, lat1) = from;
    let (lng2, lat2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_MILES * c
}

/// Total length of the path through `points`, in miles.
pub fn route_length_miles(points: &[LngLat]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine_miles(pair[0], pair[1]))
        .sum()
}
