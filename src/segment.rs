//! Closest point on a line segment.
//!
//! Longitude/latitude are treated as a flat plane. That is fine for the
//! short distances between a stop and the road it sits on; it is not a
//! geodesic projection.

use crate::LngLat;

/// Closest point to `point` on the segment `[a, b]`, clamped to its endpoints.
///
/// A degenerate segment (`a == b`) returns `a`.
pub fn project(point: LngLat, a: LngLat, b: LngLat) -> LngLat {
    let (px, py) = point;
    let (ax, ay) = a;
    let dx = b.0 - ax;
    let dy = b.1 - ay;

    if dx == 0.0 && dy == 0.0 {
        return a;
    }

    let t = ((px - ax) * dx + (py - ay) * dy) / (dx * dx + dy * dy);
    let t = t.clamp(0.0, 1.0);

    (ax + t * dx, ay + t * dy)
}

/// Squared planar distance between two points.
pub fn squared_distance(a: LngLat, b: LngLat) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    dx * dx + dy * dy
}
