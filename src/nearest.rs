//! Nearest point on a polyline.

use crate::error::{GeometryError, Result};
use crate::segment::{project, squared_distance};
use crate::LngLat;

/// Closest point to `point` on the polyline `line`.
///
/// Segments are scanned in path order and a candidate only replaces the
/// current best when it is strictly closer, so a point equidistant from two
/// segments snaps to the earlier one. A single-vertex line returns that
/// vertex; an empty line is an error.
pub fn nearest(point: LngLat, line: &[LngLat]) -> Result<LngLat> {
    let Some(&first) = line.first() else {
        return Err(GeometryError::EmptyLine);
    };

    let mut best = first;
    let mut best_dist = f64::INFINITY;

    for pair in line.windows(2) {
        let candidate = project(point, pair[0], pair[1]);
        let dist = squared_distance(point, candidate);
        if dist < best_dist {
            best_dist = dist;
            best = candidate;
        }
    }

    Ok(best)
}
