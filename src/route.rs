//! Route thinning and mile markers.

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::haversine::haversine_miles;
use crate::LngLat;

#[derive(Debug, Clone)]
pub struct SimplifyOptions {
    /// Minimum distance between consecutive kept points, in miles.
    pub min_miles: f64,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self { min_miles: 1.0 }
    }
}

/// A route vertex with its cumulative distance from the start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MileMarker {
    pub longitude: f64,
    pub latitude: f64,
    pub mile: f64,
}

/// Drop vertices closer than `min_miles` to the last kept one.
///
/// The first point is always kept and the output always ends on the
/// original last point, so the route keeps its endpoints.
pub fn simplify(points: &[LngLat], options: &SimplifyOptions) -> Vec<LngLat> {
    let (Some(&first), Some(&last_point)) = (points.first(), points.last()) else {
        return Vec::new();
    };

    let mut simplified = vec![first];
    let mut last = first;
    for &point in &points[1..] {
        if haversine_miles(last, point) >= options.min_miles {
            simplified.push(point);
            last = point;
        }
    }

    if simplified.last() != Some(&last_point) {
        simplified.push(last_point);
    }

    tracing::debug!(
        before = points.len(),
        after = simplified.len(),
        min_miles = options.min_miles,
        "simplified route"
    );
    simplified
}

/// Cumulative haversine mileage at every vertex of the route.
pub fn mile_markers(points: &[LngLat]) -> Result<Vec<MileMarker>> {
    let Some(&first) = points.first() else {
        return Err(GeometryError::EmptyRoute);
    };

    let mut markers = Vec::with_capacity(points.len());
    let mut total = 0.0;
    let mut prev = first;
    markers.push(MileMarker {
        longitude: first.0,
        latitude: first.1,
        mile: total,
    });

    for &point in &points[1..] {
        total += haversine_miles(prev, point);
        markers.push(MileMarker {
            longitude: point.0,
            latitude: point.1,
            mile: total,
        });
        prev = point;
    }

    Ok(markers)
}
