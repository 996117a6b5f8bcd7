//! Longitude/latitude bounding boxes.

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::LngLat;

/// Rough miles per degree of latitude.
const MILES_PER_DEGREE: f64 = 69.0;

/// Floor on `cos(latitude)` so longitude buffers stay finite near the poles.
const MIN_LNG_SCALE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl Bounds {
    /// Degenerate box covering a single point.
    pub fn from_point(point: LngLat) -> Self {
        Self {
            min_lng: point.0,
            min_lat: point.1,
            max_lng: point.0,
            max_lat: point.1,
        }
    }

    /// Smallest box covering every point.
    pub fn from_points(points: &[LngLat]) -> Result<Self> {
        let (&first, rest) = points.split_first().ok_or(GeometryError::EmptyRoute)?;
        Ok(rest
            .iter()
            .fold(Self::from_point(first), |bounds, &point| bounds.extend(point)))
    }

    /// Grow the box to include `point`.
    pub fn extend(self, point: LngLat) -> Self {
        Self {
            min_lng: self.min_lng.min(point.0),
            min_lat: self.min_lat.min(point.1),
            max_lng: self.max_lng.max(point.0),
            max_lat: self.max_lat.max(point.1),
        }
    }

    pub fn contains(&self, point: LngLat) -> bool {
        (self.min_lng..=self.max_lng).contains(&point.0)
            && (self.min_lat..=self.max_lat).contains(&point.1)
    }

    pub fn center(&self) -> LngLat {
        (
            (self.min_lng + self.max_lng) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// Pad the box by roughly `miles` on every side.
    ///
    /// The longitude pad is widened by `1 / cos(mid latitude)`.
    pub fn buffered(&self, miles: f64) -> Self {
        let lat_buffer = miles / MILES_PER_DEGREE;
        let mid_lat = (self.min_lat + self.max_lat) / 2.0;
        let lng_scale = mid_lat.to_radians().cos().max(MIN_LNG_SCALE);
        let lng_buffer = miles / (MILES_PER_DEGREE * lng_scale);

        Self {
            min_lng: self.min_lng - lng_buffer,
            min_lat: self.min_lat - lat_buffer,
            max_lng: self.max_lng + lng_buffer,
            max_lat: self.max_lat + lat_buffer,
        }
    }
}
