//! Polyline6 route geometries.
//!
//! The routing backend ships route geometry as a polyline string at 1e6
//! precision: per point, a zigzag varint latitude delta followed by a
//! longitude delta, each character carrying 5 payload bits plus a
//! continuation flag. Decoding happens here, at the boundary; everything
//! downstream works on `(longitude, latitude)` pairs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::nearest::nearest;
use crate::LngLat;

/// Fixed scale of the wire format: 6 decimal digits.
const PRECISION: f64 = 1_000_000.0;

/// Offset added to every 6-bit chunk so it lands in printable ASCII.
const CHAR_OFFSET: u8 = 63;

const CONTINUATION_BIT: u64 = 0x20;
const PAYLOAD_MASK: u64 = 0x1f;

/// Decode a polyline6 string into `(longitude, latitude)` pairs.
///
/// Latitude is decoded first for each point but emitted second. The whole
/// input must be consumed; a run left open at the end of the string is
/// rejected rather than guessed at. No range validation is applied to the
/// decoded values.
pub fn decode(encoded: &str) -> Result<Vec<LngLat>> {
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;
    let mut coordinates = Vec::new();

    while index < encoded.len() {
        let delta_lat = read_delta(encoded, &mut index)?;
        lat = lat
            .checked_add(delta_lat)
            .ok_or(GeometryError::Overflow { offset: index - 1 })?;

        let delta_lng = read_delta(encoded, &mut index)?;
        lng = lng
            .checked_add(delta_lng)
            .ok_or(GeometryError::Overflow { offset: index - 1 })?;

        coordinates.push((lng as f64 / PRECISION, lat as f64 / PRECISION));
    }

    tracing::trace!(
        points = coordinates.len(),
        bytes = encoded.len(),
        "decoded polyline6"
    );
    Ok(coordinates)
}

/// Read one varint run starting at `index` and recover its signed delta.
fn read_delta(encoded: &str, index: &mut usize) -> Result<i64> {
    let bytes = encoded.as_bytes();
    let start = *index;
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(&byte) = bytes.get(*index) else {
            tracing::debug!(offset = start, "polyline ends inside a varint run");
            return Err(GeometryError::TruncatedPolyline { offset: start });
        };

        if !(CHAR_OFFSET..=CHAR_OFFSET + 63).contains(&byte) {
            // Every byte before this one was ASCII, so `index` is a char boundary.
            let found = encoded[*index..]
                .chars()
                .next()
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            tracing::debug!(offset = *index, ?found, "invalid polyline character");
            return Err(GeometryError::InvalidCharacter {
                offset: *index,
                found,
            });
        }

        let chunk = u64::from(byte - CHAR_OFFSET);
        let payload = chunk & PAYLOAD_MASK;
        if shift > 60 || (shift == 60 && payload > 0xf) {
            return Err(GeometryError::Overflow { offset: *index });
        }

        result |= payload << shift;
        shift += 5;
        *index += 1;

        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }

    let magnitude = (result >> 1) as i64;
    Ok(if result & 1 == 1 { !magnitude } else { magnitude })
}

/// A decoded route geometry.
///
/// Points are `(longitude, latitude)` in decoding order. Serializes as a
/// plain list of pairs, which is what a GeoJSON `LineString` expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<LngLat>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (longitude, latitude) tuple.
    pub fn new(points: Vec<LngLat>) -> Self {
        Self { points }
    }

    /// Decodes a polyline6 string.
    pub fn decode(encoded: &str) -> Result<Self> {
        decode(encoded).map(Self::new)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[LngLat] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<LngLat> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive vertex pairs, in path order.
    pub fn segments(&self) -> impl Iterator<Item = (LngLat, LngLat)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Closest point on this polyline to `point`.
    pub fn nearest(&self, point: LngLat) -> Result<LngLat> {
        nearest(point, &self.points)
    }
}

impl From<Vec<LngLat>> for Polyline {
    fn from(points: Vec<LngLat>) -> Self {
        Self::new(points)
    }
}

/// Geometry encodings the kernel understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    Polyline6,
}

impl FromStr for GeometryFormat {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "polyline6" => Ok(GeometryFormat::Polyline6),
            other => Err(GeometryError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// The `route` geometry object returned by the route-planning backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGeometry {
    pub geometry: String,
    pub geometry_format: String,
}

impl RouteGeometry {
    pub fn polyline6(geometry: impl Into<String>) -> Self {
        Self {
            geometry: geometry.into(),
            geometry_format: "polyline6".to_string(),
        }
    }

    /// Checks the format tag, then decodes the geometry.
    pub fn decode(&self) -> Result<Polyline> {
        match self.geometry_format.parse::<GeometryFormat>()? {
            GeometryFormat::Polyline6 => Polyline::decode(&self.geometry),
        }
    }
}
