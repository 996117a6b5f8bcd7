//! Snapping stops onto a route.
//!
//! The map draws a short connector from each fuel stop to the route line.
//! This module decodes the route geometry once and finds, for every stop,
//! the nearest point on the route plus how far off-route the stop is.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::haversine::haversine_miles;
use crate::nearest::nearest;
use crate::polyline::{Polyline, RouteGeometry};
use crate::LngLat;

#[derive(Debug, Clone)]
pub struct ConnectorOptions {
    /// Stop count at which snapping switches to the rayon pool.
    pub parallel_threshold: usize,
    /// Skip stops without a location instead of failing.
    pub skip_unmatched: bool,
}

impl Default for ConnectorOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 256,
            skip_unmatched: true,
        }
    }
}

/// A stop joined to its nearest point on the route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    /// Position of the stop in the caller's list.
    pub stop_index: usize,
    pub stop: LngLat,
    pub on_route: LngLat,
    /// Great-circle distance from the stop to `on_route`.
    pub offset_miles: f64,
}

impl Connector {
    /// The connector as a two-point line, stop first.
    pub fn line(&self) -> [LngLat; 2] {
        [self.stop, self.on_route]
    }
}

/// Decode `geometry` and snap every stop onto it.
pub fn connect(
    geometry: &RouteGeometry,
    stops: &[Option<LngLat>],
    options: &ConnectorOptions,
) -> Result<Vec<Connector>> {
    let route = geometry.decode()?;
    snap_stops(&route, stops, options)
}

/// Snap every stop onto an already decoded route.
///
/// Output follows stop order regardless of whether the parallel path is
/// taken, and the first failing stop (by index) determines the error.
pub fn snap_stops(
    route: &Polyline,
    stops: &[Option<LngLat>],
    options: &ConnectorOptions,
) -> Result<Vec<Connector>> {
    let line = route.points();
    let parallel = stops.len() >= options.parallel_threshold;
    tracing::debug!(
        stops = stops.len(),
        route_points = line.len(),
        parallel,
        "snapping stops to route"
    );

    let snapped: Vec<Option<Result<Connector>>> = if parallel {
        stops
            .par_iter()
            .enumerate()
            .map(|(index, stop)| snap_one(line, index, *stop, options.skip_unmatched))
            .collect()
    } else {
        stops
            .iter()
            .enumerate()
            .map(|(index, stop)| snap_one(line, index, *stop, options.skip_unmatched))
            .collect()
    };

    snapped.into_iter().flatten().collect()
}

fn snap_one(
    line: &[LngLat],
    index: usize,
    stop: Option<LngLat>,
    skip_unmatched: bool,
) -> Option<Result<Connector>> {
    let Some(stop) = stop else {
        if skip_unmatched {
            tracing::trace!(index, "skipping stop without location");
            return None;
        }
        return Some(Err(GeometryError::MissingStopLocation { index }));
    };

    Some(nearest(stop, line).map(|on_route| Connector {
        stop_index: index,
        stop,
        on_route,
        offset_miles: haversine_miles(stop, on_route),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polyline {
        Polyline::new(vec![(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)])
    }

    #[test]
    fn test_snap_stops_in_order() {
        let stops = [Some((2.5, 2.5)), Some((6.0, 3.0))];
        let connectors = snap_stops(&square(), &stops, &ConnectorOptions::default()).unwrap();

        assert_eq!(connectors.len(), 2);
        assert_eq!(connectors[0].stop_index, 0);
        assert_eq!(connectors[0].on_route, (2.5, 0.0));
        assert_eq!(connectors[1].stop_index, 1);
        assert_eq!(connectors[1].on_route, (5.0, 3.0));
        assert_eq!(connectors[1].line(), [(6.0, 3.0), (5.0, 3.0)]);
    }

    #[test]
    fn test_offset_is_zero_for_stop_on_route() {
        let connectors =
            snap_stops(&square(), &[Some((5.0, 1.0))], &ConnectorOptions::default()).unwrap();
        assert_eq!(connectors[0].offset_miles, 0.0);
    }

    #[test]
    fn test_skips_stops_without_location() {
        let stops = [None, Some((2.5, -1.0))];
        let connectors = snap_stops(&square(), &stops, &ConnectorOptions::default()).unwrap();
        assert_eq!(connectors.len(), 1);
        assert_eq!(connectors[0].stop_index, 1);
    }

    #[test]
    fn test_rejects_stops_without_location_when_strict() {
        let options = ConnectorOptions {
            skip_unmatched: false,
            ..ConnectorOptions::default()
        };
        let stops = [Some((1.0, 1.0)), None, None];
        assert_eq!(
            snap_stops(&square(), &stops, &options),
            Err(GeometryError::MissingStopLocation { index: 1 })
        );
    }

    #[test]
    fn test_empty_route_with_stops_fails() {
        let result = snap_stops(
            &Polyline::default(),
            &[Some((1.0, 1.0))],
            &ConnectorOptions::default(),
        );
        assert_eq!(result, Err(GeometryError::EmptyLine));
    }

    #[test]
    fn test_no_stops() {
        let connectors = snap_stops(&Polyline::default(), &[], &ConnectorOptions::default()).unwrap();
        assert!(connectors.is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let stops: Vec<Option<LngLat>> = (0..50i32)
            .map(|i| {
                if i % 7 == 0 {
                    None
                } else {
                    Some((f64::from(i) * 0.13 - 1.0, f64::from(i % 11) * 0.6 - 0.5))
                }
            })
            .collect();

        let sequential = snap_stops(&square(), &stops, &ConnectorOptions::default()).unwrap();
        let parallel = snap_stops(
            &square(),
            &stops,
            &ConnectorOptions {
                parallel_threshold: 1,
                ..ConnectorOptions::default()
            },
        )
        .unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(sequential.len(), 42);
    }

    #[test]
    fn test_connect_decodes_geometry() {
        let geometry = RouteGeometry::polyline6("_p~iF~ps|U_ulLnnqC");
        let connectors =
            connect(&geometry, &[Some((-12.02, 3.85))], &ConnectorOptions::default()).unwrap();
        assert_eq!(connectors[0].on_route, (-12.02, 3.85));
        assert_eq!(connectors[0].offset_miles, 0.0);
    }

    #[test]
    fn test_connect_propagates_decode_errors() {
        let geometry = RouteGeometry::polyline6("_p~iF");
        assert_eq!(
            connect(&geometry, &[Some((0.0, 0.0))], &ConnectorOptions::default()),
            Err(GeometryError::TruncatedPolyline { offset: 5 })
        );
    }
}
