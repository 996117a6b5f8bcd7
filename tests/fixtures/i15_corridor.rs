//! I-15 southbound from the Strip towards Primm, NV.
//!
//! The geometry string is polyline6 as the routing backend returns it; the
//! decoded points are listed alongside so tests can check them exactly.

/// A named stop with coordinates.
#[derive(Debug, Clone)]
pub struct Stop {
    pub name: &'static str,
    pub lng: f64,
    pub lat: f64,
}

impl Stop {
    pub const fn new(name: &'static str, lng: f64, lat: f64) -> Self {
        Self { name, lng, lat }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lng, self.lat)
    }
}

pub const I15_GEOMETRY: &str =
    r"mlg{cA~{qtzEzvm@j}J~kv@rdG|znAfeLlnmAfk]dotBbgu@rtqB`{fAh|`Ch}oAxwyBtyiAttjF|lkA";

/// `I15_GEOMETRY` decoded, `(longitude, latitude)`.
pub const I15_POINTS: &[(f64, f64)] = &[
    (-115.172816, 36.114647),
    (-115.178934, 36.090713),
    (-115.183120, 36.062345),
    (-115.189876, 36.021450),
    (-115.205432, 35.981267),
    (-115.233210, 35.921104),
    (-115.270011, 35.862390),
    (-115.311456, 35.795873),
    (-115.349771, 35.733012),
    (-115.388906, 35.612345),
];

/// Haversine length of the corridor in miles.
pub const I15_LENGTH_MILES: f64 = 37.026;

pub const FUEL_STOPS: &[Stop] = &[
    Stop::new("Blue Diamond Rd", -115.1650, 36.0700),
    Stop::new("Sloan", -115.2210, 35.9400),
    Stop::new("Jean", -115.3600, 35.7100),
];

/// Past the southern end of the route; snaps onto the last vertex.
pub const BEYOND_END: Stop = Stop::new("Primm Valley", -115.4000, 35.6000);

/// North of the first vertex; snaps onto the start.
pub const BEFORE_START: Stop = Stop::new("Flamingo Rd", -115.1600, 36.1300);

pub fn fuel_stop_coords() -> Vec<Option<(f64, f64)>> {
    FUEL_STOPS.iter().map(|stop| Some(stop.coords())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_in_nevada() {
        for &(lng, lat) in I15_POINTS {
            assert!(lng > -116.0 && lng < -114.0);
            assert!(lat > 35.0 && lat < 37.0);
        }
    }
}
