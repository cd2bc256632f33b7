//! Spherical geodesy primitives
//!
//! Direct problem: given a start point, a bearing, and a ground distance,
//! find the destination point. Inverse problem: given two points, find the
//! great-circle distance and the initial bearing between them. Both model
//! the earth as a sphere of fixed mean radius, which is sufficient for the
//! hull-scale distances this engine works with.

use crate::core::{Bearing, GeoPoint, EARTH_RADIUS_M};

/// Destination-point calculator on a sphere of configurable radius.
///
/// Pure and stateless: every method is a function of its inputs and the
/// radius field, so a shared instance can be used from any thread. An
/// ellipsoidal model (e.g. Vincenty) could replace `travel` without
/// changing any caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicTraveler {
    /// Sphere radius used for all angular-distance conversions (meters)
    pub earth_radius_m: f64,
}

impl Default for GeodesicTraveler {
    fn default() -> Self {
        Self {
            earth_radius_m: EARTH_RADIUS_M,
        }
    }
}

impl GeodesicTraveler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_radius(earth_radius_m: f64) -> Self {
        Self { earth_radius_m }
    }

    /// Point reached by traveling `distance_m` along `bearing` from `start`.
    ///
    /// Total over finite inputs; zero distance returns the start point to
    /// floating-point tolerance and NaN inputs propagate untrapped. The
    /// resulting longitude is normalized into `[-180, 180)`.
    pub fn travel(&self, start: GeoPoint, bearing: Bearing, distance_m: f64) -> GeoPoint {
        let lat1 = start.lat.to_radians();
        let lon1 = start.lon.to_radians();
        let theta = bearing.to_radians();
        let delta = distance_m / self.earth_radius_m;

        let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
        let lon2 = lon1
            + (theta.sin() * delta.sin() * lat1.cos())
                .atan2(delta.cos() - lat1.sin() * lat2.sin());

        GeoPoint {
            lat: lat2.to_degrees(),
            lon: normalize_longitude(lon2.to_degrees()),
        }
    }

    /// Great-circle distance between two points (haversine, meters).
    pub fn distance_between(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        let lat1 = a.lat.to_radians();
        let lat2 = b.lat.to_radians();
        let dlat = (b.lat - a.lat).to_radians();
        let dlon = (b.lon - a.lon).to_radians();

        let h = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * self.earth_radius_m * h.sqrt().asin()
    }

    /// Initial bearing of the great circle from `a` toward `b`.
    pub fn initial_bearing(&self, a: GeoPoint, b: GeoPoint) -> Bearing {
        let lat1 = a.lat.to_radians();
        let lat2 = b.lat.to_radians();
        let dlon = (b.lon - a.lon).to_radians();

        let y = dlon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
        Bearing::new(y.atan2(x).to_degrees())
    }
}

/// Normalize a longitude in degrees into `[-180, 180)`.
pub fn normalize_longitude(lon_deg: f64) -> f64 {
    let normalized = (lon_deg + 180.0).rem_euclid(360.0) - 180.0;
    if normalized >= 180.0 {
        -180.0
    } else {
        normalized
    }
}

/// Destination point on the default mean-radius sphere.
pub fn travel(start: GeoPoint, bearing: Bearing, distance_m: f64) -> GeoPoint {
    GeodesicTraveler::new().travel(start, bearing, distance_m)
}
