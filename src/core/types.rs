//! Core data types for the footprint geolocation engine

use serde::{Deserialize, Serialize};

/// Geographic point in geodetic coordinates (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Compass bearing in degrees, 0 = north, increasing clockwise.
///
/// The canonical representation is normalized into `[0, 360)`. Any
/// arithmetic on a bearing re-normalizes, so sums and differences of
/// headings stay in range. NaN input stays NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bearing {
    degrees: f64,
}

impl Bearing {
    /// Create a bearing from any real heading, normalized into `[0, 360)`.
    pub fn new(degrees: f64) -> Self {
        let normalized = degrees.rem_euclid(360.0);
        // rem_euclid of a tiny negative value can round up to exactly 360.0
        let degrees = if normalized >= 360.0 { 0.0 } else { normalized };
        Self { degrees }
    }

    /// Normalized heading in degrees, in `[0, 360)`.
    pub fn degrees(self) -> f64 {
        self.degrees
    }

    pub fn to_radians(self) -> f64 {
        self.degrees.to_radians()
    }

    /// Bearing rotated by `delta_deg` (clockwise positive), re-normalized.
    pub fn rotated(self, delta_deg: f64) -> Self {
        Self::new(self.degrees + delta_deg)
    }

    /// Bearing pointing the opposite way.
    pub fn reversed(self) -> Self {
        self.rotated(180.0)
    }
}

/// Ground distances in meters from the antenna reference point to each
/// hull edge, measured along the heading axis (front/back) and its
/// perpendicular (left/right). All four are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VesselOffsets {
    pub front_m: f64,
    pub back_m: f64,
    pub left_m: f64,
    pub right_m: f64,
}

impl VesselOffsets {
    pub fn new(front_m: f64, back_m: f64, left_m: f64, right_m: f64) -> Self {
        Self {
            front_m,
            back_m,
            left_m,
            right_m,
        }
    }

    /// Overall hull length (meters).
    pub fn length_m(&self) -> f64 {
        self.front_m + self.back_m
    }

    /// Overall hull beam (meters).
    pub fn beam_m(&self) -> f64 {
        self.left_m + self.right_m
    }
}

/// Rectangular hull footprint on the earth's surface.
///
/// Corners trace the rectangle perimeter without self-intersection, in the
/// order aft-left, aft-right, fore-right, fore-left relative to the
/// vessel's heading. The antenna point is a separate marker and is not
/// part of the polygon perimeter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub corners: [GeoPoint; 4],
    pub antenna: GeoPoint,
}

impl Footprint {
    pub fn aft_left(&self) -> GeoPoint {
        self.corners[0]
    }

    pub fn aft_right(&self) -> GeoPoint {
        self.corners[1]
    }

    pub fn fore_right(&self) -> GeoPoint {
        self.corners[2]
    }

    pub fn fore_left(&self) -> GeoPoint {
        self.corners[3]
    }

    /// Corner sequence for polygon rendering.
    pub fn perimeter(&self) -> &[GeoPoint; 4] {
        &self.corners
    }
}
