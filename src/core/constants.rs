//! Physical constants and system parameters

/// Mean earth radius for the spherical geodesy model (meters)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
