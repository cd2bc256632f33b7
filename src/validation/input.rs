//! Caller-side input validation
//!
//! The geometry engine itself performs no validation and simply propagates
//! non-finite values. Everything entering it from user input goes through
//! these checks first, so a NaN or negative offset is rejected before it
//! can surface as a NaN coordinate in rendered output.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{GeoPoint, VesselOffsets};

/// Rejected user input, classified per field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputError {
    InvalidLatitude {
        value: f64,
    },
    InvalidLongitude {
        value: f64,
    },
    NonFiniteHeading {
        value: f64,
    },
    InvalidOffset {
        name: String,
        value: f64,
        reason: String,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidLatitude { value } => {
                write!(f, "Invalid latitude {}: must be finite and within [-90, 90]", value)
            }
            InputError::InvalidLongitude { value } => {
                write!(f, "Invalid longitude {}: must be finite and within [-180, 180]", value)
            }
            InputError::NonFiniteHeading { value } => {
                write!(f, "Heading {} is not a finite number", value)
            }
            InputError::InvalidOffset { name, value, reason } => {
                write!(f, "Invalid offset '{}' = {}: {}", name, value, reason)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Validate a geographic point as finite and within coordinate bounds.
pub fn validate_point(point: &GeoPoint) -> Result<(), InputError> {
    if !point.lat.is_finite() || point.lat.abs() > 90.0 {
        return Err(InputError::InvalidLatitude { value: point.lat });
    }
    if !point.lon.is_finite() || point.lon.abs() > 180.0 {
        return Err(InputError::InvalidLongitude { value: point.lon });
    }
    Ok(())
}

/// Validate a heading as finite. Any finite real is acceptable; the
/// engine normalizes it into `[0, 360)`.
pub fn validate_heading(heading_deg: f64) -> Result<(), InputError> {
    if !heading_deg.is_finite() {
        return Err(InputError::NonFiniteHeading { value: heading_deg });
    }
    Ok(())
}

/// Validate all four edge offsets as finite and non-negative, with an
/// optional upper sanity bound (meters).
pub fn validate_offsets(offsets: &VesselOffsets, max_offset_m: f64) -> Result<(), InputError> {
    let fields = [
        ("front", offsets.front_m),
        ("back", offsets.back_m),
        ("left", offsets.left_m),
        ("right", offsets.right_m),
    ];

    for (name, value) in fields {
        if !value.is_finite() {
            return Err(InputError::InvalidOffset {
                name: name.to_string(),
                value,
                reason: "offset must be a finite number".to_string(),
            });
        }
        if value < 0.0 {
            return Err(InputError::InvalidOffset {
                name: name.to_string(),
                value,
                reason: "offset must be non-negative".to_string(),
            });
        }
        if value > max_offset_m {
            return Err(InputError::InvalidOffset {
                name: name.to_string(),
                value,
                reason: format!("offset exceeds the {} m limit", max_offset_m),
            });
        }
    }

    Ok(())
}
