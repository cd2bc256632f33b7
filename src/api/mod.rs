//! Synchronous API surface for the rendering/UI collaborator
//!
//! The service wires configuration, input validation, and the pure
//! geometry engine together: raw operator input goes in, a validated
//! footprint comes out, ready for registration and rendering.

pub mod formatting;

pub use formatting::{FootprintFormatter, OutputFormat};

use crate::algorithms::{FootprintComputer, GeodesicTraveler};
use crate::core::{Bearing, Footprint, GeoPoint, VesselOffsets};
use crate::utils::EngineConfig;
use crate::validation::{validate_heading, validate_offsets, validate_point, InputError};

/// Validating front door to the footprint engine.
///
/// Holds no mutable state; the computation itself is pure, so one service
/// instance can serve any number of callers.
#[derive(Debug, Clone)]
pub struct FootprintService {
    config: EngineConfig,
    computer: FootprintComputer,
}

impl Default for FootprintService {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl FootprintService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let traveler = GeodesicTraveler::with_radius(config.earth_radius_m);
        Self {
            config,
            computer: FootprintComputer::with_traveler(traveler),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate raw operator input and compute the hull footprint.
    ///
    /// The heading may be any finite real number; it is normalized into
    /// `[0, 360)` before use.
    pub fn compute(
        &self,
        antenna: GeoPoint,
        heading_deg: f64,
        offsets: VesselOffsets,
    ) -> Result<Footprint, InputError> {
        validate_point(&antenna)?;
        validate_heading(heading_deg)?;
        validate_offsets(&offsets, self.config.max_offset_m)?;

        Ok(self
            .computer
            .compute(antenna, Bearing::new(heading_deg), &offsets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_computes_footprint() {
        let service = FootprintService::new();
        let footprint = service
            .compute(
                GeoPoint::new(59.33, 18.07),
                45.0,
                VesselOffsets::new(100.0, 30.0, 12.0, 12.0),
            )
            .unwrap();
        for corner in footprint.corners {
            assert!(corner.lat.is_finite() && corner.lon.is_finite());
        }
    }

    #[test]
    fn test_invalid_antenna_rejected_before_computation() {
        let service = FootprintService::new();
        let result = service.compute(
            GeoPoint::new(f64::NAN, 0.0),
            0.0,
            VesselOffsets::new(10.0, 10.0, 5.0, 5.0),
        );
        assert!(matches!(result, Err(InputError::InvalidLatitude { .. })));
    }

    #[test]
    fn test_non_finite_heading_rejected() {
        let service = FootprintService::new();
        let result = service.compute(
            GeoPoint::new(0.0, 0.0),
            f64::INFINITY,
            VesselOffsets::new(10.0, 10.0, 5.0, 5.0),
        );
        assert!(matches!(result, Err(InputError::NonFiniteHeading { .. })));
    }

    #[test]
    fn test_offset_limit_comes_from_config() {
        let config = EngineConfig {
            max_offset_m: 50.0,
            ..EngineConfig::default()
        };
        let service = FootprintService::with_config(config);
        let result = service.compute(
            GeoPoint::new(0.0, 0.0),
            0.0,
            VesselOffsets::new(100.0, 10.0, 5.0, 5.0),
        );
        assert!(matches!(result, Err(InputError::InvalidOffset { .. })));
    }

    #[test]
    fn test_unnormalized_heading_accepted() {
        let service = FootprintService::new();
        let offsets = VesselOffsets::new(50.0, 50.0, 20.0, 20.0);
        let antenna = GeoPoint::new(10.0, 10.0);
        let wrapped = service.compute(antenna, 725.0, offsets).unwrap();
        let canonical = service.compute(antenna, 5.0, offsets).unwrap();
        assert_eq!(wrapped, canonical);
    }
}
