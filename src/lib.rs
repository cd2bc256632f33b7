//! Vessel Footprint Geolocation Engine
//!
//! Computes the rectangular footprint of a vessel's hull on the earth's
//! surface from a reference antenna position, a compass heading, and four
//! edge offsets, built on a spherical destination-point primitive.

pub mod algorithms;
pub mod api;
pub mod core;
pub mod processing;
pub mod registry;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use algorithms::{compute_footprint, travel, FootprintComputer, GeodesicTraveler};
pub use api::{FootprintFormatter, FootprintService, OutputFormat};
pub use core::{Bearing, Footprint, GeoPoint, VesselOffsets, EARTH_RADIUS_M};
pub use processing::{parse_coordinate_list, ParseError};
pub use registry::{ElementRegistry, MapElement};
pub use utils::{ConfigError, EngineConfig};
pub use validation::InputError;
