//! Core geolocation algorithms

pub mod footprint;
pub mod traveler;

pub use footprint::{compute_footprint, FootprintComputer};
pub use traveler::{travel, GeodesicTraveler};
