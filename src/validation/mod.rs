//! Input validation for the footprint engine

pub mod input;

pub use input::{validate_heading, validate_offsets, validate_point, InputError};
