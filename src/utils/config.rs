//! Engine configuration
//!
//! JSON-backed settings for the footprint engine: the sphere radius used
//! by the geodesy primitives, the sanity bound applied to user-entered
//! offsets, and the precision of formatted output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::EARTH_RADIUS_M;

/// Engine-wide configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Sphere radius for geodesic computations (meters)
    pub earth_radius_m: f64,
    /// Upper sanity bound for a single edge offset (meters)
    pub max_offset_m: f64,
    /// Decimal places for formatted coordinate output
    pub output_precision: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            earth_radius_m: EARTH_RADIUS_M,
            // Larger than any real vessel; catches unit mistakes (e.g. mm)
            max_offset_m: 10_000.0,
            output_precision: 6,
        }
    }
}

/// Configuration loading and validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    IoError {
        message: String,
    },
    SerializationError {
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter { parameter, value, reason } => {
                write!(f, "Invalid parameter '{}' = '{}': {}", parameter, value, reason)
            }
            ConfigError::IoError { message } => write!(f, "I/O error: {}", message),
            ConfigError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl EngineConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: EngineConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to serialize config: {}", e),
            })?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })
    }

    /// Check every parameter against its valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.earth_radius_m.is_finite() || self.earth_radius_m <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "earth_radius_m".to_string(),
                value: self.earth_radius_m.to_string(),
                reason: "Sphere radius must be a positive finite number".to_string(),
            });
        }

        if !self.max_offset_m.is_finite() || self.max_offset_m <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "max_offset_m".to_string(),
                value: self.max_offset_m.to_string(),
                reason: "Offset limit must be a positive finite number".to_string(),
            });
        }

        if self.output_precision > 12 {
            return Err(ConfigError::InvalidParameter {
                parameter: "output_precision".to_string(),
                value: self.output_precision.to_string(),
                reason: "More than 12 decimal places exceeds f64 precision".to_string(),
            });
        }

        Ok(())
    }
}
