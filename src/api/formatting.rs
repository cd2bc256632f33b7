//! Footprint output formatting
//!
//! Renders a computed footprint for the consuming layer: a human-readable
//! text block, JSON for machine consumers, or CSV rows for spreadsheet
//! export.

use serde::{Deserialize, Serialize};

use crate::core::Footprint;

/// Labels for the five output points, in perimeter order plus the antenna.
const POINT_LABELS: [&str; 5] = ["aft_left", "aft_right", "fore_right", "fore_left", "antenna"];

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable multi-line text
    Text,
    /// JSON object with corners and antenna
    Json,
    /// CSV rows of `label,latitude_deg,longitude_deg`
    Csv,
}

/// Formats footprints with configurable coordinate precision
#[derive(Debug, Clone, Copy)]
pub struct FootprintFormatter {
    /// Decimal places for coordinate values in text and CSV output
    pub precision: u8,
}

impl Default for FootprintFormatter {
    fn default() -> Self {
        Self { precision: 6 }
    }
}

impl FootprintFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(precision: u8) -> Self {
        Self { precision }
    }

    /// Render `footprint` in the requested format.
    pub fn format(&self, footprint: &Footprint, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.format_text(footprint)),
            OutputFormat::Json => serde_json::to_string_pretty(footprint),
            OutputFormat::Csv => Ok(self.format_csv(footprint)),
        }
    }

    fn labeled_points(footprint: &Footprint) -> impl Iterator<Item = (&'static str, crate::core::GeoPoint)> + '_ {
        footprint
            .corners
            .iter()
            .copied()
            .chain(std::iter::once(footprint.antenna))
            .zip(POINT_LABELS)
            .map(|(point, label)| (label, point))
    }

    fn format_text(&self, footprint: &Footprint) -> String {
        let precision = self.precision as usize;
        let mut out = String::from("Vessel footprint:\n");
        for (label, point) in Self::labeled_points(footprint) {
            out.push_str(&format!(
                "  {:<10} {:.p$}, {:.p$}\n",
                label,
                point.lat,
                point.lon,
                p = precision
            ));
        }
        out
    }

    fn format_csv(&self, footprint: &Footprint) -> String {
        let precision = self.precision as usize;
        let mut out = String::from("label,latitude_deg,longitude_deg\n");
        for (label, point) in Self::labeled_points(footprint) {
            out.push_str(&format!(
                "{},{:.p$},{:.p$}\n",
                label,
                point.lat,
                point.lon,
                p = precision
            ));
        }
        out
    }
}
