//! Coordinate-list text parsing
//!
//! Operators enter shapes as newline-separated `lat,lon` pairs. Blank
//! lines are skipped; anything else that does not parse as two in-range
//! numbers is rejected with its line number, so malformed input never
//! reaches the geometry engine as a NaN coordinate.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::GeoPoint;
use crate::validation::{validate_point, InputError};

/// Rejected coordinate-list input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParseError {
    MissingSeparator {
        line: usize,
        content: String,
    },
    UnparsableNumber {
        line: usize,
        field: String,
        content: String,
    },
    OutOfRange {
        line: usize,
        source: InputError,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingSeparator { line, content } => {
                write!(f, "Line {}: expected 'lat,lon', got '{}'", line, content)
            }
            ParseError::UnparsableNumber { line, field, content } => {
                write!(f, "Line {}: {} '{}' is not a number", line, field, content)
            }
            ParseError::OutOfRange { line, source } => {
                write!(f, "Line {}: {}", line, source)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse newline-separated `lat,lon` pairs into geographic points.
///
/// Blank lines are skipped. One resulting point means the operator drew a
/// marker; two or more, a polygon path (see [`crate::registry`]).
pub fn parse_coordinate_list(input: &str) -> Result<Vec<GeoPoint>, ParseError> {
    let mut points = Vec::new();

    for (index, raw_line) in input.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (lat_text, lon_text) = trimmed.split_once(',').ok_or_else(|| {
            ParseError::MissingSeparator {
                line,
                content: trimmed.to_string(),
            }
        })?;

        let lat = parse_field(lat_text, "latitude", line)?;
        let lon = parse_field(lon_text, "longitude", line)?;

        let point = GeoPoint::new(lat, lon);
        validate_point(&point).map_err(|source| ParseError::OutOfRange { line, source })?;
        points.push(point);
    }

    Ok(points)
}

fn parse_field(text: &str, field: &str, line: usize) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| ParseError::UnparsableNumber {
        line,
        field: field.to_string(),
        content: trimmed.to_string(),
    })?;
    // "nan" and "inf" parse successfully but are not coordinates
    if !value.is_finite() {
        return Err(ParseError::UnparsableNumber {
            line,
            field: field.to_string(),
            content: trimmed.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point() {
        let points = parse_coordinate_list("47.6, -122.3").unwrap();
        assert_eq!(points, vec![GeoPoint::new(47.6, -122.3)]);
    }

    #[test]
    fn test_polygon_path() {
        let input = "0,0\n0,1\n1,1\n1,0";
        let points = parse_coordinate_list(input).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[2], GeoPoint::new(1.0, 1.0));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let input = "\n10,20\n\n   \n30,40\n";
        let points = parse_coordinate_list(input).unwrap();
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_empty_input_yields_no_points() {
        assert!(parse_coordinate_list("").unwrap().is_empty());
        assert!(parse_coordinate_list("\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_missing_separator() {
        let err = parse_coordinate_list("10 20").unwrap_err();
        assert!(matches!(err, ParseError::MissingSeparator { line: 1, .. }));
    }

    #[test]
    fn test_unparsable_number_reports_line() {
        let err = parse_coordinate_list("10,20\nabc,30").unwrap_err();
        match err {
            ParseError::UnparsableNumber { line, field, .. } => {
                assert_eq!(line, 2);
                assert_eq!(field, "latitude");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_nan_text_rejected() {
        assert!(parse_coordinate_list("nan,0").is_err());
        assert!(parse_coordinate_list("0,inf").is_err());
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let err = parse_coordinate_list("91,0").unwrap_err();
        assert!(matches!(err, ParseError::OutOfRange { line: 1, .. }));
    }

    #[test]
    fn test_whitespace_tolerated_around_fields() {
        let points = parse_coordinate_list("  -33.86 ,  151.21  ").unwrap();
        assert_eq!(points, vec![GeoPoint::new(-33.86, 151.21)]);
    }
}
