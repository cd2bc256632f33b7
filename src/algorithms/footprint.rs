//! Hull footprint derivation
//!
//! Turns an antenna position, a vessel heading, and four edge offsets into
//! the four corner points of the rectangular hull. The antenna is not
//! assumed to be centered on the hull, so every corner gets its own
//! bearing and distance from the pair of offsets bounding it.

use nalgebra::Vector2;

use crate::algorithms::traveler::GeodesicTraveler;
use crate::core::{Bearing, Footprint, GeoPoint, VesselOffsets};

/// Per-corner derivation table: longitudinal/lateral offset selectors, the
/// base bearing relative to the heading, and the rotation direction of the
/// angle increment (positive = clockwise). Order matches the perimeter
/// order of [`Footprint::corners`]: aft-left, aft-right, fore-right,
/// fore-left.
const CORNER_TABLE: [(OffsetAxis, OffsetAxis, f64, f64); 4] = [
    (OffsetAxis::Back, OffsetAxis::Left, 180.0, 1.0),
    (OffsetAxis::Back, OffsetAxis::Right, 180.0, -1.0),
    (OffsetAxis::Front, OffsetAxis::Right, 0.0, 1.0),
    (OffsetAxis::Front, OffsetAxis::Left, 0.0, -1.0),
];

#[derive(Debug, Clone, Copy)]
enum OffsetAxis {
    Front,
    Back,
    Left,
    Right,
}

impl OffsetAxis {
    fn select(self, offsets: &VesselOffsets) -> f64 {
        match self {
            OffsetAxis::Front => offsets.front_m,
            OffsetAxis::Back => offsets.back_m,
            OffsetAxis::Left => offsets.left_m,
            OffsetAxis::Right => offsets.right_m,
        }
    }
}

/// Computes rectangular hull footprints from antenna-relative offsets.
///
/// Pure and stateless apart from the traveler's sphere radius; safe to
/// share across threads. Inputs are expected to be validated by the caller
/// (see [`crate::validation`]); non-finite values propagate into the
/// output rather than being trapped here.
#[derive(Debug, Clone, Copy, Default)]
pub struct FootprintComputer {
    pub traveler: GeodesicTraveler,
}

impl FootprintComputer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_traveler(traveler: GeodesicTraveler) -> Self {
        Self { traveler }
    }

    /// Compute the four hull corners around `antenna` for a vessel on
    /// `heading` with the given edge offsets.
    ///
    /// Each corner lies at the hypotenuse distance of its two bounding
    /// offsets, along the base bearing rotated toward the corner's lateral
    /// side by `atan(lateral / longitudinal)`. A zero longitudinal offset
    /// puts the corner directly abeam, so the increment is pinned at 90°
    /// by an explicit branch instead of leaning on division-by-zero
    /// behavior.
    pub fn compute(
        &self,
        antenna: GeoPoint,
        heading: Bearing,
        offsets: &VesselOffsets,
    ) -> Footprint {
        let corners = CORNER_TABLE.map(|(longitudinal, lateral, base_deg, sign)| {
            let longitudinal = longitudinal.select(offsets);
            let lateral = lateral.select(offsets);

            let increment_deg = if longitudinal == 0.0 {
                90.0
            } else {
                (lateral / longitudinal).atan().to_degrees()
            };

            let corner_bearing = heading.rotated(base_deg + sign * increment_deg);
            let corner_distance = Vector2::new(longitudinal, lateral).norm();

            self.traveler.travel(antenna, corner_bearing, corner_distance)
        });

        Footprint { corners, antenna }
    }
}

/// Compute a footprint on the default mean-radius sphere.
pub fn compute_footprint(antenna: GeoPoint, heading: Bearing, offsets: &VesselOffsets) -> Footprint {
    FootprintComputer::new().compute(antenna, heading, offsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traveler() -> GeodesicTraveler {
        GeodesicTraveler::new()
    }

    /// Angular difference in degrees, folded into [0, 180].
    fn bearing_diff(a: f64, b: f64) -> f64 {
        let diff = (a - b).rem_euclid(360.0);
        diff.min(360.0 - diff)
    }

    #[test]
    fn test_symmetric_vessel_heading_north() {
        let antenna = GeoPoint::new(0.0, 0.0);
        let offsets = VesselOffsets::new(100.0, 100.0, 50.0, 50.0);
        let footprint = compute_footprint(antenna, Bearing::new(0.0), &offsets);

        let expected_distance = (100.0_f64.powi(2) + 50.0_f64.powi(2)).sqrt();
        let expected_bearings = [
            180.0 + 26.565051177077994, // aft-left
            180.0 - 26.565051177077994, // aft-right
            26.565051177077994,         // fore-right
            360.0 - 26.565051177077994, // fore-left
        ];

        for (i, corner) in footprint.corners.iter().enumerate() {
            let distance = traveler().distance_between(antenna, *corner);
            assert!(
                (distance - expected_distance).abs() < 1e-3,
                "corner {}: distance {} vs expected {}",
                i,
                distance,
                expected_distance
            );

            let bearing = traveler().initial_bearing(antenna, *corner).degrees();
            assert!(
                bearing_diff(bearing, expected_bearings[i]) < 1e-6,
                "corner {}: bearing {} vs expected {}",
                i,
                bearing,
                expected_bearings[i]
            );
        }

        assert_eq!(footprint.antenna, antenna);
    }

    #[test]
    fn test_zero_longitudinal_offset_is_not_an_error() {
        let antenna = GeoPoint::new(0.0, 0.0);
        let heading = Bearing::new(40.0);
        let offsets = VesselOffsets::new(0.0, 10.0, 5.0, 5.0);
        let footprint = compute_footprint(antenna, heading, &offsets);

        // Fore corners sit directly abeam: heading +/- 90 degrees at the
        // lateral offset distance.
        let fore_right = footprint.fore_right();
        let fore_left = footprint.fore_left();

        let right_bearing = traveler().initial_bearing(antenna, fore_right).degrees();
        let left_bearing = traveler().initial_bearing(antenna, fore_left).degrees();
        assert!(bearing_diff(right_bearing, 130.0) < 1e-6);
        assert!(bearing_diff(left_bearing, 310.0) < 1e-6);

        assert!((traveler().distance_between(antenna, fore_right) - 5.0).abs() < 1e-6);
        assert!((traveler().distance_between(antenna, fore_left) - 5.0).abs() < 1e-6);

        for corner in footprint.corners {
            assert!(corner.lat.is_finite() && corner.lon.is_finite());
        }
    }

    #[test]
    fn test_heading_reversal_maps_opposite_corners() {
        let antenna = GeoPoint::new(0.0, 0.0);
        let offsets = VesselOffsets::new(80.0, 80.0, 30.0, 30.0);

        let forward = compute_footprint(antenna, Bearing::new(25.0), &offsets);
        let reversed = compute_footprint(antenna, Bearing::new(25.0).reversed(), &offsets);

        // A 180 degree rotation of a symmetric hull maps corner i to
        // corner (i + 2) mod 4.
        for i in 0..4 {
            let a = forward.corners[i];
            let b = reversed.corners[(i + 2) % 4];
            assert!(
                (a.lat - b.lat).abs() < 1e-9 && (a.lon - b.lon).abs() < 1e-9,
                "corner {} did not map to its opposite: {:?} vs {:?}",
                i,
                a,
                b
            );
        }
    }

    #[test]
    fn test_asymmetric_antenna_placement() {
        // Antenna far aft and to port: fore corners are much farther away
        // than aft corners.
        let antenna = GeoPoint::new(55.0, 12.5);
        let offsets = VesselOffsets::new(150.0, 20.0, 8.0, 22.0);
        let footprint = compute_footprint(antenna, Bearing::new(315.0), &offsets);

        let t = traveler();
        let fore_right = t.distance_between(antenna, footprint.fore_right());
        let aft_right = t.distance_between(antenna, footprint.aft_right());
        assert!(fore_right > aft_right);

        let expected_fore_right = (150.0_f64.powi(2) + 22.0_f64.powi(2)).sqrt();
        assert!((fore_right - expected_fore_right).abs() < 1e-3);

        let expected_aft_left = (20.0_f64.powi(2) + 8.0_f64.powi(2)).sqrt();
        let aft_left = t.distance_between(antenna, footprint.aft_left());
        assert!((aft_left - expected_aft_left).abs() < 1e-3);
    }

    #[test]
    fn test_corner_bearings_stay_normalized() {
        let antenna = GeoPoint::new(-10.0, 30.0);
        let offsets = VesselOffsets::new(60.0, 40.0, 12.0, 12.0);
        // Headings chosen so corner bearings cross both 0 and 360
        for heading in [-350.0, -10.0, 5.0, 355.0, 719.0] {
            let footprint = compute_footprint(antenna, Bearing::new(heading), &offsets);
            for corner in footprint.corners {
                assert!(corner.lat.is_finite() && corner.lon.is_finite());
                assert!(corner.lon >= -180.0 && corner.lon < 180.0);
            }
        }
    }

    #[test]
    fn test_all_zero_offsets_collapse_to_antenna() {
        let antenna = GeoPoint::new(1.0, 2.0);
        let offsets = VesselOffsets::new(0.0, 0.0, 0.0, 0.0);
        let footprint = compute_footprint(antenna, Bearing::new(90.0), &offsets);
        for corner in footprint.corners {
            assert!((corner.lat - antenna.lat).abs() < 1e-9);
            assert!((corner.lon - antenna.lon).abs() < 1e-9);
        }
    }

    #[test]
    fn test_idempotence() {
        let antenna = GeoPoint::new(43.3, 5.37);
        let offsets = VesselOffsets::new(90.0, 30.0, 15.0, 15.0);
        let first = compute_footprint(antenna, Bearing::new(200.0), &offsets);
        let second = compute_footprint(antenna, Bearing::new(200.0), &offsets);
        assert_eq!(first, second);
    }

    #[test]
    fn test_nan_offset_propagates() {
        let antenna = GeoPoint::new(0.0, 0.0);
        let offsets = VesselOffsets::new(f64::NAN, 10.0, 5.0, 5.0);
        let footprint = compute_footprint(antenna, Bearing::new(0.0), &offsets);
        assert!(footprint.fore_right().lat.is_nan() || footprint.fore_right().lon.is_nan());
    }
}
