//! Spherical-Earth geodesy for source/receptor geometry.
//!
//! Distances and bearings use the haversine / initial-bearing formulas on a
//! sphere of radius 6371.0 km. Sub-kilometre accuracy over the ranges this
//! engine cares about (< 50 km) is well within the uncertainty of the
//! dispersion model itself, so no ellipsoidal correction is applied.
//!
//! # References
//!
//! - Sinnott, R.W. (1984). "Virtues of the Haversine." Sky and Telescope, 68(2).
//! - Veness, C. "Calculate distance, bearing and more between
//!   Latitude/Longitude points." Movable Type Scripts.

use serde::{Deserialize, Serialize};

use crate::error::RiskError;

/// Mean Earth radius in meters (spherical approximation).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS84 position in decimal degrees.
///
/// Immutable value type; construct with [`GeoPoint::new`], which rejects
/// non-finite or out-of-range coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in decimal degrees, [-180, 180].
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a validated point.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidCoordinate`] if either coordinate is NaN,
    /// infinite, or outside its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, RiskError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(RiskError::InvalidCoordinate {
                field: "latitude",
                value: latitude,
            });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(RiskError::InvalidCoordinate {
                field: "longitude",
                value: longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Great-circle distance to `other` in meters (haversine formula).
    ///
    /// Symmetric, and exactly 0.0 for identical points.
    #[must_use]
    pub fn distance_m(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_M * c
    }

    /// Initial great-circle bearing toward `other`, in degrees [0, 360).
    ///
    /// The bearing from a point to itself is degenerate; it evaluates to 0.0
    /// (due north) by convention rather than being an error.
    #[must_use]
    pub fn bearing_deg(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let y = dlon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

        normalize_bearing_deg(y.atan2(x).to_degrees())
    }
}

/// Wrap an angle in degrees into [0, 360).
#[must_use]
pub fn normalize_bearing_deg(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Smallest angle between two compass directions, in degrees [0, 180].
///
/// Symmetric in its arguments and wraparound-safe: the difference between
/// 350° and 10° is 20°, not 340°.
#[must_use]
pub fn angular_difference_deg(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    diff.min(360.0 - diff)
}

/// Name of the 8-sector compass point containing `bearing_deg` (e.g. "NE").
///
/// Rendering helper for front-ends; the engine itself only works in degrees.
#[must_use]
pub fn compass_point_name(bearing_deg: f64) -> &'static str {
    const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let normalized = normalize_bearing_deg(bearing_deg);
    // Sector 0 is centered on due north, so offset by half a sector (22.5°).
    let index = (((normalized + 22.5) / 45.0).floor() as usize) % 8;
    POINTS[index]
}
