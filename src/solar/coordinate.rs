//! Geographic coordinates for solar calculations.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// A point on Earth in decimal degrees.
///
/// Positive latitude is North, positive longitude is East.
///
/// The engine never checks the range of these values: a coordinate outside
/// [-90, 90] x [-180, 180] produces meaningless trigonometry rather than an
/// error. Callers that take coordinates from users should construct them
/// through [`GeoCoordinate::new`], which rejects out-of-range input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Create a validated coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&latitude) {
            anyhow::bail!(
                "latitude must be between {} and {} degrees (got {})",
                MINIMUM_LATITUDE,
                MAXIMUM_LATITUDE,
                latitude
            );
        }
        if !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&longitude) {
            anyhow::bail!(
                "longitude must be between {} and {} degrees (got {})",
                MINIMUM_LONGITUDE,
                MAXIMUM_LONGITUDE,
                longitude
            );
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a coordinate without range checks.
    ///
    /// Out-of-range values give meaningless angles, and NaN input can collapse
    /// event times to the Unix epoch.
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in radians (phi).
    pub fn latitude_radians(&self) -> f64 {
        self.latitude * DEG_TO_RAD
    }

    /// Longitude measured westward, in radians.
    pub fn longitude_west_radians(&self) -> f64 {
        -self.longitude * DEG_TO_RAD
    }
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.4}°{ns}, {:.4}°{ew}",
            self.latitude.abs(),
            self.longitude.abs()
        )
    }
}
