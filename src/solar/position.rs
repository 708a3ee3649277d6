//! Apparent position of the sun in the local sky.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use super::coordinate::GeoCoordinate;
use super::ephemeris::{days_since_j2000, sidereal_time, sun_coordinates};
use crate::constants::RAD_TO_DEG;

/// Sun direction in degrees.
///
/// Azimuth is measured clockwise from North (0° to 360°); altitude is the
/// geometric elevation of the sun's center above the horizon, without refraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunPosition {
    pub azimuth: f64,
    pub altitude: f64,
}

impl SunPosition {
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

pub fn get_sun_position<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> SunPosition {
    let coordinate = GeoCoordinate::new_unchecked(latitude, longitude);
    let lw = coordinate.longitude_west_radians();
    let phi = coordinate.latitude_radians();
    let d = days_since_j2000(instant);

    let (dec, ra) = sun_coordinates(d);
    let h = sidereal_time(d, lw) - ra;

    // Azimuth from this formula is measured from South, westward positive.
    let azimuth = h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos());
    let altitude = (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin();

    SunPosition {
        azimuth: (azimuth * RAD_TO_DEG + 180.0).rem_euclid(360.0),
        altitude: altitude * RAD_TO_DEG,
    }
}
