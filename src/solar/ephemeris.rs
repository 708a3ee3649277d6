//! Low-precision solar ephemeris.
//!
//! A mean-anomaly / ecliptic-longitude / declination pipeline accurate to a few
//! arc-minutes, which is enough for civil sunrise and sunset but not for a
//! precision almanac. All angles are radians; degree constants are converted at
//! the point of use.

use chrono::{DateTime, TimeZone, Utc};
use std::f64::consts::{PI, TAU};

use crate::constants::*;

/// Convert an instant to a continuous Julian Day count.
pub fn julian_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    instant.timestamp_millis() as f64 / MILLIS_PER_DAY - 0.5 + J1970
}

/// Convert a Julian Day count back to a UTC instant, rounded to the millisecond.
///
/// Non-finite input maps to the Unix epoch. It is only reachable from NaN
/// coordinates, which [`GeoCoordinate::new`](super::GeoCoordinate::new) rejects.
pub fn from_julian_day(julian_day: f64) -> DateTime<Utc> {
    let millis = ((julian_day + 0.5 - J1970) * MILLIS_PER_DAY).round() as i64;
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default()
}

/// Days elapsed since the J2000.0 epoch.
pub fn days_since_j2000<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    julian_day(instant) - J2000
}

pub fn solar_mean_anomaly(days: f64) -> f64 {
    (MEAN_ANOMALY_AT_EPOCH + MEAN_ANOMALY_RATE * days) * DEG_TO_RAD
}

/// Three-term correction from mean to true anomaly.
pub fn equation_of_center(mean_anomaly: f64) -> f64 {
    let m = mean_anomaly;
    (CENTER_C1 * m.sin() + CENTER_C2 * (2.0 * m).sin() + CENTER_C3 * (3.0 * m).sin()) * DEG_TO_RAD
}

pub fn ecliptic_longitude(mean_anomaly: f64) -> f64 {
    mean_anomaly + equation_of_center(mean_anomaly) + PERIHELION_LONGITUDE * DEG_TO_RAD + PI
}

pub fn solar_declination(ecliptic_longitude: f64) -> f64 {
    (ecliptic_longitude.sin() * (OBLIQUITY * DEG_TO_RAD).sin()).asin()
}

pub fn right_ascension(ecliptic_longitude: f64) -> f64 {
    let l = ecliptic_longitude;
    (l.sin() * (OBLIQUITY * DEG_TO_RAD).cos()).atan2(l.cos())
}

/// Local sidereal time for a longitude given westward in radians.
pub fn sidereal_time(days: f64, longitude_west: f64) -> f64 {
    (SIDEREAL_TIME_AT_EPOCH + SIDEREAL_TIME_RATE * days) * DEG_TO_RAD - longitude_west
}

/// Equatorial coordinates of the sun: `(declination, right_ascension)`.
pub fn sun_coordinates(days: f64) -> (f64, f64) {
    let l = ecliptic_longitude(solar_mean_anomaly(days));
    (solar_declination(l), right_ascension(l))
}

/// Hour angle at which the sun's center reaches `altitude_degrees`.
///
/// Returns `None` when the sun never reaches that altitude on this day
/// (`cos H > 1`) or never drops below it (`cos H < -1`).
pub fn hour_angle(altitude_degrees: f64, latitude: f64, declination: f64) -> Option<f64> {
    let cos_h = ((altitude_degrees * DEG_TO_RAD).sin() - latitude.sin() * declination.sin())
        / (latitude.cos() * declination.cos());

    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }
    Some(cos_h.acos())
}

/// Index of the solar transit nearest to `days` for the given west longitude.
pub(crate) fn julian_cycle(days: f64, longitude_west: f64) -> f64 {
    (days - TRANSIT_J0 - longitude_west / TAU).round()
}

/// Julian Day at which the sun is `hour_angle` past transit in cycle `cycle`.
///
/// With an hour angle of zero this is solar noon.
pub(crate) fn transit_julian_day(
    cycle: f64,
    longitude_west: f64,
    hour_angle: f64,
    mean_anomaly: f64,
    ecliptic_longitude: f64,
) -> f64 {
    let approx = TRANSIT_J0 + (hour_angle + longitude_west) / TAU;
    J2000 + cycle + approx + TRANSIT_MEAN_ANOMALY_TERM * mean_anomaly.sin()
        - TRANSIT_ECLIPTIC_TERM * (2.0 * ecliptic_longitude).sin()
}
