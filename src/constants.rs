//! Application constants and default values.
//!
//! This module centralizes the fixed parameters of the low-precision solar model,
//! the altitude thresholds that define each sun event, and the defaults and limits
//! used by the configuration layer.

use std::f64::consts::PI;

// # Julian Day Epochs

/// Julian Day of 1970-01-01, as used by the millisecond conversion.
///
/// The conversion additionally shifts by half a day, so the effective
/// Julian Day of the Unix epoch is 2440587.5.
pub const J1970: f64 = 2_440_588.0;

/// Julian Day of the J2000.0 epoch.
pub const J2000: f64 = 2_451_545.0;

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Milliseconds in one hour.
pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

// # Angle Conversion

pub const DEG_TO_RAD: f64 = PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / PI;

// # Solar Orbital Elements (degrees)

/// Mean anomaly at J2000.
pub const MEAN_ANOMALY_AT_EPOCH: f64 = 357.5291;
/// Daily motion of the mean anomaly.
pub const MEAN_ANOMALY_RATE: f64 = 0.985_600_28;

/// Equation of center coefficients.
pub const CENTER_C1: f64 = 1.9148;
pub const CENTER_C2: f64 = 0.0200;
pub const CENTER_C3: f64 = 0.0003;

/// Longitude of perihelion.
pub const PERIHELION_LONGITUDE: f64 = 102.9372;

/// Earth's axial tilt.
pub const OBLIQUITY: f64 = 23.4397;

/// Greenwich sidereal time at J2000 and its daily rate.
pub const SIDEREAL_TIME_AT_EPOCH: f64 = 280.16;
pub const SIDEREAL_TIME_RATE: f64 = 360.985_623_5;

// # Transit Correction Terms (days)

pub const TRANSIT_J0: f64 = 0.0009;
pub const TRANSIT_MEAN_ANOMALY_TERM: f64 = 0.0053;
pub const TRANSIT_ECLIPTIC_TERM: f64 = 0.0069;

// # Altitude Thresholds (degrees of the sun's center)

/// Standard sunrise/sunset: refraction plus the solar radius.
pub const SUNRISE_SUNSET_ALTITUDE: f64 = -0.833;
pub const CIVIL_TWILIGHT_ALTITUDE: f64 = -6.0;
pub const NAUTICAL_TWILIGHT_ALTITUDE: f64 = -12.0;
pub const ASTRONOMICAL_TWILIGHT_ALTITUDE: f64 = -18.0;

/// Upper bound of the golden hour.
pub const GOLDEN_HOUR_ALTITUDE: f64 = 6.0;
/// Boundary between golden hour and blue hour.
pub const BLUE_HOUR_ALTITUDE: f64 = -4.0;

/// Latitude plus declination beyond which the sun stays up all day.
pub const POLAR_DAY_THRESHOLD: f64 = 90.0;

// # Configuration Defaults

pub const CONFIG_DIR_NAME: &str = "suntimes";
pub const CONFIG_FILE_NAME: &str = "suntimes.toml";

pub const DEFAULT_HOUR12: bool = true;
pub const DEFAULT_SHOW_SECONDS: bool = false;
pub const DEFAULT_RANGE_DAYS: u32 = 7;

/// Local hour used as the calculation anchor for a calendar date.
pub const ANCHOR_HOUR: u32 = 12;

// # Validation Limits

pub const MINIMUM_LATITUDE: f64 = -90.0;
pub const MAXIMUM_LATITUDE: f64 = 90.0;
pub const MINIMUM_LONGITUDE: f64 = -180.0;
pub const MAXIMUM_LONGITUDE: f64 = 180.0;

pub const MINIMUM_RANGE_DAYS: u32 = 1;
pub const MAXIMUM_RANGE_DAYS: u32 = 366;

// # Exit Codes

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
