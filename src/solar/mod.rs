//! Sunrise, sunset, solar noon and twilight calculations.
//!
//! ## Module Structure
//!
//! - [`ephemeris`]: mean anomaly, equation of center, ecliptic longitude,
//!   declination, right ascension, sidereal time and hour angle
//! - [`events`]: sunrise/sunset for an altitude threshold, solar noon and nadir,
//!   and polar day/night classification
//! - [`times`]: the query surface (single day, twilight bundle, multi-day range,
//!   golden and blue hour)
//! - [`position`]: azimuth and altitude of the sun at an instant
//! - [`display`]: time, date and duration formatting plus debug diagnostics
//! - [`payload`]: the JSON document served to page generators
//! - [`timezone`]: IANA timezone lookup from coordinates
//!
//! ## Model
//!
//! The ephemeris is a low-precision model (a few arc-minutes, roughly one to two
//! minutes of time at sunrise). Every function is pure: no I/O, no global state,
//! and the same inputs always give the same instants.
//!
//! ## Polar Days
//!
//! When the sun never crosses the requested altitude, there is no sunrise or
//! sunset, and the result says so with [`SunEvent::PolarDay`] or
//! [`SunEvent::PolarNight`] instead of a placeholder time.

pub mod coordinate;
pub mod display;
pub mod ephemeris;
pub mod events;
pub mod payload;
pub mod position;
pub mod timezone;
pub mod times;

pub use coordinate::GeoCoordinate;
pub use display::{
    TimeFormatOptions, format_date, format_duration, format_time, log_solar_debug_info,
    parse_timezone,
};
pub use events::{PolarEvent, SunEvent, SunEventResult, solve_noon_and_nadir, solve_sun_event};
pub use payload::SunTimesPayload;
pub use position::{SunPosition, get_sun_position};
pub use times::{
    DatedSunTimes, Horizon, PhotoWindows, SunTimesRange, TimeWindow, TwilightBundle,
    get_photo_windows, get_sun_times, get_sun_times_for_horizon, get_sun_times_range,
    get_twilight_times,
};
pub use timezone::determine_timezone_from_coordinates;

#[cfg(test)]
mod tests;
