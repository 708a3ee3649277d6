//! # Suntimes Library
//!
//! Sunrise, sunset, solar noon and twilight times for any place and date.
//!
//! This library exists to enable testing of the solar engine and provide clean
//! separation between CLI dispatch (main.rs) and application logic.
//!
//! ## Architecture
//!
//! - **Solar engine**: `solar` module with the ephemeris, event resolution,
//!   query surface, formatting and the JSON payload; pure and free of I/O
//! - **Configuration**: `config` module for TOML-based settings
//! - **Commands**: `commands` module for the `times`, `twilight`, `range` and
//!   `position` reports
//! - **Infrastructure**: argument parsing, constants, and logging
//!
//! ## Example
//!
//! ```
//! use chrono::TimeZone;
//! use suntimes::solar::{PolarEvent, get_sun_times};
//!
//! let noon = chrono_tz::America::New_York
//!     .with_ymd_and_hms(2024, 6, 21, 12, 0, 0)
//!     .unwrap();
//! let times = get_sun_times(&noon, 40.7128, -74.0060);
//! assert_eq!(times.polar_event(), PolarEvent::None);
//! assert!(times.sunrise().unwrap() < times.sunset().unwrap());
//! ```

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod commands;
pub mod config;
pub mod constants;
pub mod solar;

pub use solar::{
    GeoCoordinate, Horizon, PolarEvent, SunEvent, SunEventResult, TwilightBundle, get_sun_times,
    get_sun_times_range, get_twilight_times,
};
