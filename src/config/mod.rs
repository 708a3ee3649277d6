//! Configuration system for suntimes.
//!
//! Settings live in an optional `suntimes.toml`; command line flags override
//! whatever the file provides, and anything left unset falls back to the
//! defaults in [`crate::constants`].
//!
//! ## Configuration Sources
//!
//! 1. The directory given with `--config <dir>` (`<dir>/suntimes.toml`)
//! 2. **XDG_CONFIG_HOME**/suntimes/suntimes.toml
//!
//! A missing file is not an error: every field is optional, so an absent file
//! behaves like an empty one.
//!
//! ## Configuration Structure
//!
//! ```toml
//! name = "New York"              # Label shown in output and the JSON payload
//! latitude = 40.7128             # Geographic latitude (-90 to +90)
//! longitude = -74.0060           # Geographic longitude (-180 to +180)
//! timezone = "America/New_York"  # IANA zone; detected from coordinates if omitted
//! hour12 = true                  # 12-hour clock with AM/PM
//! show_seconds = false           # Include seconds in printed times
//! days = 7                       # Default length of `suntimes range` (1-366)
//! ```
//!
//! ## Validation
//!
//! - **Geographic validation**: latitude (-90° to +90°), longitude (-180° to +180°),
//!   and both must be given together
//! - **Timezone validation**: the name must be a known IANA timezone
//! - **Range validation**: `days` between 1 and 366

pub mod loading;
pub mod validation;

use serde::Deserialize;

use crate::constants::*;

pub use loading::{get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir};

/// Settings loaded from `suntimes.toml`.
///
/// All fields are optional. Accessors such as [`Config::hour12`] resolve the
/// defaults so callers never see an unset value.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Display name of the location.
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// IANA timezone name, e.g. `Europe/Berlin`.
    pub timezone: Option<String>,
    pub hour12: Option<bool>,
    pub show_seconds: Option<bool>,
    /// Number of days printed by the `range` command.
    pub days: Option<u32>,
}

impl Config {
    /// Load configuration using automatic path detection.
    pub fn load() -> anyhow::Result<Self> {
        load()
    }

    pub fn hour12(&self) -> bool {
        self.hour12.unwrap_or(DEFAULT_HOUR12)
    }

    pub fn show_seconds(&self) -> bool {
        self.show_seconds.unwrap_or(DEFAULT_SHOW_SECONDS)
    }

    pub fn days(&self) -> u32 {
        self.days.unwrap_or(DEFAULT_RANGE_DAYS)
    }

    /// Coordinates, when both halves are configured.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    /// Log the loaded settings in the indented block format.
    pub fn log_config(&self, source: &str) {
        log_block_start!("Loaded {}", source);

        if let Some(ref name) = self.name {
            log_indented!("Location: {}", name);
        }
        match self.coordinates() {
            Some((lat, lon)) => log_indented!("Coordinates: {:.4}°, {:.4}°", lat, lon),
            None => log_indented!("Coordinates: not configured"),
        }
        match self.timezone {
            Some(ref tz) => log_indented!("Timezone: {}", tz),
            None => log_indented!("Timezone: detect from coordinates"),
        }
        log_indented!(
            "Clock: {}{}",
            if self.hour12() { "12-hour" } else { "24-hour" },
            if self.show_seconds() {
                " with seconds"
            } else {
                ""
            }
        );
        log_indented!("Range: {} days", self.days());
    }
}
