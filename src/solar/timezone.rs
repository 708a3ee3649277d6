//! Timezone lookup from coordinates.
//!
//! Used when neither the command line nor the configuration names a timezone
//! for the location being queried.

use chrono_tz::Tz;
use once_cell::sync::Lazy;
use tzf_rs::DefaultFinder;

/// The polygon index is large; build it once per process.
static FINDER: Lazy<DefaultFinder> = Lazy::new(DefaultFinder::new);

/// Find the IANA timezone containing the given coordinates.
///
/// Falls back to UTC for open ocean or names `chrono-tz` does not know.
pub fn determine_timezone_from_coordinates(latitude: f64, longitude: f64) -> Tz {
    let name = FINDER.get_tz_name(longitude, latitude);
    name.parse::<Tz>().unwrap_or(Tz::UTC)
}
