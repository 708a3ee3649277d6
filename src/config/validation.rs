//! Configuration validation functionality.
//!
//! Rejects values the solar engine cannot give a meaningful answer for, such as
//! out-of-range coordinates or an unknown timezone.

use anyhow::Result;

use super::Config;
use crate::constants::*;
use crate::solar::GeoCoordinate;
use crate::solar::display::parse_timezone;

/// Validate every field that is present.
pub fn validate_config(config: &Config) -> Result<()> {
    match (config.latitude, config.longitude) {
        (Some(lat), Some(lon)) => {
            GeoCoordinate::new(lat, lon)?;
        }
        (Some(_), None) => anyhow::bail!("latitude is set but longitude is missing"),
        (None, Some(_)) => anyhow::bail!("longitude is set but latitude is missing"),
        (None, None) => {}
    }

    if let Some(ref tz) = config.timezone {
        parse_timezone(tz)?;
    }

    if let Some(days) = config.days
        && !(MINIMUM_RANGE_DAYS..=MAXIMUM_RANGE_DAYS).contains(&days)
    {
        anyhow::bail!(
            "days ({}) must be between {} and {}",
            days,
            MINIMUM_RANGE_DAYS,
            MAXIMUM_RANGE_DAYS
        );
    }

    Ok(())
}
