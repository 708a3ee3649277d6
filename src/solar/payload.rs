//! JSON payload consumed by page generators and API clients.
//!
//! Field names, timestamp format and the `polarEvent` strings are a compatibility
//! contract: keys are camelCase, instants are ISO-8601 UTC with millisecond
//! precision and a `Z` suffix, and missing events are `null`.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use super::coordinate::GeoCoordinate;
use super::events::PolarEvent;
use super::times::TwilightBundle;

fn iso(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn iso_opt(instant: Option<DateTime<Utc>>) -> Option<String> {
    instant.map(iso)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SunTimesPayload {
    pub location: LocationPayload,
    /// Calendar date in the location's timezone, `YYYY-MM-DD`.
    pub date: String,
    pub sun_times: SunTimesSection,
    pub twilight_times: TwilightSection,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub coordinates: GeoCoordinate,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SunTimesSection {
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    pub solar_noon: String,
    pub daylight_hours: f64,
    pub polar_event: PolarEvent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwilightSection {
    pub civil_dawn: Option<String>,
    pub civil_dusk: Option<String>,
    pub nautical_dawn: Option<String>,
    pub nautical_dusk: Option<String>,
    pub astronomical_dawn: Option<String>,
    pub astronomical_dusk: Option<String>,
}

impl SunTimesPayload {
    /// Build the payload for one day.
    ///
    /// `anchor` is the calculation instant; its calendar date in `timezone`
    /// becomes the `date` field.
    pub fn new(
        name: Option<String>,
        coordinate: GeoCoordinate,
        timezone: &Tz,
        anchor: DateTime<Utc>,
        bundle: &TwilightBundle,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            location: LocationPayload {
                name,
                coordinates: coordinate,
                timezone: timezone.to_string(),
            },
            date: anchor
                .with_timezone(timezone)
                .date_naive()
                .format("%Y-%m-%d")
                .to_string(),
            sun_times: SunTimesSection {
                sunrise: iso_opt(bundle.sunrise()),
                sunset: iso_opt(bundle.sunset()),
                solar_noon: iso(bundle.solar_noon),
                daylight_hours: bundle.daylight_hours,
                polar_event: bundle.polar_event,
            },
            twilight_times: TwilightSection {
                civil_dawn: iso_opt(bundle.civil_dawn()),
                civil_dusk: iso_opt(bundle.civil_dusk()),
                nautical_dawn: iso_opt(bundle.nautical_dawn()),
                nautical_dusk: iso_opt(bundle.nautical_dusk()),
                astronomical_dawn: iso_opt(bundle.astronomical_dawn()),
                astronomical_dusk: iso_opt(bundle.astronomical_dusk()),
            },
            last_updated: iso(generated_at),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize sun times payload")
    }
}
