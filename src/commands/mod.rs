//! Command handlers for suntimes.
//!
//! Every command starts from the same [`ResolvedQuery`]: the command line
//! options merged over the config file, with coordinates validated, the
//! timezone resolved and the calendar date turned into a calculation anchor.
//! Each command is implemented in its own submodule.

pub mod position;
pub mod range;
pub mod times;
pub mod twilight;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::args::{Command, QueryOptions};
use crate::config::Config;
use crate::constants::*;
use crate::solar::{
    GeoCoordinate, TimeFormatOptions, determine_timezone_from_coordinates, log_solar_debug_info,
    parse_timezone,
};

/// Everything a command needs to compute and print its report.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedQuery {
    pub name: Option<String>,
    pub coordinate: GeoCoordinate,
    pub timezone: Tz,
    /// Calendar date in `timezone`.
    pub date: NaiveDate,
    /// Local noon of `date`, the instant every daily calculation uses.
    pub anchor: DateTime<Utc>,
    /// Whether the date came from `--date` rather than today's clock.
    pub explicit_date: bool,
    pub format: TimeFormatOptions,
    pub json: bool,
    pub debug_enabled: bool,
}

impl ResolvedQuery {
    /// Location label for report headers: the configured name, or the coordinates.
    pub fn location_label(&self) -> String {
        match self.name {
            Some(ref name) => format!("{} ({})", name, self.coordinate),
            None => self.coordinate.to_string(),
        }
    }

    /// The anchor expressed in the location's timezone.
    pub fn local_anchor(&self) -> DateTime<Tz> {
        self.anchor.with_timezone(&self.timezone)
    }
}

/// The calculation anchor for a calendar date: local noon in `timezone`.
///
/// Solar noon is never far from local noon, so the nearest transit to this
/// instant is the one on `date`. Falls back to the earlier reading when noon is
/// ambiguous and fails only if the zone skips noon entirely.
pub fn local_noon(date: NaiveDate, timezone: &Tz) -> Result<DateTime<Utc>> {
    let naive = date
        .and_hms_opt(ANCHOR_HOUR, 0, 0)
        .context("Invalid anchor hour")?;
    timezone
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("{date} {ANCHOR_HOUR}:00 does not exist in {timezone}"))
}

/// Merge command line options over the config file and validate the result.
///
/// `now` supplies today's date when `--date` is absent.
pub fn resolve_query(
    options: &QueryOptions,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<ResolvedQuery> {
    let latitude = options.latitude.or(config.latitude);
    let longitude = options.longitude.or(config.longitude);

    let (latitude, longitude) = match (latitude, longitude) {
        (Some(lat), Some(lon)) => (lat, lon),
        (None, None) => anyhow::bail!(
            "No location configured. Pass --lat and --lon, or set latitude and longitude in {}",
            CONFIG_FILE_NAME
        ),
        (Some(_), None) => anyhow::bail!("Latitude given without longitude"),
        (None, Some(_)) => anyhow::bail!("Longitude given without latitude"),
    };
    let coordinate = GeoCoordinate::new(latitude, longitude)?;

    let timezone = match options.timezone.as_deref().or(config.timezone.as_deref()) {
        Some(name) => parse_timezone(name)?,
        None => determine_timezone_from_coordinates(latitude, longitude),
    };

    let date = options
        .date
        .unwrap_or_else(|| now.with_timezone(&timezone).date_naive());
    let anchor = local_noon(date, &timezone)?;

    Ok(ResolvedQuery {
        name: config.name.clone(),
        coordinate,
        timezone,
        date,
        anchor,
        explicit_date: options.date.is_some(),
        format: TimeFormatOptions {
            hour12: config.hour12() && !options.hour24,
            show_seconds: config.show_seconds(),
        },
        json: options.json,
        debug_enabled: options.debug_enabled,
    })
}

/// Resolve the query and run `command`.
pub fn run_command(
    command: Command,
    options: &QueryOptions,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<()> {
    let query = resolve_query(options, config, now)?;

    if !query.json {
        log_version!();
    }
    if query.debug_enabled {
        let source = crate::config::get_config_path()
            .map(|path| crate::config::loading::private_path(&path))
            .unwrap_or_else(|_| CONFIG_FILE_NAME.to_string());
        log_pipe!();
        log_debug!("Debug mode enabled");
        config.log_config(&source);
        log_solar_debug_info(query.anchor, query.coordinate, &query.timezone);
    }

    match command {
        Command::Times => times::run_times_command(&query, now),
        Command::Twilight => twilight::run_twilight_command(&query, now),
        Command::Range { days } => {
            range::run_range_command(&query, days.unwrap_or(config.days()), now)
        }
        Command::Position => position::run_position_command(&query, now),
    }
}

/// Render an optional event time, or `fallback` when the event does not occur.
pub(crate) fn time_or(
    instant: Option<DateTime<Utc>>,
    query: &ResolvedQuery,
    fallback: &str,
) -> String {
    crate::solar::format_time(instant, &query.timezone, &query.format)
        .unwrap_or_else(|| fallback.to_string())
}
