//! Public sun time queries.
//!
//! These functions are the surface that page generators, the JSON payload and the
//! CLI call into. Every query is a pure function of the instant and coordinate;
//! results can be computed from any number of threads at once.

use chrono::{DateTime, Days, TimeZone, Utc};

use super::coordinate::GeoCoordinate;
use super::events::{PolarEvent, SunEvent, SunEventResult, solve_sun_event};
use crate::constants::*;

/// Sun altitude thresholds defining each kind of event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Horizon {
    /// Upper limb on the horizon, corrected for refraction (-0.833°).
    #[default]
    Sunrise,
    /// Civil twilight (-6°).
    Civil,
    /// Nautical twilight (-12°).
    Nautical,
    /// Astronomical twilight (-18°).
    Astronomical,
    /// Upper edge of the golden hour (+6°).
    GoldenHour,
    /// Golden hour / blue hour boundary (-4°).
    BlueHour,
    /// Any altitude in degrees.
    Custom(f64),
}

impl Horizon {
    pub const fn altitude_degrees(&self) -> f64 {
        match self {
            Horizon::Sunrise => SUNRISE_SUNSET_ALTITUDE,
            Horizon::Civil => CIVIL_TWILIGHT_ALTITUDE,
            Horizon::Nautical => NAUTICAL_TWILIGHT_ALTITUDE,
            Horizon::Astronomical => ASTRONOMICAL_TWILIGHT_ALTITUDE,
            Horizon::GoldenHour => GOLDEN_HOUR_ALTITUDE,
            Horizon::BlueHour => BLUE_HOUR_ALTITUDE,
            Horizon::Custom(altitude) => *altitude,
        }
    }
}

/// Standard sunrise and sunset (-0.833°) nearest to `instant`.
pub fn get_sun_times<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> SunEventResult {
    get_sun_times_for_horizon(instant, latitude, longitude, Horizon::Sunrise)
}

/// Rise and set times of the sun across an arbitrary altitude threshold.
pub fn get_sun_times_for_horizon<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> SunEventResult {
    solve_sun_event(
        instant.with_timezone(&Utc),
        GeoCoordinate::new_unchecked(latitude, longitude),
        horizon.altitude_degrees(),
    )
}

/// Sunrise, sunset and the three twilight pairs for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwilightBundle {
    pub standard: SunEvent,
    pub civil: SunEvent,
    pub nautical: SunEvent,
    pub astronomical: SunEvent,
    pub solar_noon: DateTime<Utc>,
    pub nadir: DateTime<Utc>,
    /// Taken from the standard sunrise/sunset threshold.
    pub daylight_hours: f64,
    /// Taken from the standard sunrise/sunset threshold.
    pub polar_event: PolarEvent,
}

fn rise(event: &SunEvent) -> Option<DateTime<Utc>> {
    match event {
        SunEvent::Regular { sunrise, .. } => Some(*sunrise),
        _ => None,
    }
}

fn set(event: &SunEvent) -> Option<DateTime<Utc>> {
    match event {
        SunEvent::Regular { sunset, .. } => Some(*sunset),
        _ => None,
    }
}

impl TwilightBundle {
    pub fn sunrise(&self) -> Option<DateTime<Utc>> {
        rise(&self.standard)
    }
    pub fn sunset(&self) -> Option<DateTime<Utc>> {
        set(&self.standard)
    }
    pub fn civil_dawn(&self) -> Option<DateTime<Utc>> {
        rise(&self.civil)
    }
    pub fn civil_dusk(&self) -> Option<DateTime<Utc>> {
        set(&self.civil)
    }
    pub fn nautical_dawn(&self) -> Option<DateTime<Utc>> {
        rise(&self.nautical)
    }
    pub fn nautical_dusk(&self) -> Option<DateTime<Utc>> {
        set(&self.nautical)
    }
    pub fn astronomical_dawn(&self) -> Option<DateTime<Utc>> {
        rise(&self.astronomical)
    }
    pub fn astronomical_dusk(&self) -> Option<DateTime<Utc>> {
        set(&self.astronomical)
    }
}

/// Sunrise/sunset plus civil, nautical and astronomical twilight.
pub fn get_twilight_times<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> TwilightBundle {
    let standard = get_sun_times_for_horizon(instant, latitude, longitude, Horizon::Sunrise);
    let civil = get_sun_times_for_horizon(instant, latitude, longitude, Horizon::Civil);
    let nautical = get_sun_times_for_horizon(instant, latitude, longitude, Horizon::Nautical);
    let astronomical =
        get_sun_times_for_horizon(instant, latitude, longitude, Horizon::Astronomical);

    TwilightBundle {
        standard: standard.event,
        civil: civil.event,
        nautical: nautical.event,
        astronomical: astronomical.event,
        solar_noon: standard.solar_noon,
        nadir: standard.nadir,
        daylight_hours: standard.daylight_hours,
        polar_event: standard.polar_event(),
    }
}

/// One entry of a multi-day range.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedSunTimes<Tz: TimeZone> {
    pub date: DateTime<Tz>,
    pub times: SunEventResult,
}

/// Lazy day-by-day sun times; clone it to iterate again from the start.
#[derive(Debug, Clone)]
pub struct SunTimesRange<Tz: TimeZone> {
    start: DateTime<Tz>,
    day_count: u32,
    next_day: u32,
    latitude: f64,
    longitude: f64,
}

impl<Tz: TimeZone> Iterator for SunTimesRange<Tz> {
    type Item = DatedSunTimes<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_day >= self.day_count {
            return None;
        }
        let date = shift_days(&self.start, self.next_day)?;
        self.next_day += 1;

        let times = get_sun_times(&date, self.latitude, self.longitude);
        Some(DatedSunTimes { date, times })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.day_count.saturating_sub(self.next_day) as usize;
        (0, Some(remaining))
    }
}

/// `start` moved forward by `days` calendar days, keeping its wall-clock time.
///
/// An ambiguous local time takes the earlier reading. A local time skipped by a
/// DST gap falls forward by the gap. `None` only past chrono's representable
/// range.
fn shift_days<Tz: TimeZone>(start: &DateTime<Tz>, days: u32) -> Option<DateTime<Tz>> {
    let offset = Days::new(u64::from(days));
    if let Some(date) = start.clone().checked_add_days(offset) {
        return Some(date);
    }

    let timezone = start.timezone();
    let local = start.naive_local().checked_add_days(offset)?;
    match timezone.from_local_datetime(&local).earliest() {
        Some(date) => Some(date),
        // Inside a gap: read the time with the offset in force a day earlier
        None => timezone
            .from_local_datetime(&local.checked_sub_days(Days::new(1))?)
            .earliest()?
            .checked_add_signed(chrono::Duration::days(1)),
    }
}

/// Standard sun times for `day_count` consecutive calendar days from `start`.
///
/// Each day keeps the wall-clock time of `start` in its timezone, except where
/// a DST transition skips or repeats it.
pub fn get_sun_times_range<Tz: TimeZone>(
    start: &DateTime<Tz>,
    day_count: u32,
    latitude: f64,
    longitude: f64,
) -> SunTimesRange<Tz> {
    SunTimesRange {
        start: start.clone(),
        day_count,
        next_day: 0,
        latitude,
        longitude,
    }
}

/// A closed interval between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    fn between(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Option<Self> {
        Some(Self {
            start: start?,
            end: end?,
        })
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}

/// Golden hour (-4° to +6°) and blue hour (-6° to -4°), morning and evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoWindows {
    pub morning_blue_hour: Option<TimeWindow>,
    pub morning_golden_hour: Option<TimeWindow>,
    pub evening_golden_hour: Option<TimeWindow>,
    pub evening_blue_hour: Option<TimeWindow>,
}

pub fn get_photo_windows<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> PhotoWindows {
    let golden = get_sun_times_for_horizon(instant, latitude, longitude, Horizon::GoldenHour);
    let blue = get_sun_times_for_horizon(instant, latitude, longitude, Horizon::BlueHour);
    let civil = get_sun_times_for_horizon(instant, latitude, longitude, Horizon::Civil);

    PhotoWindows {
        morning_blue_hour: TimeWindow::between(civil.sunrise(), blue.sunrise()),
        morning_golden_hour: TimeWindow::between(blue.sunrise(), golden.sunrise()),
        evening_golden_hour: TimeWindow::between(golden.sunset(), blue.sunset()),
        evening_blue_hour: TimeWindow::between(blue.sunset(), civil.sunset()),
    }
}
