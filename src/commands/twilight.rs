//! `twilight` command: dawn and dusk for each twilight band.

use anyhow::Result;
use chrono::{DateTime, Utc};

use super::{ResolvedQuery, time_or};
use crate::logger::write_output;
use crate::solar::{
    PolarEvent, SunTimesPayload, TwilightBundle, format_date, format_duration, get_twilight_times,
};

/// One row per band, `(band, dawn, dusk)`, from the darkest band to sunrise and sunset.
pub fn twilight_rows(
    query: &ResolvedQuery,
    bundle: &TwilightBundle,
) -> Vec<(&'static str, String, String)> {
    let never = "not reached";
    let row = |band: &'static str, dawn, dusk| {
        (band, time_or(dawn, query, never), time_or(dusk, query, never))
    };

    vec![
        row(
            "Astronomical",
            bundle.astronomical_dawn(),
            bundle.astronomical_dusk(),
        ),
        row("Nautical", bundle.nautical_dawn(), bundle.nautical_dusk()),
        row("Civil", bundle.civil_dawn(), bundle.civil_dusk()),
        row("Sunrise/set", bundle.sunrise(), bundle.sunset()),
    ]
}

/// Print the twilight table, or the JSON payload with `--json`.
pub fn run_twilight_command(query: &ResolvedQuery, now: DateTime<Utc>) -> Result<()> {
    let bundle = get_twilight_times(
        &query.anchor,
        query.coordinate.latitude,
        query.coordinate.longitude,
    );

    if query.json {
        let payload = SunTimesPayload::new(
            query.name.clone(),
            query.coordinate,
            &query.timezone,
            query.anchor,
            &bundle,
            now,
        );
        write_output(&format!("{}\n", payload.to_json_pretty()?));
        return Ok(());
    }

    log_block_start!("Twilight for {}", query.location_label());
    log_indented!(
        "{} ({})",
        format_date(query.anchor, &query.timezone),
        query.timezone
    );

    log_block_start!("{:<13} {:<12} {}", "", "Dawn", "Dusk");
    for (band, dawn, dusk) in twilight_rows(query, &bundle) {
        log_indented!("{:<13} {:<12} {}", band, dawn, dusk);
    }

    log_pipe!();
    log_decorated!(
        "Solar noon {}, daylight {}",
        time_or(Some(bundle.solar_noon), query, "-"),
        format_duration(bundle.daylight_hours)
    );
    match bundle.polar_event {
        PolarEvent::None => {}
        PolarEvent::PolarDay => log_info!("Polar day: the sun stays above the horizon"),
        PolarEvent::PolarNight => log_info!("Polar night: the sun stays below the horizon"),
    }

    log_end!();
    Ok(())
}
