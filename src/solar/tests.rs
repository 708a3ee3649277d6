#[cfg(test)]
mod ephemeris_tests {
    use crate::constants::*;
    use crate::solar::ephemeris::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_julian_day_of_j2000_epoch() {
        // J2000.0 is 2000-01-01 12:00 UTC
        let epoch = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_day(&epoch) - J2000).abs() < 1e-9);
        assert!(days_since_j2000(&epoch).abs() < 1e-9);
    }

    #[test]
    fn test_julian_day_of_unix_epoch() {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        assert!((julian_day(&epoch) - 2_440_587.5).abs() < 1e-9);
    }

    #[test]
    fn test_julian_day_round_trip() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 21, 9, 26, 20).unwrap()
            + chrono::Duration::milliseconds(874);
        assert_eq!(from_julian_day(julian_day(&instant)), instant);
    }

    #[test]
    fn test_non_finite_julian_day_maps_to_unix_epoch() {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        assert_eq!(from_julian_day(f64::NAN), epoch);
        assert_eq!(from_julian_day(f64::INFINITY), epoch);

        // Only NaN coordinates reach it, and the validating constructor refuses them
        let noon = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let times = crate::solar::get_sun_times(&noon, 0.0, f64::NAN);
        assert_eq!(times.solar_noon, epoch);
        assert!(crate::solar::GeoCoordinate::new(f64::NAN, 0.0).is_err());
        assert!(crate::solar::GeoCoordinate::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_julian_day_ignores_display_timezone() {
        let utc = Utc.with_ymd_and_hms(2024, 6, 21, 16, 0, 0).unwrap();
        let local = utc.with_timezone(&chrono_tz::America::New_York);
        assert_eq!(julian_day(&utc), julian_day(&local));
    }

    #[test]
    fn test_mean_anomaly_at_epoch() {
        assert!((solar_mean_anomaly(0.0) - MEAN_ANOMALY_AT_EPOCH * DEG_TO_RAD).abs() < 1e-12);
        let one_year = solar_mean_anomaly(365.25) - solar_mean_anomaly(0.0);
        assert!((one_year * RAD_TO_DEG - 359.99).abs() < 0.1);
    }

    #[test]
    fn test_equation_of_center_bounds() {
        // Largest near M = 90°, about 1.9°; zero at perihelion and aphelion
        assert!(equation_of_center(0.0).abs() < 1e-12);
        let peak = equation_of_center(std::f64::consts::FRAC_PI_2) * RAD_TO_DEG;
        assert!((peak - 1.9148).abs() < 0.001);
    }

    #[test]
    fn test_declination_bounded_by_obliquity() {
        for day in (0..366).step_by(5) {
            let l = ecliptic_longitude(solar_mean_anomaly(8766.0 + day as f64));
            let dec = solar_declination(l) * RAD_TO_DEG;
            assert!(dec.abs() <= OBLIQUITY + 1e-9, "declination {dec} on day {day}");
        }
    }

    #[test]
    fn test_declination_at_solstices() {
        let june = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let december = Utc.with_ymd_and_hms(2024, 12, 21, 12, 0, 0).unwrap();
        let (dec_june, _) = sun_coordinates(days_since_j2000(&june));
        let (dec_december, _) = sun_coordinates(days_since_j2000(&december));
        assert!((dec_june * RAD_TO_DEG - 23.44).abs() < 0.05);
        assert!((dec_december * RAD_TO_DEG + 23.44).abs() < 0.05);
    }

    #[test]
    fn test_right_ascension_at_cardinal_longitudes() {
        use std::f64::consts::{FRAC_PI_2, PI};
        assert!(right_ascension(0.0).abs() < 1e-12);
        assert!((right_ascension(FRAC_PI_2) - FRAC_PI_2).abs() < 1e-12);
        assert!((right_ascension(PI).abs() - PI).abs() < 1e-12);
        // Between the cardinal points the equator projection lags the ecliptic
        assert!(right_ascension(PI / 4.0) < PI / 4.0);
    }

    #[test]
    fn test_sidereal_time_advances_faster_than_solar_day() {
        let st0 = sidereal_time(0.0, 0.0);
        let st1 = sidereal_time(1.0, 0.0);
        let gained = (st1 - st0) * RAD_TO_DEG - 360.0;
        assert!((gained - 0.9856235).abs() < 1e-6);
    }

    #[test]
    fn test_hour_angle_none_when_no_crossing() {
        let lat = 78.0 * DEG_TO_RAD;
        let summer = 23.44 * DEG_TO_RAD;
        let winter = -23.44 * DEG_TO_RAD;
        assert_eq!(hour_angle(SUNRISE_SUNSET_ALTITUDE, lat, summer), None);
        assert_eq!(hour_angle(SUNRISE_SUNSET_ALTITUDE, lat, winter), None);
    }

    #[test]
    fn test_hour_angle_equator_equinox_is_quarter_turn() {
        let h = hour_angle(0.0, 0.0, 0.0).unwrap();
        assert!((h - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_hour_angle_grows_as_threshold_drops() {
        let lat = 40.0 * DEG_TO_RAD;
        let dec = 10.0 * DEG_TO_RAD;
        let sunrise = hour_angle(SUNRISE_SUNSET_ALTITUDE, lat, dec).unwrap();
        let civil = hour_angle(CIVIL_TWILIGHT_ALTITUDE, lat, dec).unwrap();
        let nautical = hour_angle(NAUTICAL_TWILIGHT_ALTITUDE, lat, dec).unwrap();
        assert!(sunrise < civil && civil < nautical);
    }
}

#[cfg(test)]
mod event_tests {
    use crate::constants::test_constants::*;
    use crate::solar::*;
    use chrono::{Duration, TimeZone, Timelike, Utc};
    use chrono_tz::America::New_York;

    fn nyc_solstice() -> SunEventResult {
        let anchor = New_York.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        get_sun_times(&anchor, NYC_LATITUDE, NYC_LONGITUDE)
    }

    #[test]
    fn test_nyc_summer_solstice_sunrise_and_sunset() {
        let result = nyc_solstice();
        let sunrise = result.sunrise().unwrap().with_timezone(&New_York);
        let sunset = result.sunset().unwrap().with_timezone(&New_York);

        assert_eq!(sunrise.hour(), 5);
        assert!((20..30).contains(&sunrise.minute()), "sunrise {sunrise}");
        assert_eq!(sunset.hour(), 20);
        assert!((25..35).contains(&sunset.minute()), "sunset {sunset}");
        assert!(
            (15.0..=15.3).contains(&result.daylight_hours),
            "daylight {}",
            result.daylight_hours
        );
        assert_eq!(result.polar_event(), PolarEvent::None);
    }

    #[test]
    fn test_nyc_solar_noon_and_nadir() {
        let result = nyc_solstice();
        let noon = result.solar_noon.with_timezone(&New_York);
        assert_eq!(noon.hour(), 12);
        assert!(noon.minute() >= 55);
        assert_eq!(result.solar_noon - result.nadir, Duration::hours(12));
    }

    #[test]
    fn test_noon_between_sunrise_and_sunset() {
        let result = nyc_solstice();
        let sunrise = result.sunrise().unwrap();
        let sunset = result.sunset().unwrap();
        assert!(sunrise < result.solar_noon && result.solar_noon < sunset);

        // The model is symmetric around transit to within the noon correction terms
        let morning = result.solar_noon - sunrise;
        let afternoon = sunset - result.solar_noon;
        assert!((morning - afternoon).num_seconds().abs() < 60);
    }

    #[test]
    fn test_nearest_transit_follows_anchor() {
        // Local midnight is closer to the previous day's transit
        let midnight = New_York.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
        let result = get_sun_times(&midnight, NYC_LATITUDE, NYC_LONGITUDE);
        let noon = result.solar_noon.with_timezone(&New_York);
        assert_eq!(noon.date_naive().to_string(), "2024-06-20");
    }

    #[test]
    fn test_polar_day_in_arctic_summer() {
        let anchor = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let result = get_sun_times(&anchor, SVALBARD_LATITUDE, SVALBARD_LONGITUDE);

        assert_eq!(result.event, SunEvent::PolarDay);
        assert_eq!(result.polar_event(), PolarEvent::PolarDay);
        assert_eq!(result.daylight_hours, 24.0);
        assert_eq!(result.sunrise(), None);
        assert_eq!(result.sunset(), None);
    }

    #[test]
    fn test_polar_night_in_arctic_winter() {
        let anchor = Utc.with_ymd_and_hms(2024, 12, 21, 12, 0, 0).unwrap();
        let result = get_sun_times(&anchor, SVALBARD_LATITUDE, SVALBARD_LONGITUDE);

        assert_eq!(result.event, SunEvent::PolarNight);
        assert_eq!(result.daylight_hours, 0.0);
        assert!(result.is_polar());
    }

    #[test]
    fn test_polar_events_mirror_in_antarctica() {
        let december = Utc.with_ymd_and_hms(2024, 12, 21, 12, 0, 0).unwrap();
        let june = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();

        let summer = get_sun_times(&december, MCMURDO_LATITUDE, MCMURDO_LONGITUDE);
        let winter = get_sun_times(&june, MCMURDO_LATITUDE, MCMURDO_LONGITUDE);

        assert_eq!(summer.polar_event(), PolarEvent::PolarDay);
        assert_eq!(winter.polar_event(), PolarEvent::PolarNight);
    }

    #[test]
    fn test_polar_result_still_has_noon() {
        let anchor = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let result = get_sun_times(&anchor, SVALBARD_LATITUDE, SVALBARD_LONGITUDE);
        // 15°E transits about an hour before Greenwich noon
        assert_eq!(result.solar_noon.hour(), 11);
        assert_eq!(result.solar_noon - result.nadir, Duration::hours(12));
    }

    #[test]
    fn test_polar_classification_near_circle_is_approximate() {
        // Tromsø in mid-May: the sun no longer sets, but latitude plus declination
        // is still below 90°, so the classification reports polar night.
        let anchor = Utc.with_ymd_and_hms(2024, 5, 19, 12, 0, 0).unwrap();
        let result = get_sun_times(&anchor, 69.65, 18.96);
        assert_eq!(result.polar_event(), PolarEvent::PolarNight);

        let later = Utc.with_ymd_and_hms(2024, 5, 25, 12, 0, 0).unwrap();
        let result = get_sun_times(&later, 69.65, 18.96);
        assert_eq!(result.polar_event(), PolarEvent::PolarDay);
    }

    #[test]
    fn test_equator_has_twelve_hour_days() {
        for month in [1, 3, 6, 9, 12] {
            let anchor = Utc.with_ymd_and_hms(2024, month, 15, 12, 0, 0).unwrap();
            let result = get_sun_times(&anchor, 0.0, 0.0);
            assert!(
                (result.daylight_hours - 12.0).abs() < 0.2,
                "month {month}: {}",
                result.daylight_hours
            );
        }
    }

    #[test]
    fn test_singapore_sunrise_in_local_morning() {
        let tz: chrono_tz::Tz = "Asia/Singapore".parse().unwrap();
        let anchor = tz.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let result = get_sun_times(&anchor, SINGAPORE_LATITUDE, SINGAPORE_LONGITUDE);
        let sunrise = result.sunrise().unwrap().with_timezone(&tz);
        let sunset = result.sunset().unwrap().with_timezone(&tz);
        assert_eq!(sunrise.hour(), 7);
        assert_eq!(sunset.hour(), 19);
    }

    #[test]
    fn test_solve_sun_event_matches_query_surface() {
        let anchor = Utc.with_ymd_and_hms(2024, 9, 1, 16, 0, 0).unwrap();
        let coordinate = GeoCoordinate::new(NYC_LATITUDE, NYC_LONGITUDE).unwrap();
        let direct = solve_sun_event(anchor, coordinate, -0.833);
        assert_eq!(direct, get_sun_times(&anchor, NYC_LATITUDE, NYC_LONGITUDE));
        assert_eq!(
            (direct.solar_noon, direct.nadir),
            solve_noon_and_nadir(anchor, coordinate)
        );
    }

    #[test]
    fn test_sunrise_crate_agreement() {
        use sunrise::{Coordinates, SolarDay, SolarEvent};

        let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let coord = Coordinates::new(NYC_LATITUDE, NYC_LONGITUDE).unwrap();
        let day = SolarDay::new(coord, date);
        let reference_rise = day.event_time(SolarEvent::Sunrise);
        let reference_set = day.event_time(SolarEvent::Sunset);

        let result = nyc_solstice();
        let rise_diff = (result.sunrise().unwrap() - reference_rise).num_seconds().abs();
        let set_diff = (result.sunset().unwrap() - reference_set).num_seconds().abs();
        assert!(rise_diff < 300, "sunrise differs by {rise_diff}s");
        assert!(set_diff < 300, "sunset differs by {set_diff}s");
    }
}

#[cfg(test)]
mod query_tests {
    use crate::constants::test_constants::*;
    use crate::solar::*;
    use chrono::{Days, TimeZone, Utc};
    use chrono_tz::America::New_York;

    #[test]
    fn test_twilight_windows_nest() {
        let anchor = New_York.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let bundle = get_twilight_times(&anchor, NYC_LATITUDE, NYC_LONGITUDE);

        let ordered = [
            bundle.astronomical_dawn().unwrap(),
            bundle.nautical_dawn().unwrap(),
            bundle.civil_dawn().unwrap(),
            bundle.sunrise().unwrap(),
            bundle.sunset().unwrap(),
            bundle.civil_dusk().unwrap(),
            bundle.nautical_dusk().unwrap(),
            bundle.astronomical_dusk().unwrap(),
        ];
        assert!(ordered.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_twilight_bundle_shares_standard_summary() {
        let anchor = New_York.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let bundle = get_twilight_times(&anchor, NYC_LATITUDE, NYC_LONGITUDE);
        let standard = get_sun_times(&anchor, NYC_LATITUDE, NYC_LONGITUDE);

        assert_eq!(bundle.sunrise(), standard.sunrise());
        assert_eq!(bundle.solar_noon, standard.solar_noon);
        assert_eq!(bundle.daylight_hours, standard.daylight_hours);
        assert_eq!(bundle.polar_event, PolarEvent::None);
    }

    #[test]
    fn test_twilight_in_white_night() {
        // Svalbard in mid-April: the sun sets but never gets 6° below the horizon
        let anchor = Utc.with_ymd_and_hms(2024, 4, 15, 12, 0, 0).unwrap();
        let bundle = get_twilight_times(&anchor, SVALBARD_LATITUDE, SVALBARD_LONGITUDE);

        assert_eq!(bundle.polar_event, PolarEvent::None);
        assert!(bundle.sunrise().is_some());
        assert_eq!(bundle.nautical_dawn(), None);
        assert_eq!(bundle.astronomical_dusk(), None);
    }

    #[test]
    fn test_custom_horizon_matches_named() {
        let anchor = Utc.with_ymd_and_hms(2024, 9, 1, 16, 0, 0).unwrap();
        let named = get_sun_times_for_horizon(&anchor, 51.5, -0.12, Horizon::Civil);
        let custom = get_sun_times_for_horizon(&anchor, 51.5, -0.12, Horizon::Custom(-6.0));
        assert_eq!(named, custom);
        assert_eq!(Horizon::default().altitude_degrees(), -0.833);
    }

    #[test]
    fn test_range_produces_consecutive_days() {
        let start = New_York.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let entries: Vec<_> = get_sun_times_range(&start, 7, NYC_LATITUDE, NYC_LONGITUDE).collect();

        assert_eq!(entries.len(), 7);
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.date, start + Days::new(i as u64));
            assert_eq!(
                entry.times,
                get_sun_times(&entry.date, NYC_LATITUDE, NYC_LONGITUDE)
            );
        }
    }

    #[test]
    fn test_range_empty_for_zero_days() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(get_sun_times_range(&start, 0, 0.0, 0.0).count(), 0);
    }

    #[test]
    fn test_range_keeps_wall_clock_across_dst() {
        // DST starts 2024-03-10 in New York
        let start = New_York.with_ymd_and_hms(2024, 3, 8, 12, 0, 0).unwrap();
        let dates: Vec<_> = get_sun_times_range(&start, 4, NYC_LATITUDE, NYC_LONGITUDE)
            .map(|entry| entry.date.format("%Y-%m-%d %H:%M").to_string())
            .collect();
        assert_eq!(
            dates,
            [
                "2024-03-08 12:00",
                "2024-03-09 12:00",
                "2024-03-10 12:00",
                "2024-03-11 12:00"
            ]
        );
    }

    #[test]
    fn test_range_start_time_skipped_by_spring_forward() {
        // 02:30 does not exist in New York on 2024-03-10
        let start = New_York.with_ymd_and_hms(2024, 3, 9, 2, 30, 0).unwrap();
        let dates: Vec<_> = get_sun_times_range(&start, 7, NYC_LATITUDE, NYC_LONGITUDE)
            .map(|entry| entry.date.format("%Y-%m-%d %H:%M").to_string())
            .collect();
        assert_eq!(
            dates,
            [
                "2024-03-09 02:30",
                "2024-03-10 03:30",
                "2024-03-11 02:30",
                "2024-03-12 02:30",
                "2024-03-13 02:30",
                "2024-03-14 02:30",
                "2024-03-15 02:30"
            ]
        );
    }

    #[test]
    fn test_range_start_time_repeated_by_fall_back() {
        // 01:30 happens twice in New York on 2024-11-03
        let start = New_York.with_ymd_and_hms(2024, 11, 2, 1, 30, 0).unwrap();
        let entries: Vec<_> =
            get_sun_times_range(&start, 7, NYC_LATITUDE, NYC_LONGITUDE).collect();

        assert_eq!(entries.len(), 7);
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.date.date_naive(), start.date_naive() + Days::new(i as u64));
            assert_eq!(entry.date.format("%H:%M").to_string(), "01:30");
        }
        // The earlier, daylight-time reading of the repeated hour
        assert_eq!(
            entries[1].date,
            Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_range_is_restartable() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let range = get_sun_times_range(&start, 3, 48.85, 2.35);
        let first: Vec<_> = range.clone().collect();
        let second: Vec<_> = range.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_photo_windows_order() {
        let anchor = New_York.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let windows = get_photo_windows(&anchor, NYC_LATITUDE, NYC_LONGITUDE);
        let sun = get_sun_times(&anchor, NYC_LATITUDE, NYC_LONGITUDE);

        let morning_blue = windows.morning_blue_hour.unwrap();
        let morning_golden = windows.morning_golden_hour.unwrap();
        let evening_golden = windows.evening_golden_hour.unwrap();
        let evening_blue = windows.evening_blue_hour.unwrap();

        assert_eq!(morning_blue.end, morning_golden.start);
        assert_eq!(evening_golden.end, evening_blue.start);
        assert!(morning_golden.start < sun.sunrise().unwrap());
        assert!(sun.sunrise().unwrap() < morning_golden.end);
        assert!(evening_golden.start < sun.sunset().unwrap());
        assert!(sun.sunset().unwrap() < evening_golden.end);
        assert!(evening_golden.duration() > chrono::Duration::minutes(40));
    }

    #[test]
    fn test_photo_windows_absent_in_polar_night() {
        let anchor = Utc.with_ymd_and_hms(2024, 12, 21, 12, 0, 0).unwrap();
        let windows = get_photo_windows(&anchor, SVALBARD_LATITUDE, SVALBARD_LONGITUDE);
        assert_eq!(windows.morning_golden_hour, None);
        assert_eq!(windows.evening_golden_hour, None);
    }

    #[test]
    fn test_sun_position_at_solar_noon() {
        let anchor = New_York.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let noon = get_sun_times(&anchor, NYC_LATITUDE, NYC_LONGITUDE).solar_noon;
        let position = get_sun_position(&noon, NYC_LATITUDE, NYC_LONGITUDE);

        // 90° - 40.71° + 23.44°
        assert!((position.altitude - 72.73).abs() < 0.1, "{position:?}");
        assert!((position.azimuth - 180.0).abs() < 1.0, "{position:?}");
        assert!(position.is_above_horizon());
    }

    #[test]
    fn test_sun_position_at_sunrise_is_near_horizon_in_northeast() {
        let anchor = New_York.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let sunrise = get_sun_times(&anchor, NYC_LATITUDE, NYC_LONGITUDE)
            .sunrise()
            .unwrap();
        let position = get_sun_position(&sunrise, NYC_LATITUDE, NYC_LONGITUDE);

        assert!(position.altitude.abs() < 1.0, "{position:?}");
        assert!((45.0..70.0).contains(&position.azimuth), "{position:?}");
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(GeoCoordinate::new(40.7128, -74.0060).is_ok());
        assert!(GeoCoordinate::new(90.0, 180.0).is_ok());
        assert!(GeoCoordinate::new(-90.0, -180.0).is_ok());

        assert!(GeoCoordinate::new(91.0, 0.0).is_err());
        assert!(GeoCoordinate::new(-91.0, 0.0).is_err());
        assert!(GeoCoordinate::new(0.0, 181.0).is_err());
        assert!(GeoCoordinate::new(0.0, -360.0).is_err());
        assert!(GeoCoordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_coordinate_display() {
        let nyc = GeoCoordinate::new(NYC_LATITUDE, NYC_LONGITUDE).unwrap();
        assert_eq!(nyc.to_string(), "40.7128°N, 74.0060°W");
    }

    #[test]
    fn test_timezone_detection() {
        use chrono_tz::{America, Asia, Europe};

        assert_eq!(
            determine_timezone_from_coordinates(NYC_LATITUDE, NYC_LONGITUDE),
            America::New_York
        );
        assert_eq!(
            determine_timezone_from_coordinates(51.5074, -0.1278),
            Europe::London
        );
        assert_eq!(
            determine_timezone_from_coordinates(35.6762, 139.6503),
            Asia::Tokyo
        );
    }
}
