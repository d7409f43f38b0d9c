use chrono::{DateTime, Datelike, Duration, Timelike, Utc};

use crate::models::angle::Degrees;

/// Local mean solar time for a UTC instant and a longitude (east positive).
///
/// Shifts UTC by 4 minutes per degree of longitude and returns the day of
/// year of the shifted date together with its decimal hour. The equation of
/// time is not applied, so this can be up to ~16 minutes off apparent solar
/// time. Longitude is wrapped into [-180, 180) first.
pub fn mean_solar_time(utc: DateTime<Utc>, longitude: Degrees) -> (u32, f64) {
    let wrapped = (longitude.value() + 180.0).rem_euclid(360.0) - 180.0;
    let offset_ms = (wrapped * 240_000.0).round() as i64;
    let local = utc
        .checked_add_signed(Duration::milliseconds(offset_ms))
        .unwrap_or(utc);
    let hours = local.hour() as f64
        + local.minute() as f64 / 60.0
        + (local.second() as f64 + local.nanosecond() as f64 / 1e9) / 3600.0;
    (local.ordinal(), hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_greenwich_is_utc() {
        let t = Utc.with_ymd_and_hms(2025, 5, 21, 12, 30, 0).unwrap();
        let (day, hours) = mean_solar_time(t, Degrees(0.0));
        assert_eq!(day, 141);
        assert!((hours - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_west_longitude_runs_behind() {
        // 84.4°W is 5 h 37.6 min behind UTC
        let t = Utc.with_ymd_and_hms(2025, 5, 21, 17, 37, 36).unwrap();
        let (day, hours) = mean_solar_time(t, Degrees(-84.4));
        assert_eq!(day, 141);
        assert!((hours - 12.0).abs() < 1e-9, "hours = {hours}");
    }

    #[test]
    fn test_longitude_is_wrapped() {
        let t = Utc.with_ymd_and_hms(2025, 5, 21, 12, 0, 0).unwrap();
        assert_eq!(mean_solar_time(t, Degrees(370.0)), mean_solar_time(t, Degrees(10.0)));
        let (day, hours) = mean_solar_time(t, Degrees(1e20));
        assert!((1..=366).contains(&day));
        assert!(hours.is_finite());
    }

    #[test]
    fn test_date_rolls_over() {
        let t = Utc.with_ymd_and_hms(2025, 12, 31, 22, 0, 0).unwrap();
        let (day, hours) = mean_solar_time(t, Degrees(45.0));
        assert_eq!(day, 1);
        assert!((hours - 1.0).abs() < 1e-12);
    }
}
