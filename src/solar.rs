//! Sunrise/sunset calculation for a single (location, date) pair.
//!
//! Delegates the astronomy to the `sunrise` crate and converts the UTC
//! instants into the location's timezone. Dates inside polar day or polar
//! night (where the sun never crosses the horizon) are detected up front
//! with the hour-angle test and reported as `None` instead of an error, so
//! one polar date never sinks a whole-year table.
//!
//! The calculation sits behind [`SunCalculator`] so tests can substitute a
//! deterministic implementation.

use anyhow::{Result, anyhow};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use sunrise::{Coordinates, SolarDay, SolarEvent};

use crate::geo::Location;

/// Sunrise and sunset for one day, in the location's local timezone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySun {
    pub sunrise: NaiveTime,
    pub sunset: NaiveTime,
}

impl DaySun {
    /// Zero-padded 24-hour clock string, e.g. "06:47".
    pub fn sunrise_clock(&self) -> String {
        self.sunrise.format("%H:%M").to_string()
    }

    pub fn sunset_clock(&self) -> String {
        self.sunset.format("%H:%M").to_string()
    }

    /// Decimal hours for plotting: hour + minute/60, seconds ignored.
    pub fn sunrise_decimal(&self) -> f64 {
        decimal_hour(self.sunrise)
    }

    pub fn sunset_decimal(&self) -> f64 {
        decimal_hour(self.sunset)
    }
}

/// Convert a clock time to decimal hours (hour + minute/60).
pub fn decimal_hour(time: NaiveTime) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0
}

/// A substitutable sun-time calculation capability.
pub trait SunCalculator {
    /// Compute sunrise/sunset for one date. `Ok(None)` means the date falls
    /// inside polar day or polar night at this latitude.
    fn day_sun(&self, location: &Location, date: NaiveDate) -> Result<Option<DaySun>>;
}

/// The default calculator, backed by the `sunrise` crate's solar ephemeris.
#[derive(Debug, Default)]
pub struct SolarEphemeris;

impl SunCalculator for SolarEphemeris {
    fn day_sun(&self, location: &Location, date: NaiveDate) -> Result<Option<DaySun>> {
        if polar_condition(location.latitude, date).is_some() {
            return Ok(None);
        }

        let coord = Coordinates::new(location.latitude, location.longitude).ok_or_else(|| {
            anyhow!(
                "Invalid coordinates: lat={:.4}, lon={:.4}",
                location.latitude,
                location.longitude
            )
        })?;
        let solar_day = SolarDay::new(coord, date);

        let sunrise_utc = solar_day.event_time(SolarEvent::Sunrise);
        let sunset_utc = solar_day.event_time(SolarEvent::Sunset);

        Ok(Some(DaySun {
            sunrise: sunrise_utc.with_timezone(&location.timezone).time(),
            sunset: sunset_utc.with_timezone(&location.timezone).time(),
        }))
    }
}

/// Polar day/night at this latitude and date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolarCondition {
    /// Sun never rises (polar night).
    PolarNight,
    /// Sun never sets (polar day).
    PolarDay,
}

/// Hour-angle test for polar conditions.
///
/// With solar declination δ and latitude φ, the sunrise hour angle H
/// satisfies cos H = -tan φ · tan δ. When that value leaves [-1, 1] the
/// sun never crosses the horizon that day.
pub fn polar_condition(latitude: f64, date: NaiveDate) -> Option<PolarCondition> {
    let declination = solar_declination(date.ordinal() as i32);
    let cos_hour_angle = -latitude.to_radians().tan() * declination.to_radians().tan();

    if cos_hour_angle > 1.0 {
        Some(PolarCondition::PolarNight)
    } else if cos_hour_angle < -1.0 {
        Some(PolarCondition::PolarDay)
    } else {
        None
    }
}

/// Approximate solar declination in degrees for a day-of-year.
fn solar_declination(day_of_year: i32) -> f64 {
    const EARTH_AXIAL_TILT: f64 = 23.45;
    EARTH_AXIAL_TILT * (360.0 / 365.0 * (284 + day_of_year) as f64).to_radians().sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Location;

    fn paris() -> Location {
        Location {
            name: "Paris".to_string(),
            country: "France".to_string(),
            timezone: chrono_tz::Europe::Paris,
            latitude: 48.856614,
            longitude: 2.352222,
        }
    }

    fn longyearbyen() -> Location {
        Location {
            name: "Longyearbyen".to_string(),
            country: "Norway".to_string(),
            timezone: chrono_tz::Arctic::Longyearbyen,
            latitude: 78.2232,
            longitude: 15.64689,
        }
    }

    #[test]
    fn test_paris_summer_solstice() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let sun = SolarEphemeris.day_sun(&paris(), date).unwrap().unwrap();

        // Near the solstice at mid-northern latitude the day exceeds 15 hours
        let day_length = sun.sunset_decimal() - sun.sunrise_decimal();
        assert!(
            day_length > 15.0,
            "expected >15h day, got {day_length:.2}h ({} - {})",
            sun.sunrise_clock(),
            sun.sunset_clock()
        );
        assert!(sun.sunrise_decimal() < sun.sunset_decimal());
        assert!((0.0..24.0).contains(&sun.sunrise_decimal()));
        assert!((0.0..24.0).contains(&sun.sunset_decimal()));
    }

    #[test]
    fn test_paris_winter_day_is_short() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
        let sun = SolarEphemeris.day_sun(&paris(), date).unwrap().unwrap();

        let day_length = sun.sunset_decimal() - sun.sunrise_decimal();
        assert!(day_length < 9.5, "expected short winter day, got {day_length:.2}h");
    }

    #[test]
    fn test_clock_string_format() {
        let sun = DaySun {
            sunrise: NaiveTime::from_hms_opt(6, 5, 42).unwrap(),
            sunset: NaiveTime::from_hms_opt(21, 30, 3).unwrap(),
        };
        assert_eq!(sun.sunrise_clock(), "06:05");
        assert_eq!(sun.sunset_clock(), "21:30");
    }

    #[test]
    fn test_decimal_hour_ignores_seconds() {
        let t = NaiveTime::from_hms_opt(6, 30, 59).unwrap();
        assert!((decimal_hour(t) - 6.5).abs() < 1e-9);
    }

    #[test]
    fn test_polar_night_detected() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
        assert_eq!(
            polar_condition(78.2232, date),
            Some(PolarCondition::PolarNight)
        );
        let result = SolarEphemeris.day_sun(&longyearbyen(), date).unwrap();
        assert!(result.is_none(), "mid-winter Svalbard has no sunrise");
    }

    #[test]
    fn test_polar_day_detected() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        assert_eq!(polar_condition(78.2232, date), Some(PolarCondition::PolarDay));
    }

    #[test]
    fn test_no_polar_condition_at_mid_latitudes() {
        for month in 1..=12u32 {
            let date = NaiveDate::from_ymd_opt(2024, month, 15).unwrap();
            assert_eq!(polar_condition(48.8566, date), None, "month {month}");
            assert_eq!(polar_condition(-33.8688, date), None, "month {month}");
        }
    }

    #[test]
    fn test_southern_hemisphere_polar_night_is_in_june() {
        let june = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let december = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
        assert_eq!(polar_condition(-80.0, june), Some(PolarCondition::PolarNight));
        assert_eq!(polar_condition(-80.0, december), Some(PolarCondition::PolarDay));
    }
}
