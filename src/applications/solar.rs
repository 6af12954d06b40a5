//! Solar declination and day length
//!
//! The declination follows the standard simplified model
//! `δ = 23.45° · sin(360° · (N − 81) / 365)`, where `N` is the day of the year.
//! It is an approximation good to about a degree, not an ephemeris.
//!
//! Day length comes from the sunrise hour angle, `cos ω₀ = −tan φ · tan δ`,
//! ignoring refraction and the size of the solar disc.

use chrono::{Datelike, NaiveDate};

use crate::angle::{degrees_to_radians, radians_to_degrees};
use crate::constants::{
    DAYS_PER_YEAR, DEG360, DEG_PER_HOUR, HOURS_PER_DAY, SOLAR_OBLIQUITY_DEG, VERNAL_EQUINOX_DAY,
};
use crate::series::{SampleDomain, SampledSeries};
use crate::{ensure_finite, Result, TrigError};

/// Sun's declination in degrees on the given day of the year
///
/// Day 81 (about March 22) gives zero, day 172 (around the June solstice)
/// gives close to +23.45°.
pub fn solar_declination(day_of_year: f64) -> f64 {
    SOLAR_OBLIQUITY_DEG
        * degrees_to_radians((day_of_year - VERNAL_EQUINOX_DAY) * DEG360 / DAYS_PER_YEAR).sin()
}

/// Hours between sunrise and sunset at a latitude on a day of the year
///
/// Inside the polar circles the result saturates at 24 (midnight sun) or 0
/// (polar night). Latitude must lie in `[-90, 90]` degrees.
///
/// # Arguments
///
/// * `latitude_degrees` - Observer latitude, positive north
/// * `day_of_year` - Day number, 1 for January 1st
///
/// # Examples
///
/// ```rust
/// use trigcraft::applications::daylight_hours;
///
/// // Twelve hours on the equator all year round
/// assert!((daylight_hours(0.0, 172.0).unwrap() - 12.0).abs() < 1e-9);
/// assert!(daylight_hours(95.0, 172.0).is_err());
/// ```
pub fn daylight_hours(latitude_degrees: f64, day_of_year: f64) -> Result<f64> {
    let latitude = validate_latitude(latitude_degrees)?;
    let day = ensure_finite("day of year", day_of_year)?;
    Ok(day_length(latitude, day))
}

fn validate_latitude(latitude_degrees: f64) -> Result<f64> {
    let latitude = ensure_finite("latitude", latitude_degrees)?;
    if !(-90.0..=90.0).contains(&latitude) {
        log::debug!("rejecting latitude {}", latitude);
        return Err(TrigError::OutOfRange {
            name: "latitude",
            value: latitude,
            min: -90.0,
            max: 90.0,
        });
    }
    Ok(latitude)
}

/// Day length in hours from the sunrise hour angle, `cos ω₀ = −tan φ · tan δ`
///
/// Expects an already validated latitude.
fn day_length(latitude_degrees: f64, day_of_year: f64) -> f64 {
    let phi = degrees_to_radians(latitude_degrees);
    let delta = degrees_to_radians(solar_declination(day_of_year));
    let cos_omega = -phi.tan() * delta.tan();

    if cos_omega <= -1.0 {
        HOURS_PER_DAY
    } else if cos_omega >= 1.0 {
        0.0
    } else {
        2.0 * radians_to_degrees(cos_omega.acos()) / DEG_PER_HOUR
    }
}

/// Ordinal day of the year for a calendar date, 1 for January 1st
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Declination through one year, sampled over days 1 to 365
pub fn sample_declination(sample_count: usize) -> Result<SampledSeries> {
    SampleDomain::new(1.0, DAYS_PER_YEAR, sample_count).sample(solar_declination)
}

/// Day length through one year at a fixed latitude
pub fn sample_daylight_hours(latitude_degrees: f64, sample_count: usize) -> Result<SampledSeries> {
    let latitude = validate_latitude(latitude_degrees)?;
    SampleDomain::new(1.0, DAYS_PER_YEAR, sample_count).sample(|day| day_length(latitude, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equinox_and_solstices() {
        assert!(solar_declination(81.0).abs() < 1e-12);
        // Peak lands a quarter year after the equinox
        let june = solar_declination(81.0 + 365.0 / 4.0);
        assert!((june - 23.45).abs() < 1e-9);
        let december = solar_declination(81.0 + 3.0 * 365.0 / 4.0);
        assert!((december + 23.45).abs() < 1e-9);
    }

    #[test]
    fn test_declination_stays_within_tilt() {
        let series = sample_declination(365).unwrap();
        assert_eq!(series.len(), 365);
        let (lo, hi) = series.y_range().unwrap();
        assert!(lo >= -23.45 && hi <= 23.45);
        assert!(sample_declination(1).is_err());
    }

    #[test]
    fn test_equator_has_twelve_hours() {
        for day in [1.0, 81.0, 172.0, 355.0] {
            let hours = daylight_hours(0.0, day).unwrap();
            assert!((hours - 12.0).abs() < 1e-9, "day {}", day);
        }
    }

    #[test]
    fn test_equinox_is_twelve_hours_everywhere() {
        for lat in [-60.0, -30.0, 45.0, 60.0] {
            assert!((daylight_hours(lat, 81.0).unwrap() - 12.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_summer_is_longer_in_the_north() {
        let june = daylight_hours(45.0, 172.0).unwrap();
        let december = daylight_hours(45.0, 355.0).unwrap();
        assert!(june > 15.0 && june < 16.0, "june {}", june);
        assert!(december > 8.0 && december < 9.0, "december {}", december);
        assert!((june + december - 24.0).abs() < 0.1);
    }

    #[test]
    fn test_polar_day_and_night() {
        assert_eq!(daylight_hours(80.0, 172.0).unwrap(), 24.0);
        assert_eq!(daylight_hours(80.0, 355.0).unwrap(), 0.0);
        assert_eq!(daylight_hours(-80.0, 172.0).unwrap(), 0.0);
    }

    #[test]
    fn test_latitude_out_of_range() {
        assert!(matches!(
            daylight_hours(91.0, 100.0),
            Err(TrigError::OutOfRange { name: "latitude", .. })
        ));
        assert!(sample_daylight_hours(-95.0, 10).is_err());
    }

    #[test]
    fn test_day_of_year_from_date() {
        let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(day_of_year(jan1), 1);
        let equinox = NaiveDate::from_ymd_opt(2023, 3, 22).unwrap();
        assert_eq!(day_of_year(equinox), 81);
        let leap_end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(day_of_year(leap_end), 366);
    }

    #[test]
    fn test_daylight_series_matches_pointwise() {
        let series = sample_daylight_hours(70.0, 37).unwrap();
        for p in &series {
            assert_eq!(p.y, daylight_hours(70.0, p.x).unwrap());
        }
        assert!(series.iter().any(|p| p.y == 24.0));
        assert!(series.iter().any(|p| p.y == 0.0));
        assert!(matches!(
            sample_daylight_hours(f64::NAN, 10),
            Err(TrigError::NonFinite { name: "latitude", .. })
        ));
    }

    #[test]
    fn test_daylight_series() {
        let series = sample_daylight_hours(51.5, 53).unwrap();
        assert_eq!(series.len(), 53);
        assert!(series.iter().all(|p| (0.0..=24.0).contains(&p.y)));
    }
}
