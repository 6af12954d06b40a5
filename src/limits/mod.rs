//! The `sin(x)/x` limit
//!
//! As `x → 0` in radians, `sin(x)/x → 1`. Measured in degrees the same ratio
//! tends to `π/180` instead, which is why calculus with trigonometric
//! functions is done in radians.
//!
//! The ratio is undefined at exactly zero. It is reported as
//! [`TrigValue::Undefined`] there, and sampled series drop the point rather
//! than filling in the limiting value.

use crate::angle::AngleUnit;
use crate::series::{SampleDomain, SampledSeries};
use crate::{Result, TrigValue};

/// Fraction of a sample step within which an input is treated as zero
const ZERO_STEP_FRACTION: f64 = 1e-9;

/// `sin(x)/x` for `x` in radians
///
/// `Undefined` at `x = 0`.
pub fn sinc_ratio(x: f64) -> TrigValue {
    sinc_ratio_in(x, AngleUnit::Radians)
}

/// `sin(x)/x` with `x` read in the given unit
///
/// The division uses `x` as given, only the sine sees the converted angle,
/// so for degrees this is `sin(x°)/x`. Non-finite inputs have no ratio
/// either and are `Undefined` as well.
///
/// # Arguments
///
/// * `x` - Input value, read in `unit`
/// * `unit` - Unit the sine interprets `x` in
///
/// # Examples
///
/// ```rust
/// use trigcraft::angle::AngleUnit;
/// use trigcraft::limits::sinc_ratio_in;
///
/// let radians = sinc_ratio_in(0.001, AngleUnit::Radians).value().unwrap();
/// assert!((radians - 1.0).abs() < 1e-6);
///
/// let degrees = sinc_ratio_in(0.001, AngleUnit::Degrees).value().unwrap();
/// assert!((degrees - std::f64::consts::PI / 180.0).abs() < 1e-9);
///
/// assert!(sinc_ratio_in(0.0, AngleUnit::Radians).is_undefined());
/// ```
pub fn sinc_ratio_in(x: f64, unit: AngleUnit) -> TrigValue {
    if x == 0.0 {
        return TrigValue::Undefined;
    }
    let ratio = unit.to_radians(x).sin() / x;
    if ratio.is_finite() {
        TrigValue::Defined(ratio)
    } else {
        TrigValue::Undefined
    }
}

/// Value `sinc_ratio_in` approaches as `x → 0` for the given unit
pub fn sinc_limit(unit: AngleUnit) -> f64 {
    unit.to_radians(1.0)
}

/// Sample `sin(x)/x` over a domain
///
/// Inputs are laid out exactly as [`SampleDomain::inputs`] does. The input
/// that lands on zero is removed, so a domain containing zero at one of its
/// sample positions yields `sample_count - 1` points. An input counts as zero
/// when it is within a billionth of a step of it, which absorbs the rounding
/// of domains whose step is not exact in binary.
pub fn sample_sinc(domain: &SampleDomain, unit: AngleUnit) -> Result<SampledSeries> {
    let zero_tolerance = domain.step()? * ZERO_STEP_FRACTION;
    let mut series = domain.sample(|x| unit.to_radians(x).sin() / x)?;
    let before = series.len();
    series.retain(|p| p.x.abs() > zero_tolerance);
    if series.len() != before {
        log::trace!("excluded x = 0 from sinc series");
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_undefined_at_zero() {
        assert_eq!(sinc_ratio(0.0), TrigValue::Undefined);
        assert_eq!(sinc_ratio(-0.0), TrigValue::Undefined);
        assert_eq!(sinc_ratio_in(0.0, AngleUnit::Degrees), TrigValue::Undefined);
    }

    #[test]
    fn test_approaches_one_in_radians() {
        let near = sinc_ratio(0.001).value().unwrap();
        assert!((near - 0.9999998).abs() < 1e-7);
        assert!((sinc_ratio(-0.001).value().unwrap() - near).abs() < 1e-15);
        assert!((sinc_ratio(PI).value().unwrap()).abs() < 1e-15);
    }

    #[test]
    fn test_degrees_approach_pi_over_180() {
        let near = sinc_ratio_in(0.001, AngleUnit::Degrees).value().unwrap();
        assert!((near - PI / 180.0).abs() < 1e-9);
        assert!((sinc_limit(AngleUnit::Degrees) - PI / 180.0).abs() < 1e-18);
        assert_eq!(sinc_limit(AngleUnit::Radians), 1.0);
    }

    #[test]
    fn test_series_excludes_zero() {
        let domain = SampleDomain::new(-10.0, 10.0, 21);
        let series = sample_sinc(&domain, AngleUnit::Radians).unwrap();
        assert_eq!(series.len(), 20);
        assert!(series.iter().all(|p| p.x != 0.0));
        assert!(series.iter().all(|p| p.y.is_finite()));
    }

    #[test]
    fn test_series_excludes_rounded_zero() {
        let turns = SampleDomain::new(-2.0 * PI, 2.0 * PI, 401);
        let series = sample_sinc(&turns, AngleUnit::Radians).unwrap();
        assert_eq!(series.len(), 400);
        assert!(series.iter().all(|p| p.y < 0.9999));

        // Step of 0.1 is not exact in binary
        let uneven = SampleDomain::new(-0.1, 0.2, 4);
        let series = sample_sinc(&uneven, AngleUnit::Radians).unwrap();
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|p| p.x.abs() > 0.05));
    }

    #[test]
    fn test_non_finite_input_is_undefined() {
        assert!(sinc_ratio(f64::NAN).is_undefined());
        assert!(sinc_ratio(f64::INFINITY).is_undefined());
        assert!(sinc_ratio_in(f64::NEG_INFINITY, AngleUnit::Degrees).is_undefined());
    }

    #[test]
    fn test_series_without_zero_keeps_every_point() {
        let domain = SampleDomain::new(-10.0, 10.0, 20);
        let series = sample_sinc(&domain, AngleUnit::Radians).unwrap();
        assert_eq!(series.len(), 20);
    }

    #[test]
    fn test_series_rejects_bad_domain() {
        assert!(sample_sinc(&SampleDomain::new(-1.0, 1.0, 1), AngleUnit::Radians).is_err());
    }
}
