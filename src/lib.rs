//! Trigcraft: trigonometry computation engine for interactive lessons
//!
//! This crate provides the numeric core behind trigonometry lessons: angle
//! conversion, unit circle geometry, sampled sinusoids, the `sin(x)/x` limit,
//! right triangles and a handful of applied formulas (wind drift, AC voltage,
//! solar declination). Every function is pure and returns plain values or
//! sampled series ready to be plotted by the caller.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod angle;
pub mod applications;
pub mod circle;
pub mod constants;
pub mod limits;
pub mod series;
pub mod triangle;
pub mod wave;

// Re-export commonly used types
pub use angle::{degrees_to_radians, radians_to_degrees, Angle, AngleUnit, ConversionResult};
pub use circle::{tangent_slope, unit_circle_point, UnitCirclePoint};
pub use limits::{sample_sinc, sinc_ratio};
pub use triangle::{right_triangle_sides, RightTriangleRatios};
pub use series::{SampleDomain, SamplePoint, SampledSeries};
pub use wave::{sample_wave, WaveParameters, Waveform};

/// Main error type for the trigcraft library
///
/// Only caller mistakes end up here. Points where a function is
/// mathematically undefined are reported through [`TrigValue::Undefined`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrigError {
    #[error("Invalid sample count {count}: at least 2 samples are required")]
    InvalidSampleCount { count: usize },

    #[error("Invalid sample domain [{start}, {end}]: end must be greater than start")]
    InvalidDomain { start: f64, end: f64 },

    #[error("{name} must be non-negative, got {value}")]
    NegativeLength { name: &'static str, value: f64 },

    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} = {value} is outside the range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Result type for trigcraft operations
pub type Result<T> = std::result::Result<T, TrigError>;

/// Outcome of evaluating a function that has singular points
///
/// Tangent near `x = 0` and `sin(x)/x` at zero have no numeric value.
/// Rather than leaking `NaN` or infinity into a chart axis they evaluate to
/// `Undefined`, which displays as the text `undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrigValue {
    Defined(f64),
    Undefined,
}

impl TrigValue {
    /// The numeric value, if there is one
    pub fn value(&self) -> Option<f64> {
        match self {
            TrigValue::Defined(v) => Some(*v),
            TrigValue::Undefined => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, TrigValue::Undefined)
    }
}

impl From<TrigValue> for Option<f64> {
    fn from(value: TrigValue) -> Self {
        value.value()
    }
}

impl fmt::Display for TrigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrigValue::Defined(v) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v),
                None => write!(f, "{}", v),
            },
            TrigValue::Undefined => write!(f, "undefined"),
        }
    }
}

/// Rejects NaN and infinities for a named parameter
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("rejecting non-finite {}: {}", name, value);
        Err(TrigError::NonFinite { name, value })
    }
}

/// Rejects negative (and non-finite) lengths, speeds and magnitudes
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64> {
    let value = ensure_finite(name, value)?;
    if value < 0.0 {
        log::debug!("rejecting negative {}: {}", name, value);
        return Err(TrigError::NegativeLength { name, value });
    }
    Ok(value)
}
