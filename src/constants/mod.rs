//! Constants module for trigonometric and applied calculations

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Degrees in a complete circle
pub const DEG360: f64 = 360.0;

// Singularities
/// Below this magnitude the run of a slope is treated as zero and the
/// tangent is reported as undefined
pub const TANGENT_EPSILON: f64 = 1e-3;

// Electrical
/// Peak to RMS divisor for a pure sinusoid
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;

// Solar
/// Axial tilt used by the simplified declination model, in degrees
pub const SOLAR_OBLIQUITY_DEG: f64 = 23.45;
/// Day of year of the March equinox in the simplified declination model
pub const VERNAL_EQUINOX_DAY: f64 = 81.0;
/// Days per (non-leap) year
pub const DAYS_PER_YEAR: f64 = 365.0;
/// Degrees of Earth rotation per hour
pub const DEG_PER_HOUR: f64 = 15.0;
/// Hours in a day
pub const HOURS_PER_DAY: f64 = 24.0;

// Sampling
/// Default resolution of a sampled series
pub const DEFAULT_SAMPLE_COUNT: usize = 200;
