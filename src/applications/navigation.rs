//! Wind triangle
//!
//! Simplified vector model of an aircraft flying a course through wind. The
//! wind is split into a crosswind and an along-track component, from which
//! the drift angle, the heading correction and the resulting ground speed
//! follow directly. No iterative solving is done.
//!
//! Directions are measured from the aircraft's course: a wind direction of 0
//! blows along the course (pure tailwind), π/2 blows across it from left to
//! right, π is a pure headwind.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::angle::radians_to_degrees;
use crate::{ensure_finite, ensure_non_negative, Result};

/// Result of resolving a wind triangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindTriangle {
    /// Angle between the course and the actual track, in degrees. Positive
    /// when the wind pushes the aircraft to the right.
    pub drift_angle_degrees: f64,
    /// Heading offset needed to cancel the drift, in degrees
    pub heading_correction_degrees: f64,
    /// Speed over the ground
    pub ground_speed: f64,
    /// Wind component perpendicular to the course
    pub crosswind: f64,
    /// Wind component along the course, positive for a tailwind
    pub along_track_wind: f64,
}

/// Drift of an aircraft flying at `airspeed` through wind of `wind_speed`
/// blowing at `wind_direction_radians` relative to its course
///
/// The drift angle is `atan2(w·sin d, airspeed)` converted to degrees. Speeds
/// must be non-negative; any consistent speed unit works.
///
/// # Arguments
///
/// * `airspeed` - Speed of the aircraft through the air
/// * `wind_speed` - Speed of the wind
/// * `wind_direction_radians` - Direction the wind blows toward, measured from the course
///
/// # Examples
///
/// ```rust
/// use trigcraft::applications::wind_triangle_drift;
/// use std::f64::consts::FRAC_PI_2;
///
/// // Crosswind as strong as the airspeed drifts the track by 45 degrees
/// let triangle = wind_triangle_drift(100.0, 100.0, FRAC_PI_2).unwrap();
/// assert!((triangle.drift_angle_degrees - 45.0).abs() < 1e-9);
/// assert!(wind_triangle_drift(-5.0, 10.0, 0.0).is_err());
/// ```
pub fn wind_triangle_drift(
    airspeed: f64,
    wind_speed: f64,
    wind_direction_radians: f64,
) -> Result<WindTriangle> {
    let airspeed = ensure_non_negative("airspeed", airspeed)?;
    let wind_speed = ensure_non_negative("wind speed", wind_speed)?;
    let direction = ensure_finite("wind direction", wind_direction_radians)?;

    // x along the course, y to the right of it
    let (sin_d, cos_d) = direction.sin_cos();
    let wind = Vector2::new(wind_speed * cos_d, wind_speed * sin_d);
    let air = Vector2::new(airspeed, 0.0);
    let ground = air + wind;

    let drift_angle_degrees = radians_to_degrees(wind.y.atan2(airspeed));

    log::debug!(
        "wind triangle: airspeed={} wind={}@{:.4} rad -> drift {:.3} deg",
        airspeed,
        wind_speed,
        direction,
        drift_angle_degrees
    );

    Ok(WindTriangle {
        drift_angle_degrees,
        heading_correction_degrees: -drift_angle_degrees,
        ground_speed: ground.norm(),
        crosswind: wind.y,
        along_track_wind: wind.x,
    })
}
