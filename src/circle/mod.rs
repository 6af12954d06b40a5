//! # Unit Circle Module
//!
//! Points on a circle centred at the origin, and the slope of the ray through
//! them.
//!
//! ## Coordinate Convention
//!
//! - **X-axis**: angle 0, pointing right
//! - **Y-axis**: angle π/2, pointing up
//! - Angles grow counter-clockwise
//!
//! A point at angle θ on a circle of radius `r` is `(r·cos θ, r·sin θ)`, so on
//! the unit circle its coordinates are exactly the cosine and sine of θ.
//!
//! ## Examples
//!
//! ```rust
//! use trigcraft::circle::unit_circle_point;
//! use std::f64::consts::PI;
//!
//! let top = unit_circle_point(PI / 2.0);
//! assert!(top.x.abs() < 1e-15);
//! assert!((top.y - 1.0).abs() < 1e-15);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::TANGENT_EPSILON;
use crate::series::{SampleDomain, SamplePoint, SampledSeries};
use crate::{ensure_finite, ensure_non_negative, Result, TrigValue};

/// A point on a circle centred at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitCirclePoint {
    /// Horizontal coordinate, `r·cos θ`
    pub x: f64,
    /// Vertical coordinate, `r·sin θ`
    pub y: f64,
}

/// Region of the plane a circle point falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// x > 0, y > 0
    I,
    /// x < 0, y > 0
    II,
    /// x < 0, y < 0
    III,
    /// x > 0, y < 0
    IV,
    /// On the x-axis (y ≈ 0)
    XAxis,
    /// On the y-axis (x ≈ 0)
    YAxis,
    /// At the origin (zero radius)
    Origin,
}

impl UnitCirclePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the origin
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle of the ray through this point, in radians within `(-π, π]`
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Slope of the ray from the origin through this point, i.e. `tan θ`
    pub fn slope(&self) -> TrigValue {
        tangent_slope(self.x, self.y)
    }

    /// Which quadrant or axis the point lies on
    ///
    /// Coordinates within [`TANGENT_EPSILON`] of zero count as lying on an axis,
    /// so `cos(π/2)` (about 6e-17) places the point on the y-axis.
    pub fn quadrant(&self) -> Quadrant {
        let on_y_axis = self.x.abs() < TANGENT_EPSILON;
        let on_x_axis = self.y.abs() < TANGENT_EPSILON;
        match (on_x_axis, on_y_axis) {
            (true, true) => Quadrant::Origin,
            (true, false) => Quadrant::XAxis,
            (false, true) => Quadrant::YAxis,
            (false, false) => match (self.x > 0.0, self.y > 0.0) {
                (true, true) => Quadrant::I,
                (false, true) => Quadrant::II,
                (false, false) => Quadrant::III,
                (true, false) => Quadrant::IV,
            },
        }
    }

    /// The two-point segment from the origin to this point, for drawing the
    /// angle arm
    pub fn arm(&self) -> SampledSeries {
        SampledSeries::from_points(vec![
            SamplePoint::new(0.0, 0.0),
            SamplePoint::new(self.x, self.y),
        ])
    }
}

/// Point at `angle_radians` on the unit circle
///
/// Returns `(cos θ, sin θ)`. Total over all reals and periodic with period 2π.
pub fn unit_circle_point(angle_radians: f64) -> UnitCirclePoint {
    let (sin, cos) = angle_radians.sin_cos();
    UnitCirclePoint { x: cos, y: sin }
}

/// Point at `angle_radians` on a circle of the given radius
///
/// Returns an error if the radius is negative or not finite.
pub fn point_on_circle(radius: f64, angle_radians: f64) -> Result<UnitCirclePoint> {
    let radius = ensure_non_negative("radius", radius)?;
    let unit = unit_circle_point(angle_radians);
    Ok(UnitCirclePoint {
        x: radius * unit.x,
        y: radius * unit.y,
    })
}

/// Slope `y / x` of the ray through `(x, y)`
///
/// When `|x|` is below [`TANGENT_EPSILON`] the ray is vertical (θ = π/2 + nπ)
/// and the slope is reported as [`TrigValue::Undefined`]. A slope that is not
/// a finite number (NaN or infinite coordinates) is `Undefined` too.
///
/// # Arguments
///
/// * `x` - Run of the ray, `cos θ` on the unit circle
/// * `y` - Rise of the ray, `sin θ` on the unit circle
///
/// # Examples
///
/// ```rust
/// use trigcraft::{tangent_slope, TrigValue};
///
/// assert_eq!(tangent_slope(2.0, 1.0), TrigValue::Defined(0.5));
/// assert_eq!(tangent_slope(0.0, 1.0).to_string(), "undefined");
/// ```
pub fn tangent_slope(x: f64, y: f64) -> TrigValue {
    if x.abs() < TANGENT_EPSILON {
        return TrigValue::Undefined;
    }
    let slope = y / x;
    if slope.is_finite() {
        TrigValue::Defined(slope)
    } else {
        TrigValue::Undefined
    }
}

/// Outline of a circle as a closed polyline
///
/// `sample_count` points are placed at evenly spaced angles over `[0, 2π]`, so
/// the first and last points coincide. Each point's `x`/`y` are the circle
/// coordinates, not an angle/value pair.
pub fn circle_outline(radius: f64, sample_count: usize) -> Result<SampledSeries> {
    let radius = ensure_non_negative("radius", radius)?;
    let angles = SampleDomain::full_turn(sample_count).inputs()?;
    Ok(angles
        .into_iter()
        .map(|theta| {
            let p = unit_circle_point(theta);
            SamplePoint::new(radius * p.x, radius * p.y)
        })
        .collect())
}

/// Point and tangent of an angle given in either unit, as shown in the
/// unit circle lesson
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleReading {
    pub angle_degrees: f64,
    pub angle_radians: f64,
    pub point: UnitCirclePoint,
    pub tangent: TrigValue,
    pub quadrant: Quadrant,
}

/// Everything the unit circle lesson displays for one angle
pub fn read_angle(angle: crate::angle::Angle) -> Result<CircleReading> {
    let radians = ensure_finite("angle", angle.to_radians())?;
    let point = unit_circle_point(radians);
    Ok(CircleReading {
        angle_degrees: angle.to_degrees(),
        angle_radians: radians,
        point,
        tangent: point.slope(),
        quadrant: point.quadrant(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::Angle;
    use std::f64::consts::PI;

    #[test]
    fn test_cardinal_points() {
        let right = unit_circle_point(0.0);
        assert_eq!(right, UnitCirclePoint::new(1.0, 0.0));

        let top = unit_circle_point(PI / 2.0);
        assert!(top.x.abs() < 1e-15);
        assert!((top.y - 1.0).abs() < 1e-15);

        let left = unit_circle_point(PI);
        assert!((left.x + 1.0).abs() < 1e-15);
        assert!(left.y.abs() < 1e-15);
    }

    #[test]
    fn test_points_lie_on_circle() {
        for i in -20..=20 {
            let theta = i as f64 * 0.37;
            let p = unit_circle_point(theta);
            assert!((p.x * p.x + p.y * p.y - 1.0).abs() < 1e-12);

            let q = point_on_circle(3.0, theta).unwrap();
            assert!((q.radius() - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_negative_radius_rejected() {
        assert!(point_on_circle(-1.0, 0.0).is_err());
        assert!(circle_outline(-0.5, 10).is_err());
    }

    #[test]
    fn test_tangent_slope() {
        assert_eq!(tangent_slope(0.0, 1.0), TrigValue::Undefined);
        assert_eq!(tangent_slope(0.0009, 1.0), TrigValue::Undefined);
        assert_eq!(tangent_slope(-0.0005, 1.0), TrigValue::Undefined);
        assert_eq!(tangent_slope(2.0, 1.0), TrigValue::Defined(0.5));
        assert_eq!(tangent_slope(f64::NAN, 1.0), TrigValue::Undefined);
        assert_eq!(tangent_slope(1.0, f64::NAN), TrigValue::Undefined);
        assert_eq!(tangent_slope(1.0, f64::INFINITY), TrigValue::Undefined);

        let at_45 = unit_circle_point(PI / 4.0).slope();
        assert!((at_45.value().unwrap() - 1.0).abs() < 1e-12);
        assert!(unit_circle_point(PI / 2.0).slope().is_undefined());
        assert!(unit_circle_point(3.0 * PI / 2.0).slope().is_undefined());
    }

    #[test]
    fn test_quadrants() {
        assert_eq!(unit_circle_point(PI / 4.0).quadrant(), Quadrant::I);
        assert_eq!(unit_circle_point(3.0 * PI / 4.0).quadrant(), Quadrant::II);
        assert_eq!(unit_circle_point(5.0 * PI / 4.0).quadrant(), Quadrant::III);
        assert_eq!(unit_circle_point(7.0 * PI / 4.0).quadrant(), Quadrant::IV);
        assert_eq!(unit_circle_point(0.0).quadrant(), Quadrant::XAxis);
        assert_eq!(unit_circle_point(PI / 2.0).quadrant(), Quadrant::YAxis);
        assert_eq!(UnitCirclePoint::new(0.0, 0.0).quadrant(), Quadrant::Origin);
    }

    #[test]
    fn test_angle_recovers_input() {
        let p = unit_circle_point(2.0);
        assert!((p.angle() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_outline_is_closed() {
        let outline = circle_outline(1.0, 73).unwrap();
        assert_eq!(outline.len(), 73);
        let first = outline.first().unwrap();
        let last = outline.last().unwrap();
        assert!((first.x - last.x).abs() < 1e-12);
        assert!((first.y - last.y).abs() < 1e-12);
        assert!(circle_outline(1.0, 1).is_err());
    }

    #[test]
    fn test_arm_runs_from_origin() {
        let arm = unit_circle_point(PI).arm();
        assert_eq!(arm.len(), 2);
        assert_eq!(arm.first(), Some(&SamplePoint::new(0.0, 0.0)));
    }

    #[test]
    fn test_read_angle_in_degrees() {
        let reading = read_angle(Angle::from_degrees(90.0)).unwrap();
        assert_eq!(reading.angle_degrees, 90.0);
        assert!((reading.point.y - 1.0).abs() < 1e-15);
        assert!(reading.tangent.is_undefined());
        assert_eq!(reading.quadrant, Quadrant::YAxis);

        assert!(read_angle(Angle::from_radians(f64::NAN)).is_err());
    }
}
