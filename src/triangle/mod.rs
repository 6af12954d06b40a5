//! Right triangles from a hypotenuse and an angle

use serde::{Deserialize, Serialize};

use crate::circle::tangent_slope;
use crate::{ensure_finite, ensure_non_negative, Result, TrigValue};

/// Sides of a right triangle and the ratios between them
///
/// `opposite` and `adjacent` are relative to the chosen angle; they satisfy
/// `opposite² + adjacent² = hypotenuse²`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RightTriangleRatios {
    pub opposite: f64,
    pub adjacent: f64,
    pub hypotenuse: f64,
}

impl RightTriangleRatios {
    /// Opposite over hypotenuse, `Undefined` for a degenerate triangle
    pub fn sin(&self) -> TrigValue {
        ratio(self.opposite, self.hypotenuse)
    }

    /// Adjacent over hypotenuse, `Undefined` for a degenerate triangle
    pub fn cos(&self) -> TrigValue {
        ratio(self.adjacent, self.hypotenuse)
    }

    /// Opposite over adjacent
    ///
    /// Uses the same cut-off as [`tangent_slope`], so a near-vertical
    /// triangle reports an undefined tangent.
    pub fn tan(&self) -> TrigValue {
        if self.hypotenuse == 0.0 {
            return TrigValue::Undefined;
        }
        // Normalize so the cut-off does not depend on the triangle's size
        tangent_slope(
            self.adjacent / self.hypotenuse,
            self.opposite / self.hypotenuse,
        )
    }

    /// Half the product of the legs
    pub fn area(&self) -> f64 {
        0.5 * (self.opposite * self.adjacent).abs()
    }

    pub fn perimeter(&self) -> f64 {
        self.opposite.abs() + self.adjacent.abs() + self.hypotenuse
    }
}

fn ratio(numerator: f64, hypotenuse: f64) -> TrigValue {
    if hypotenuse == 0.0 {
        TrigValue::Undefined
    } else {
        TrigValue::Defined(numerator / hypotenuse)
    }
}

/// Legs of a right triangle with the given hypotenuse and angle
///
/// Returns `(h·sin θ, h·cos θ)` as opposite and adjacent. The hypotenuse
/// must be non-negative and finite.
///
/// # Examples
///
/// ```rust
/// use trigcraft::{degrees_to_radians, right_triangle_sides};
///
/// let t = right_triangle_sides(10.0, degrees_to_radians(30.0)).unwrap();
/// assert!((t.opposite - 5.0).abs() < 1e-12);
/// assert!((t.adjacent - 8.660254).abs() < 1e-6);
/// ```
pub fn right_triangle_sides(hypotenuse: f64, angle_radians: f64) -> Result<RightTriangleRatios> {
    let hypotenuse = ensure_non_negative("hypotenuse", hypotenuse)?;
    let angle_radians = ensure_finite("angle", angle_radians)?;
    let (sin, cos) = angle_radians.sin_cos();
    Ok(RightTriangleRatios {
        opposite: hypotenuse * sin,
        adjacent: hypotenuse * cos,
        hypotenuse,
    })
}
