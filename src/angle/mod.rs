//! # Angle Representation Module
//!
//! Lessons accept angles either in degrees or in radians depending on the
//! mode the learner picked. The `Angle` type keeps the value in the unit it
//! was given and derives the other unit only when asked, so the degree value
//! a learner typed is returned exactly rather than after a round trip through
//! radians.
//!
//! ## Examples
//!
//! ```rust
//! use trigcraft::angle::{Angle, AngleUnit};
//!
//! let right_angle = Angle::new(90.0, AngleUnit::Degrees);
//! assert_eq!(right_angle.to_degrees(), 90.0);
//! assert!((right_angle.to_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEG2RAD, RAD2DEG};

/// Converts an angle in degrees to radians
///
/// Computes `degrees × π / 180`. Total over all reals.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * DEG2RAD
}

/// Converts an angle in radians to degrees
///
/// Computes `radians × 180 / π`. Total over all reals.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * RAD2DEG
}

/// Unit an angle was supplied in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Get the unit's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            AngleUnit::Degrees => "degrees",
            AngleUnit::Radians => "radians",
        }
    }

    /// Converts a value expressed in this unit to radians
    pub fn to_radians(&self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => degrees_to_radians(value),
            AngleUnit::Radians => value,
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Internal representation of an angle: the value in its original unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// An angular measurement tagged with its unit
///
/// Only one representation is stored. Asking for the stored unit returns the
/// original value exactly; asking for the other unit converts with the fixed
/// factor π/180.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    angle: AngleFormat,
}

impl Angle {
    /// Creates an angle from a value and the unit it is expressed in
    pub fn new(value: f64, unit: AngleUnit) -> Self {
        match unit {
            AngleUnit::Degrees => Self::from_degrees(value),
            AngleUnit::Radians => Self::from_radians(value),
        }
    }

    /// Creates an angle from a value in degrees
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trigcraft::angle::Angle;
    ///
    /// let half_turn = Angle::from_degrees(180.0);
    /// assert_eq!(half_turn.to_degrees(), 180.0);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in radians
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Returns the angle value in degrees
    ///
    /// Exact when the angle was created from degrees.
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Radians(rad) => radians_to_degrees(rad),
        }
    }

    /// Returns the angle value in radians
    ///
    /// Exact when the angle was created from radians.
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => degrees_to_radians(deg),
            AngleFormat::Radians(rad) => rad,
        }
    }

    /// Unit the angle was created in
    pub fn unit(&self) -> AngleUnit {
        match self.angle {
            AngleFormat::Degrees(_) => AngleUnit::Degrees,
            AngleFormat::Radians(_) => AngleUnit::Radians,
        }
    }

    /// Returns the internal format of this angle
    pub fn format(&self) -> AngleFormat {
        self.angle
    }

    /// Both representations of this angle
    pub fn convert(&self) -> ConversionResult {
        ConversionResult {
            degrees: self.to_degrees(),
            radians: self.to_radians(),
        }
    }
}

/// A degree value paired with its radian equivalent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub degrees: f64,
    pub radians: f64,
}

/// Converts an angle into both of its representations
pub fn convert(angle: Angle) -> ConversionResult {
    angle.convert()
}
