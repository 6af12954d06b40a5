//! General sinusoids `A·f(B·x + C) + D`
//!
//! `A` is the amplitude, `B` the angular frequency (wave number), `C` the
//! phase offset and `D` the vertical shift; `f` is sine or cosine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::TAU;
use crate::series::{SampleDomain, SampledSeries};
use crate::{Result, TrigValue};

/// Base function of a sinusoid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    #[default]
    #[serde(alias = "sine")]
    Sin,
    #[serde(alias = "cosine")]
    Cos,
}

impl Waveform {
    /// Get the waveform's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Waveform::Sin => "sin",
            Waveform::Cos => "cos",
        }
    }

    /// Apply the base function to an argument in radians
    pub fn apply(&self, radians: f64) -> f64 {
        match self {
            Waveform::Sin => radians.sin(),
            Waveform::Cos => radians.cos(),
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sin" | "sine" => Ok(Waveform::Sin),
            "cos" | "cosine" => Ok(Waveform::Cos),
            other => Err(format!("unknown waveform '{}', expected sin or cos", other)),
        }
    }
}

/// The four parameters of a sinusoid plus its base function
///
/// Amplitude is non-negative by convention but not enforced: a negative
/// amplitude simply mirrors the wave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParameters {
    pub amplitude: f64,
    pub angular_frequency: f64,
    /// Phase offset in radians
    pub phase: f64,
    pub vertical_shift: f64,
    pub waveform: Waveform,
}

impl WaveParameters {
    /// Creates the parameters of `A·f(B·x + C) + D`
    ///
    /// # Arguments
    ///
    /// * `amplitude` - `A`, half the peak-to-peak height
    /// * `angular_frequency` - `B`, radians of phase per unit of `x`
    /// * `phase` - `C`, phase offset in radians
    /// * `vertical_shift` - `D`, the midline
    /// * `waveform` - `f`, sine or cosine
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trigcraft::{WaveParameters, Waveform};
    ///
    /// let wave = WaveParameters::new(2.0, 1.0, 0.0, 1.0, Waveform::Cos);
    /// assert_eq!(wave.evaluate(0.0), 3.0);
    /// assert_eq!(wave.range(), (-1.0, 3.0));
    /// ```
    pub fn new(
        amplitude: f64,
        angular_frequency: f64,
        phase: f64,
        vertical_shift: f64,
        waveform: Waveform,
    ) -> Self {
        Self {
            amplitude,
            angular_frequency,
            phase,
            vertical_shift,
            waveform,
        }
    }

    /// `sin(x)`: amplitude 1, frequency 1, no phase or shift
    pub fn unit(waveform: Waveform) -> Self {
        Self::new(1.0, 1.0, 0.0, 0.0, waveform)
    }

    /// Value of the wave at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        self.amplitude * self.waveform.apply(self.angular_frequency * x + self.phase)
            + self.vertical_shift
    }

    /// Length of one cycle, `2π / |B|`
    ///
    /// A zero frequency gives a constant wave with no period.
    pub fn period(&self) -> TrigValue {
        if self.angular_frequency == 0.0 {
            TrigValue::Undefined
        } else {
            TrigValue::Defined(TAU / self.angular_frequency.abs())
        }
    }

    /// Horizontal displacement of the wave, `-C / B`
    pub fn phase_shift(&self) -> TrigValue {
        if self.angular_frequency == 0.0 {
            TrigValue::Undefined
        } else {
            TrigValue::Defined(-self.phase / self.angular_frequency)
        }
    }

    /// Lowest and highest value the wave reaches
    pub fn range(&self) -> (f64, f64) {
        let a = self.amplitude.abs();
        (self.vertical_shift - a, self.vertical_shift + a)
    }
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self::unit(Waveform::Sin)
    }
}

/// Sample a sinusoid over a domain
///
/// Produces exactly `domain.sample_count` points with ascending, evenly
/// spaced inputs over `[start, end]`. Fails if the domain is invalid, in
/// particular if fewer than two samples are requested.
///
/// # Examples
///
/// ```rust
/// use trigcraft::{sample_wave, SampleDomain, WaveParameters, Waveform};
/// use std::f64::consts::PI;
///
/// let series = sample_wave(
///     &WaveParameters::unit(Waveform::Sin),
///     &SampleDomain::new(0.0, 2.0 * PI, 5),
/// )
/// .unwrap();
/// assert_eq!(series.len(), 5);
/// assert!((series.points()[1].y - 1.0).abs() < 1e-12);
/// ```
pub fn sample_wave(params: &WaveParameters, domain: &SampleDomain) -> Result<SampledSeries> {
    log::debug!(
        "sampling {} wave A={} B={} C={} D={} with {} samples",
        params.waveform,
        params.amplitude,
        params.angular_frequency,
        params.phase,
        params.vertical_shift,
        domain.sample_count
    );
    domain.sample(|x| params.evaluate(x))
}
