//! Alternating current
//!
//! Household AC voltage is a sine wave `V(t) = Vp·sin(ωt + φ)`. Its effective
//! (RMS) value is `Vp / √2`, so a 170 V peak supply is the familiar 120 V.

use crate::constants::SQRT_2;
use crate::series::{SampleDomain, SampledSeries};
use crate::wave::{sample_wave, WaveParameters, Waveform};
use crate::Result;

/// Instantaneous voltage at time `t`
///
/// # Arguments
///
/// * `peak_voltage` - Amplitude `Vp` of the supply
/// * `angular_frequency` - `ω` in radians per second, see [`angular_frequency_hz`]
/// * `phase_radians` - Phase offset `φ`
/// * `t` - Time in seconds
///
/// # Examples
///
/// ```rust
/// use trigcraft::applications::electrical::{ac_voltage, angular_frequency_hz};
///
/// let omega = angular_frequency_hz(60.0);
/// // A quarter cycle into a 60 Hz supply the voltage peaks
/// assert!((ac_voltage(170.0, omega, 0.0, 1.0 / 240.0) - 170.0).abs() < 1e-9);
/// ```
pub fn ac_voltage(peak_voltage: f64, angular_frequency: f64, phase_radians: f64, t: f64) -> f64 {
    peak_voltage * (angular_frequency * t + phase_radians).sin()
}

/// Root-mean-square of a sinusoid with the given peak
///
/// # Examples
///
/// ```rust
/// use trigcraft::applications::rms_voltage;
///
/// assert!((rms_voltage(170.0) - 120.2).abs() < 0.01);
/// ```
pub fn rms_voltage(peak_voltage: f64) -> f64 {
    peak_voltage / SQRT_2
}

/// Voltage over a time window
pub fn sample_ac_voltage(
    peak_voltage: f64,
    angular_frequency: f64,
    phase_radians: f64,
    domain: &SampleDomain,
) -> Result<SampledSeries> {
    let params = WaveParameters::new(
        peak_voltage,
        angular_frequency,
        phase_radians,
        0.0,
        Waveform::Sin,
    );
    sample_wave(&params, domain)
}

/// Average (real) power delivered by sinusoidal voltage and current
///
/// `V_rms · I_rms · cos φ`, where φ is the phase difference between voltage
/// and current. `cos φ` is the power factor.
pub fn average_power(peak_voltage: f64, peak_current: f64, phase_difference_radians: f64) -> f64 {
    rms_voltage(peak_voltage) * rms_voltage(peak_current) * phase_difference_radians.cos()
}

/// Angular frequency for a supply frequency in hertz, `ω = 2πf`
pub fn angular_frequency_hz(frequency_hz: f64) -> f64 {
    crate::constants::TAU * frequency_hz
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_rms_of_us_mains() {
        assert!((rms_voltage(170.0) - 120.208).abs() < 1e-3);
    }

    #[test]
    fn test_instantaneous_voltage() {
        let omega = angular_frequency_hz(60.0);
        assert_eq!(ac_voltage(170.0, omega, 0.0, 0.0), 0.0);
        // Quarter period reaches the peak
        let quarter = 1.0 / 240.0;
        assert!((ac_voltage(170.0, omega, 0.0, quarter) - 170.0).abs() < 1e-9);
        // A 90 degree phase starts at the peak
        assert!((ac_voltage(170.0, omega, PI / 2.0, 0.0) - 170.0).abs() < 1e-12);
    }

    #[test]
    fn test_sampled_voltage_matches_pointwise() {
        let omega = angular_frequency_hz(50.0);
        let domain = SampleDomain::new(0.0, 0.04, 81);
        let series = sample_ac_voltage(325.0, omega, 0.3, &domain).unwrap();
        assert_eq!(series.len(), 81);
        for p in &series {
            assert!((p.y - ac_voltage(325.0, omega, 0.3, p.x)).abs() < 1e-9);
        }
        let (lo, hi) = series.y_range().unwrap();
        assert!(lo >= -325.0 && hi <= 325.0);
    }

    #[test]
    fn test_average_power() {
        // Resistive load, in phase
        assert!((average_power(170.0, 10.0, 0.0) - 850.0).abs() < 1e-9);
        // Purely reactive load delivers no real power
        assert!(average_power(170.0, 10.0, PI / 2.0).abs() < 1e-9);
    }
}
