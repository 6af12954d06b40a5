//! Sampled series for charting
//!
//! Every plotted curve in a lesson is an ordered list of `(x, y)` points taken
//! over a caller-chosen domain. `SampleDomain` describes where to sample and
//! how finely, `SampledSeries` holds the result. A series is generated fresh
//! on every call; nothing here is incremental or cached.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SAMPLE_COUNT, TAU};
use crate::{ensure_finite, Result, TrigError};

/// Interval and resolution of a sampled series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleDomain {
    /// First input value
    pub start: f64,
    /// Last input value (included)
    pub end: f64,
    /// Number of evenly spaced samples, at least 2
    pub sample_count: usize,
}

impl SampleDomain {
    /// Create a new domain without validating it
    ///
    /// Validation happens when the domain is sampled, see [`SampleDomain::validate`].
    ///
    /// # Arguments
    ///
    /// * `start` - First input value
    /// * `end` - Last input value, must be greater than `start`
    /// * `sample_count` - Number of samples, at least 2
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trigcraft::SampleDomain;
    ///
    /// let domain = SampleDomain::new(-1.0, 1.0, 5);
    /// assert_eq!(domain.inputs().unwrap(), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    /// assert!(SampleDomain::new(0.0, 1.0, 1).inputs().is_err());
    /// ```
    pub fn new(start: f64, end: f64, sample_count: usize) -> Self {
        Self {
            start,
            end,
            sample_count,
        }
    }

    /// One full turn, `[0, 2π]`, at the given resolution
    pub fn full_turn(sample_count: usize) -> Self {
        Self::new(0.0, TAU, sample_count)
    }

    /// Checks that the domain can be sampled
    ///
    /// Requires finite bounds, `end > start` and at least two samples.
    pub fn validate(&self) -> Result<()> {
        if self.sample_count < 2 {
            log::debug!("rejecting sample count {}", self.sample_count);
            return Err(TrigError::InvalidSampleCount {
                count: self.sample_count,
            });
        }
        ensure_finite("start", self.start)?;
        ensure_finite("end", self.end)?;
        if self.end <= self.start {
            log::debug!("rejecting domain [{}, {}]", self.start, self.end);
            return Err(TrigError::InvalidDomain {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Distance between neighbouring samples
    ///
    /// Fails for the same domains [`SampleDomain::validate`] rejects.
    pub fn step(&self) -> Result<f64> {
        self.validate()?;
        Ok((self.end - self.start) / (self.sample_count - 1) as f64)
    }

    /// Evenly spaced inputs over `[start, end]`, both ends included
    ///
    /// Each input is interpolated from both ends, `start·(1 − t) + end·t` with
    /// `t = i / (n − 1)`, so the endpoints are exact and the midpoint of a
    /// symmetric domain is exactly zero.
    pub fn inputs(&self) -> Result<Vec<f64>> {
        self.validate()?;
        let last = (self.sample_count - 1) as f64;
        Ok((0..self.sample_count)
            .map(|i| {
                let t = i as f64 / last;
                self.start * (1.0 - t) + self.end * t
            })
            .collect())
    }

    /// Maps every input through `f` to build a series
    ///
    /// # Arguments
    ///
    /// * `f` - Function evaluated at each input from [`SampleDomain::inputs`]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trigcraft::SampleDomain;
    ///
    /// let squares = SampleDomain::new(0.0, 2.0, 3).sample(|x| x * x).unwrap();
    /// assert_eq!(squares.ys(), vec![0.0, 1.0, 4.0]);
    /// ```
    pub fn sample<F>(&self, f: F) -> Result<SampledSeries>
    where
        F: Fn(f64) -> f64,
    {
        let inputs = self.inputs()?;
        log::trace!(
            "sampling {} points over [{}, {}]",
            self.sample_count,
            self.start,
            self.end
        );
        Ok(inputs
            .into_iter()
            .map(|x| SamplePoint::new(x, f(x)))
            .collect())
    }
}

impl Default for SampleDomain {
    fn default() -> Self {
        Self::full_turn(DEFAULT_SAMPLE_COUNT)
    }
}

/// One `(x, y)` sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Input value
    pub x: f64,
    /// Output value
    pub y: f64,
}

impl SamplePoint {
    /// Create a sample from an input and its output
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ordered sequence of samples ready to plot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampledSeries {
    points: Vec<SamplePoint>,
}

impl SampledSeries {
    /// Create a series from already computed points
    pub fn from_points(points: Vec<SamplePoint>) -> Self {
        Self { points }
    }

    /// Samples in ascending input order
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&SamplePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&SamplePoint> {
        self.points.last()
    }

    /// Iterate over the samples in order
    pub fn iter(&self) -> std::slice::Iter<'_, SamplePoint> {
        self.points.iter()
    }

    /// Input column, as charting libraries usually want separate arrays
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Output column
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Smallest and largest output, `None` for an empty series
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.points.iter().map(|p| p.y);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Keep only the samples matching the predicate
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&SamplePoint) -> bool,
    {
        self.points.retain(predicate);
    }

    pub fn into_points(self) -> Vec<SamplePoint> {
        self.points
    }
}

impl FromIterator<SamplePoint> for SampledSeries {
    fn from_iter<I: IntoIterator<Item = SamplePoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SampledSeries {
    type Item = SamplePoint;
    type IntoIter = std::vec::IntoIter<SamplePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a SampledSeries {
    type Item = &'a SamplePoint;
    type IntoIter = std::slice::Iter<'a, SamplePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_inputs_are_evenly_spaced_and_inclusive() {
        let domain = SampleDomain::new(0.0, 1.0, 5);
        let inputs = domain.inputs().unwrap();
        assert_eq!(inputs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_full_turn_ends_exactly_at_tau() {
        let inputs = SampleDomain::full_turn(7).inputs().unwrap();
        assert_eq!(inputs.len(), 7);
        assert_eq!(inputs[0], 0.0);
        assert_eq!(*inputs.last().unwrap(), 2.0 * PI);
        assert!(inputs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_symmetric_domain_hits_zero_exactly() {
        let inputs = SampleDomain::new(-2.0 * PI, 2.0 * PI, 401).inputs().unwrap();
        assert_eq!(inputs[200], 0.0);
        assert_eq!(inputs[0], -2.0 * PI);
        assert_eq!(inputs[400], 2.0 * PI);
        assert!(inputs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_step_rejects_invalid_domain() {
        assert_eq!(SampleDomain::new(0.0, 1.0, 5).step(), Ok(0.25));
        assert_eq!(
            SampleDomain::new(0.0, 1.0, 1).step(),
            Err(TrigError::InvalidSampleCount { count: 1 })
        );
        assert!(SampleDomain::new(1.0, 0.0, 5).step().is_err());
    }

    #[test]
    fn test_rejects_too_few_samples() {
        for count in [0, 1] {
            let err = SampleDomain::new(0.0, 1.0, count).validate().unwrap_err();
            assert_eq!(err, TrigError::InvalidSampleCount { count });
        }
        assert!(SampleDomain::new(0.0, 1.0, 2).validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_or_reversed_domain() {
        assert_eq!(
            SampleDomain::new(1.0, 1.0, 10).validate(),
            Err(TrigError::InvalidDomain {
                start: 1.0,
                end: 1.0
            })
        );
        assert!(matches!(
            SampleDomain::new(2.0, -2.0, 10).inputs(),
            Err(TrigError::InvalidDomain { .. })
        ));
        assert!(matches!(
            SampleDomain::new(0.0, f64::NAN, 10).validate(),
            Err(TrigError::NonFinite { name: "end", .. })
        ));
    }

    #[test]
    fn test_sample_maps_function() {
        let series = SampleDomain::new(-1.0, 1.0, 3).sample(|x| x * x).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.xs(), vec![-1.0, 0.0, 1.0]);
        assert_eq!(series.ys(), vec![1.0, 0.0, 1.0]);
        assert_eq!(series.y_range(), Some((0.0, 1.0)));
    }

    #[test]
    fn test_series_helpers() {
        let mut series: SampledSeries = (0..4)
            .map(|i| SamplePoint::new(i as f64, -(i as f64)))
            .collect();
        assert_eq!(series.first(), Some(&SamplePoint::new(0.0, 0.0)));
        assert_eq!(series.last(), Some(&SamplePoint::new(3.0, -3.0)));

        series.retain(|p| p.x != 0.0);
        assert_eq!(series.len(), 3);
        assert_eq!((&series).into_iter().count(), 3);

        assert!(SampledSeries::default().is_empty());
        assert_eq!(SampledSeries::default().y_range(), None);
    }

    #[test]
    fn test_series_serializes_as_point_list() {
        let series = SampledSeries::from_points(vec![SamplePoint::new(0.0, 1.0)]);
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, r#"{"points":[{"x":0.0,"y":1.0}]}"#);
    }
}
