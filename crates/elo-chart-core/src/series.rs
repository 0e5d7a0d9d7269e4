// File: crates/elo-chart-core/src/series.rs
// Summary: Per-player rating series: samples, peak lookup and spline densification.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::grid::checked_grid_len;
use crate::interpolate::CubicSpline;

/// One (age, rating) observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sample {
    pub age: i32,
    pub rating: i32,
}

impl Sample {
    pub const fn new(age: i32, rating: i32) -> Self {
        Self { age, rating }
    }
}

impl From<(i32, i32)> for Sample {
    fn from((age, rating): (i32, i32)) -> Self {
        Self { age, rating }
    }
}

/// A tracked player and their samples, ordered by age.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub samples: Vec<Sample>,
}

impl Entity {
    pub fn new(name: impl Into<String>, samples: impl IntoIterator<Item = (i32, i32)>) -> Self {
        Self { name: name.into(), samples: samples.into_iter().map(Sample::from).collect() }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample with the highest rating; on ties the lowest age wins.
    pub fn peak(&self) -> Option<Sample> {
        let mut best: Option<Sample> = None;
        for s in &self.samples {
            match best {
                Some(b) if s.rating < b.rating => {}
                Some(b) if s.rating == b.rating && s.age >= b.age => {}
                _ => best = Some(*s),
            }
        }
        best
    }

    /// Min and max sampled age.
    pub fn age_span(&self) -> Option<(i32, i32)> {
        Some((self.samples.first()?.age, self.samples.last()?.age))
    }

    pub fn sample_at(&self, age: i32) -> Option<Sample> {
        self.samples
            .binary_search_by_key(&age, |s| s.age)
            .ok()
            .map(|i| self.samples[i])
    }

    /// Spline through the samples; `None` for an empty entity.
    pub fn spline(&self) -> Option<CubicSpline> {
        let pts: Vec<(f64, f64)> = self
            .samples
            .iter()
            .map(|s| (s.age as f64, s.rating as f64))
            .collect();
        CubicSpline::new(&pts)
    }

    /// Densify onto an even age grid of step `resolution` from the first to
    /// the last sampled age. Empty entity yields an empty vector.
    pub fn interpolate(&self, resolution: f64) -> Result<Vec<(f64, f64)>, ChartError> {
        if !(resolution.is_finite() && resolution > 0.0) {
            return Err(ChartError::InvalidResolution(resolution));
        }
        let Some(spline) = self.spline() else {
            return Ok(Vec::new());
        };
        let (lo, hi) = spline.x_range();
        checked_grid_len(lo, hi, resolution)?;
        Ok(spline.sample_grid(resolution))
    }

    /// Ages strictly increasing and ratings positive.
    pub fn validate(&self) -> Result<(), ChartError> {
        let invalid = |reason: String| ChartError::InvalidSamples { entity: self.name.clone(), reason };
        for w in self.samples.windows(2) {
            if w[1].age <= w[0].age {
                return Err(invalid(format!("age {} does not follow {}", w[1].age, w[0].age)));
            }
        }
        if let Some(s) = self.samples.iter().find(|s| s.rating <= 0) {
            return Err(invalid(format!("non-positive rating {} at age {}", s.rating, s.age)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_rejects_degenerate_resolution() {
        let a = Entity::new("A", [(10, 2000), (30, 2400)]);
        assert!(matches!(a.interpolate(1e-300), Err(ChartError::TooManyPoints { .. })));
        assert!(matches!(a.interpolate(1e-9), Err(ChartError::TooManyPoints { .. })));
        assert!(matches!(a.interpolate(0.0), Err(ChartError::InvalidResolution(_))));
    }

    #[test]
    fn peak_picks_max_rating() {
        let a = Entity::new("A", [(10, 2000), (20, 2500), (30, 2400)]);
        assert_eq!(a.peak(), Some(Sample::new(20, 2500)));
    }

    #[test]
    fn peak_tie_prefers_lowest_age() {
        let k = Entity::new("K", [(28, 2800), (32, 2851), (36, 2849), (40, 2851), (44, 2851)]);
        assert_eq!(k.peak(), Some(Sample::new(32, 2851)));
    }

    #[test]
    fn empty_entity_has_no_peak() {
        assert_eq!(Entity::new("E", []).peak(), None);
        assert!(Entity::new("E", []).interpolate(0.5).unwrap().is_empty());
    }

    #[test]
    fn interpolate_rejects_bad_resolution() {
        let a = Entity::new("A", [(10, 2000), (20, 2500)]);
        assert!(matches!(a.interpolate(0.0), Err(ChartError::InvalidResolution(_))));
        assert!(matches!(a.interpolate(f64::NAN), Err(ChartError::InvalidResolution(_))));
    }

    #[test]
    fn interpolate_covers_sampled_range() {
        let a = Entity::new("A", [(10, 2000), (20, 2500), (30, 2400)]);
        let dense = a.interpolate(0.5).unwrap();
        assert_eq!(dense.len(), 41);
        assert_eq!(dense[0], (10.0, 2000.0));
        assert_eq!(dense[40], (30.0, 2400.0));
    }

    #[test]
    fn validate_catches_unordered_ages() {
        let bad = Entity::new("B", [(20, 2000), (20, 2100)]);
        assert!(matches!(bad.validate(), Err(ChartError::InvalidSamples { .. })));
        let neg = Entity::new("N", [(10, 0)]);
        assert!(neg.validate().is_err());
    }

    #[test]
    fn sample_lookup_is_exact() {
        let a = Entity::new("A", [(10, 2000), (20, 2500)]);
        assert_eq!(a.sample_at(20), Some(Sample::new(20, 2500)));
        assert_eq!(a.sample_at(99), None);
    }
}
