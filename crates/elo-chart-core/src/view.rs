// File: crates/elo-chart-core/src/view.rs
// Visible ranges for a render: fixed from config or autoscaled from the data.

use crate::axis::Axis;
use crate::config::RenderConfig;
use crate::dataset::Dataset;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in dataset.entities.iter().flat_map(|e| e.samples.iter()) {
            x_min = x_min.min(s.age as f64);
            x_max = x_max.max(s.age as f64);
            y_min = y_min.min(s.rating as f64);
            y_max = y_max.max(s.rating as f64);
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        // headroom for peak callouts
        let ym = (y_max - y_min) * 0.05;
        Self { x_min, x_max, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn from_config(config: &RenderConfig, dataset: &Dataset) -> Self {
        if config.autoscale {
            return Self::from_dataset(dataset);
        }
        Self {
            x_min: config.age_range.0 as f64,
            x_max: config.age_range.1 as f64,
            y_min: config.rating_axis.0 as f64,
            y_max: config.rating_axis.1 as f64,
        }
    }

    pub fn apply_to_axes(&self, x_axis: &mut Axis, y_axis: &mut Axis) {
        x_axis.min = self.x_min;
        x_axis.max = self.x_max;
        y_axis.min = self.y_min;
        y_axis.max = self.y_max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Entity;

    #[test]
    fn autoscale_covers_all_samples() {
        let mut ds = Dataset::new();
        ds.add_entity(Entity::new("A", [(10, 2000), (30, 2400)]));
        ds.add_entity(Entity::new("B", [(16, 2600), (50, 2500)]));
        let v = ViewState::from_dataset(&ds);
        assert_eq!((v.x_min, v.x_max), (10.0, 50.0));
        assert!(v.y_min < 2000.0 && v.y_max > 2600.0);
    }

    #[test]
    fn empty_dataset_falls_back_to_unit_range() {
        let v = ViewState::from_dataset(&Dataset::new());
        assert_eq!(v, ViewState { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 });
    }

    #[test]
    fn fixed_ranges_come_from_config() {
        let v = ViewState::from_config(&RenderConfig::default(), &Dataset::grandmasters());
        assert_eq!((v.x_min, v.x_max, v.y_min, v.y_max), (10.0, 60.0, 2100.0, 2950.0));
    }
}
