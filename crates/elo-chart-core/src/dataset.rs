// File: crates/elo-chart-core/src/dataset.rs
// Summary: Dataset container, validation and the built-in grandmaster tables.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::annotation::{Era, Event, Importance, RatingCategory, TimelineEvent};
use crate::color::Rgba;
use crate::error::ChartError;
use crate::series::Entity;

/// Everything a render consumes. Entity order drives palette and row order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub entities: Vec<Entity>,
    pub eras: BTreeMap<String, Vec<Era>>,
    pub events: BTreeMap<String, Vec<Event>>,
    pub categories: Vec<RatingCategory>,
    pub timeline: Vec<TimelineEvent>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn eras_for(&self, name: &str) -> &[Era] {
        self.eras.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn events_for(&self, name: &str) -> &[Event] {
        self.events.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Category containing `rating`, if any.
    pub fn category_for(&self, rating: i32) -> Option<&RatingCategory> {
        self.categories.iter().find(|c| c.contains(rating))
    }

    /// Check sample ordering, unique names and contiguous categories.
    pub fn validate(&self) -> Result<(), ChartError> {
        let mut seen = HashSet::new();
        for e in &self.entities {
            if !seen.insert(e.name.as_str()) {
                return Err(ChartError::DuplicateEntity(e.name.clone()));
            }
            e.validate()?;
        }

        for c in &self.categories {
            if c.min_rating >= c.max_rating {
                return Err(ChartError::InvalidCategories(format!(
                    "'{}' has min {} >= max {}",
                    c.name, c.min_rating, c.max_rating
                )));
            }
        }
        for w in self.categories.windows(2) {
            if w[1].min_rating != w[0].max_rating {
                return Err(ChartError::InvalidCategories(format!(
                    "'{}' ends at {} but '{}' starts at {}",
                    w[0].name, w[0].max_rating, w[1].name, w[1].min_rating
                )));
            }
        }

        let mut last_year = i32::MIN;
        for t in &self.timeline {
            if t.year < last_year {
                tracing::warn!(year = t.year, "timeline events out of year order");
            }
            last_year = t.year;
        }
        Ok(())
    }

    /// Approximate rating progression of six world champions.
    pub fn grandmasters() -> Self {
        let mut ds = Dataset::new();

        let players: [(&str, &[(i32, i32)]); 6] = [
            ("Garry Kasparov", &[
                (12, 2200), (16, 2400), (20, 2595), (24, 2700),
                (28, 2800), (32, 2851), (36, 2849), (40, 2812),
                (44, 2812), (48, 2812), (52, 2812), (56, 2812),
            ]),
            ("Magnus Carlsen", &[
                (12, 2300), (16, 2570), (20, 2800), (24, 2870),
                (28, 2882), (32, 2864), (34, 2847),
            ]),
            ("Bobby Fischer", &[
                (12, 2200), (14, 2400), (16, 2580), (20, 2660),
                (24, 2760), (28, 2785), (32, 2780), (36, 2780),
                (40, 2780),
            ]),
            ("Anatoly Karpov", &[
                (16, 2450), (20, 2660), (24, 2700), (28, 2725),
                (32, 2750), (36, 2730), (40, 2730), (44, 2700),
                (48, 2670), (52, 2650), (56, 2620), (60, 2600),
            ]),
            ("Viswanathan Anand", &[
                (16, 2450), (20, 2600), (24, 2700), (28, 2750),
                (32, 2770), (36, 2790), (40, 2800), (44, 2810),
                (48, 2780), (52, 2760), (56, 2740),
            ]),
            ("Jose Raul Capablanca", &[
                (16, 2400), (20, 2550), (24, 2650), (28, 2700),
                (32, 2720), (36, 2730), (40, 2720), (44, 2700),
                (48, 2680), (52, 2650),
            ]),
        ];
        for (name, samples) in players {
            ds.add_entity(Entity::new(name, samples.iter().copied()));
        }

        let eras: [(&str, &[(i32, i32)]); 6] = [
            ("Garry Kasparov", &[(1985, 2000)]),
            ("Magnus Carlsen", &[(2013, 2023)]),
            ("Bobby Fischer", &[(1972, 1975)]),
            ("Anatoly Karpov", &[(1975, 1985), (1993, 1999)]),
            ("Viswanathan Anand", &[(2000, 2002), (2007, 2013)]),
            ("Jose Raul Capablanca", &[(1921, 1927)]),
        ];
        for (name, spans) in eras {
            let v = spans.iter().map(|&(s, e)| Era::new(s, e)).collect();
            ds.eras.insert(name.to_string(), v);
        }

        let events: [(&str, &[(i32, &str)]); 6] = [
            ("Garry Kasparov", &[
                (16, "World Junior Champion"),
                (22, "Youngest undisputed World Champion"),
                (32, "Peak rating 2851"),
                (40, "Retired from professional chess"),
            ]),
            ("Magnus Carlsen", &[
                (12, "Grandmaster title"),
                (20, "Crossed 2800"),
                (24, "World Champion"),
                (28, "All-time record 2882"),
            ]),
            ("Bobby Fischer", &[
                (14, "US Champion"),
                (20, "Perfect 11-0 US Championship"),
                (28, "Became World Champion"),
                (32, "Forfeited the title"),
            ]),
            ("Anatoly Karpov", &[
                (24, "World Champion by default"),
                (28, "Won Baguio title match"),
                (44, "Regained FIDE World Champion title"),
            ]),
            ("Viswanathan Anand", &[
                (16, "National title"),
                (32, "FIDE World Champion"),
                (40, "Won Bonn title match"),
            ]),
            ("Jose Raul Capablanca", &[
                (24, "First at San Sebastian"),
                (32, "Became World Champion"),
                (40, "Lost title to Alekhine"),
            ]),
        ];
        for (name, list) in events {
            let v = list.iter().map(|&(age, d)| Event::new(age, d)).collect();
            ds.events.insert(name.to_string(), v);
        }

        ds.categories = vec![
            RatingCategory::new("Candidate Master", 2000, 2200, Rgba::rgb(0xf2, 0xf2, 0xf2)),
            RatingCategory::new("International Master", 2200, 2400, Rgba::rgb(0xe3, 0xee, 0xf7)),
            RatingCategory::new("Grandmaster", 2400, 2500, Rgba::rgb(0xe6, 0xf4, 0xe6)),
            RatingCategory::new("Strong GM", 2500, 2600, Rgba::rgb(0xfb, 0xf3, 0xdc)),
            RatingCategory::new("Elite GM", 2600, 2700, Rgba::rgb(0xfc, 0xe8, 0xd6)),
            RatingCategory::new("Super GM", 2700, 2800, Rgba::rgb(0xf8, 0xdc, 0xdc)),
            RatingCategory::new("World-class", 2800, 2900, Rgba::rgb(0xee, 0xdc, 0xf3)),
        ];

        use Importance::{Major, Minor};
        ds.timeline = vec![
            TimelineEvent::new(1921, "Capablanca takes the title", Major),
            TimelineEvent::new(1927, "Alekhine beats Capablanca", Minor),
            TimelineEvent::new(1948, "FIDE organises the championship", Minor),
            TimelineEvent::new(1970, "FIDE adopts Elo ratings", Major),
            TimelineEvent::new(1972, "Fischer vs Spassky", Major),
            TimelineEvent::new(1975, "Karpov champion by default", Minor),
            TimelineEvent::new(1985, "Kasparov becomes champion", Major),
            TimelineEvent::new(1997, "Deep Blue beats Kasparov", Major),
            TimelineEvent::new(2000, "Kramnik wins in London", Minor),
            TimelineEvent::new(2007, "Anand undisputed champion", Minor),
            TimelineEvent::new(2013, "Carlsen becomes champion", Major),
            TimelineEvent::new(2014, "Carlsen reaches 2882", Minor),
        ];

        ds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dataset_is_valid() {
        let ds = Dataset::grandmasters();
        ds.validate().expect("built-in data validates");
        assert_eq!(ds.entities.len(), 6);
        assert_eq!(ds.entities[0].name, "Garry Kasparov");
    }

    #[test]
    fn builtin_peaks_match_tables() {
        let ds = Dataset::grandmasters();
        let peaks: Vec<_> = ds.entities.iter().map(|e| e.peak().map(|s| (s.age, s.rating))).collect();
        assert_eq!(
            peaks,
            vec![
                Some((32, 2851)),
                Some((28, 2882)),
                Some((28, 2785)),
                Some((32, 2750)),
                Some((44, 2810)),
                Some((36, 2730)),
            ]
        );
    }

    #[test]
    fn gap_between_categories_is_rejected() {
        let mut ds = Dataset::new();
        ds.categories = vec![
            RatingCategory::new("a", 2000, 2200, Rgba::WHITE),
            RatingCategory::new("b", 2300, 2400, Rgba::WHITE),
        ];
        assert!(matches!(ds.validate(), Err(ChartError::InvalidCategories(_))));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut ds = Dataset::new();
        ds.add_entity(Entity::new("A", [(10, 2000)]));
        ds.add_entity(Entity::new("A", [(12, 2100)]));
        assert!(matches!(ds.validate(), Err(ChartError::DuplicateEntity(n)) if n == "A"));
    }

    #[test]
    fn lookups_default_to_empty() {
        let ds = Dataset::grandmasters();
        assert!(ds.eras_for("Nobody").is_empty());
        assert_eq!(ds.events_for("Bobby Fischer").len(), 4);
        assert_eq!(ds.category_for(2851).map(|c| c.name.as_str()), Some("World-class"));
        assert!(ds.category_for(1500).is_none());
    }
}
