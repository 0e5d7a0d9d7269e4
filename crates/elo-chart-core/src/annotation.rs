// File: crates/elo-chart-core/src/annotation.rs
// Summary: Annotation tables: championship eras, events, rating categories, timeline.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Birth year used when matching ages against championship years.
/// Ages are compared directly with calendar years.
pub const BIRTH_YEAR_PLACEHOLDER: i32 = 0;

/// Inclusive span of calendar years during which a title was held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Era {
    pub start_year: i32,
    pub end_year: i32,
}

impl Era {
    pub const fn new(start_year: i32, end_year: i32) -> Self {
        Self { start_year, end_year }
    }

    /// Whether a player aged `age` falls inside this era.
    pub fn covers_age(&self, age: i32) -> bool {
        let year = BIRTH_YEAR_PLACEHOLDER + age;
        self.start_year <= year && year <= self.end_year
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Major,
    Minor,
}

impl Importance {
    /// Substrings that make an event description "major".
    pub const MARKERS: [&'static str; 5] = ["World Champion", "Champion", "record", "Peak", "2800"];

    pub fn classify(description: &str) -> Self {
        let lower = description.to_lowercase();
        let hit = Self::MARKERS.iter().any(|m| lower.contains(&m.to_lowercase()));
        if hit { Importance::Major } else { Importance::Minor }
    }
}

/// Notable achievement at a given age.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub age: i32,
    pub description: String,
}

impl Event {
    pub fn new(age: i32, description: impl Into<String>) -> Self {
        Self { age, description: description.into() }
    }

    pub fn importance(&self) -> Importance {
        Importance::classify(&self.description)
    }
}

/// Named rating band `[min_rating, max_rating)` used for background shading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingCategory {
    pub name: String,
    pub min_rating: i32,
    pub max_rating: i32,
    pub color: Rgba,
}

impl RatingCategory {
    pub fn new(name: impl Into<String>, min_rating: i32, max_rating: i32, color: Rgba) -> Self {
        Self { name: name.into(), min_rating, max_rating, color }
    }

    pub fn contains(&self, rating: i32) -> bool {
        self.min_rating <= rating && rating < self.max_rating
    }
}

/// Entity-independent dated event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub year: i32,
    pub description: String,
    pub importance: Importance,
}

impl TimelineEvent {
    pub fn new(year: i32, description: impl Into<String>, importance: Importance) -> Self {
        Self { year, description: description.into(), importance }
    }
}
