use crate::error::{AttributeFault, PlannerError, Result};
use crate::model::{attr, Item};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Distance weight is applied at a tenth of its slider value.
pub const DISTANCE_WEIGHT_DIVISOR: f64 = 10.0;

/// Range the preference sliders offer. The engine itself accepts any finite weight.
pub const SLIDER_RANGE: RangeInclusive<f64> = 1.0..=10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightKey {
    Culture,
    Nature,
    Food,
    Budget,
    Distance,
}

impl WeightKey {
    pub const ALL: [WeightKey; 5] =
        [WeightKey::Culture, WeightKey::Nature, WeightKey::Food, WeightKey::Budget, WeightKey::Distance];

    pub fn as_str(self) -> &'static str {
        match self {
            WeightKey::Culture => "culture",
            WeightKey::Nature => "nature",
            WeightKey::Food => "food",
            WeightKey::Budget => "budget",
            WeightKey::Distance => "distance",
        }
    }
}

impl fmt::Display for WeightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named preference weights, one per slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSet {
    pub culture: f64,
    pub nature: f64,
    pub food: f64,
    pub budget: f64,
    pub distance: f64,
}

impl Default for WeightSet {
    fn default() -> Self {
        Self { culture: 5.0, nature: 5.0, food: 5.0, budget: 5.0, distance: 5.0 }
    }
}

impl WeightSet {
    pub fn get(&self, key: WeightKey) -> f64 {
        match key {
            WeightKey::Culture => self.culture,
            WeightKey::Nature => self.nature,
            WeightKey::Food => self.food,
            WeightKey::Budget => self.budget,
            WeightKey::Distance => self.distance,
        }
    }

    pub fn set(&mut self, key: WeightKey, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(PlannerError::InvalidWeight { key: key.to_string(), value });
        }
        let slot = match key {
            WeightKey::Culture => &mut self.culture,
            WeightKey::Nature => &mut self.nature,
            WeightKey::Food => &mut self.food,
            WeightKey::Budget => &mut self.budget,
            WeightKey::Distance => &mut self.distance,
        };
        *slot = value;
        Ok(())
    }

    /// Copy with every weight pulled into `SLIDER_RANGE`.
    pub fn clamped(&self) -> Self {
        let c = |v: f64| v.clamp(*SLIDER_RANGE.start(), *SLIDER_RANGE.end());
        Self {
            culture: c(self.culture), nature: c(self.nature), food: c(self.food),
            budget: c(self.budget), distance: c(self.distance),
        }
    }

    pub fn validate(&self) -> Result<()> {
        for key in WeightKey::ALL {
            let value = self.get(key);
            if !value.is_finite() {
                return Err(PlannerError::InvalidWeight { key: key.to_string(), value });
            }
        }
        Ok(())
    }
}

/// Weighted desirability of one item.
///
/// `culture·w.culture + nature·w.nature + food·w.food − cost·w.budget − distance·(w.distance / 10)`
///
/// ```
/// use trip_planner::{model::Item, score::{score, WeightSet}};
///
/// let seoul = Item::new("d1", "Seoul")
///     .with_attribute("culture", 9.0).with_attribute("nature", 3.0)
///     .with_attribute("food", 10.0).with_attribute("cost", 7.0)
///     .with_attribute("distance", 2.0);
/// assert_eq!(score(&seoul, &WeightSet::default()).unwrap(), 74.0);
/// ```
pub fn score(item: &Item, weights: &WeightSet) -> Result<f64> {
    weights.validate()?;
    let culture = required(item, attr::CULTURE)?;
    let nature = required(item, attr::NATURE)?;
    let food = required(item, attr::FOOD)?;
    let cost = required(item, attr::COST)?;
    let distance = required(item, attr::DISTANCE)?;

    Ok(culture * weights.culture
        + nature * weights.nature
        + food * weights.food
        - cost * weights.budget
        - distance * (weights.distance / DISTANCE_WEIGHT_DIVISOR))
}

fn required(item: &Item, key: &str) -> Result<f64> {
    let fault = match item.attribute(key) {
        Some(v) if v.is_finite() => return Ok(v),
        Some(_) => AttributeFault::NotFinite,
        None => AttributeFault::Missing,
    };
    Err(PlannerError::InvalidItem { id: item.id().to_string(), key: key.to_string(), fault })
}
