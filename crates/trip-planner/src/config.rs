//! Planner configuration, read from a JSON file.
//!
//! Every field is optional in the file:
//!
//! ```json
//! { "itinerary_size": 5, "default_weights": { "culture": 8, "nature": 3, "food": 6, "budget": 4, "distance": 2 } }
//! ```

use crate::error::{PlannerError, Result};
use crate::itinerary::DEFAULT_FOOD_PLACEHOLDER;
use crate::planner::{RankingEngine, DEFAULT_ITINERARY_SIZE};
use crate::score::WeightSet;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Days generated per itinerary.
    pub itinerary_size: NonZeroUsize,
    /// Used when the planner document carries no preferences.
    pub default_weights: WeightSet,
    /// Food label for destinations without a food type.
    pub food_placeholder: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            itinerary_size: DEFAULT_ITINERARY_SIZE,
            default_weights: WeightSet::default(),
            food_placeholder: DEFAULT_FOOD_PLACEHOLDER.to_string(),
        }
    }
}

impl PlannerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.default_weights
            .validate()
            .map_err(|e| PlannerError::InvalidConfig(e.to_string()))?;
        if self.food_placeholder.trim().is_empty() {
            return Err(PlannerError::InvalidConfig("food_placeholder must not be empty".into()));
        }
        Ok(())
    }

    pub fn engine(&self) -> RankingEngine {
        RankingEngine {
            weights: self.default_weights,
            itinerary_size: self.itinerary_size,
            food_placeholder: self.food_placeholder.clone(),
        }
    }
}
