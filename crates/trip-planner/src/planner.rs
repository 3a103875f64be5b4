//! planner.rs — ranking engine
//!
//! Flow:
//!   score()            → pure weighted sum per item (score.rs)
//!   rank()             → every item scored, stable sort by score descending
//!   build_itinerary()  → top `size` ranked items materialized as numbered days

use crate::error::Result;
use crate::itinerary::{materialize, Itinerary, DEFAULT_FOOD_PLACEHOLDER};
use crate::model::{Item, ScoredItem};
use crate::score::{score, WeightSet};
use std::cmp::Ordering;
use std::num::NonZeroUsize;
use tracing::debug;

/// Number of days generated when the caller does not say otherwise.
pub const DEFAULT_ITINERARY_SIZE: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(n) => n,
    None => unreachable!(),
};

/// Scores every item and orders them by descending score.
///
/// Equal scores keep their input order. The input is never mutated.
pub fn rank<'a>(items: &'a [Item], weights: &WeightSet) -> Result<Vec<ScoredItem<'a>>> {
    let mut scored = items
        .iter()
        .map(|item| score(item, weights).map(|score| ScoredItem { item, score }))
        .collect::<Result<Vec<_>>>()?;

    // Scores are finite here. partial_cmp treats -0.0 and 0.0 as a tie,
    // and slice::sort_by is stable, so ties keep input order.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    debug!(
        candidates = scored.len(),
        top_score = scored.first().map(|s| s.score),
        "ranked items"
    );
    Ok(scored)
}

/// Builds a short itinerary from the top `size` ranked items.
///
/// An empty item list yields an empty itinerary.
pub fn build_itinerary(items: &[Item], weights: &WeightSet, size: NonZeroUsize) -> Result<Itinerary> {
    build_itinerary_with(items, weights, size, DEFAULT_FOOD_PLACEHOLDER)
}

fn build_itinerary_with(
    items: &[Item],
    weights: &WeightSet,
    size: NonZeroUsize,
    food_placeholder: &str,
) -> Result<Itinerary> {
    let ranked = rank(items, weights)?;
    let top = &ranked[..ranked.len().min(size.get())];
    let itinerary = materialize(top, food_placeholder);
    debug!(days = itinerary.len(), "built itinerary");
    Ok(itinerary)
}

/// Weights plus itinerary settings, bundled for callers that plan repeatedly.
///
/// Holds no state beyond its own fields; each call is independent.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEngine {
    pub weights: WeightSet,
    pub itinerary_size: NonZeroUsize,
    pub food_placeholder: String,
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new(WeightSet::default())
    }
}

impl RankingEngine {
    pub fn new(weights: WeightSet) -> Self {
        Self {
            weights,
            itinerary_size: DEFAULT_ITINERARY_SIZE,
            food_placeholder: DEFAULT_FOOD_PLACEHOLDER.to_string(),
        }
    }

    pub fn with_weights(&self, weights: WeightSet) -> Self {
        Self { weights, ..self.clone() }
    }

    pub fn score(&self, item: &Item) -> Result<f64> {
        score(item, &self.weights)
    }

    pub fn rank<'a>(&self, items: &'a [Item]) -> Result<Vec<ScoredItem<'a>>> {
        rank(items, &self.weights)
    }

    pub fn itinerary(&self, items: &[Item]) -> Result<Itinerary> {
        build_itinerary_with(items, &self.weights, self.itinerary_size, &self.food_placeholder)
    }
}
