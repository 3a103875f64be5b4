use crate::model::ScoredItem;
use serde::{Deserialize, Serialize};

/// Substituted when an item carries no food type.
pub const DEFAULT_FOOD_PLACEHOLDER: &str = "cuisine";

/// One stop of a generated itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based, in rank order.
    pub day: usize,
    pub item_id: String,
    pub place: String,
    pub score: f64,
    pub activities: Vec<String>,
}

/// Derived day-by-day plan. Regenerated wholesale, never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub days: Vec<ItineraryDay>,
}

impl Itinerary {
    pub fn is_empty(&self) -> bool { self.days.is_empty() }
    pub fn len(&self) -> usize { self.days.len() }

    /// `Day N — place: activity · activity`
    pub fn summary_lines(&self) -> Vec<String> {
        self.days
            .iter()
            .map(|d| format!("Day {} — {}: {}", d.day, d.place, d.activities.join(" · ")))
            .collect()
    }
}

/// Materializes already-ranked entries into numbered days.
pub(crate) fn materialize(ranked: &[ScoredItem<'_>], food_placeholder: &str) -> Itinerary {
    let days = ranked
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let food = s.item.food_type().unwrap_or(food_placeholder);
            ItineraryDay {
                day: idx + 1,
                item_id: s.item.id().to_string(),
                place: s.item.name().to_string(),
                score: s.score,
                activities: vec![
                    format!("Explore {} highlights", s.item.name()),
                    format!("Try local {food}"),
                ],
            }
        })
        .collect();
    Itinerary { days }
}
