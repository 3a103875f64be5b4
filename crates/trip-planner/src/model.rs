//! model.rs — shared data types for ranking and reordering
//!
//! An `Item` is the engine-facing view of a candidate (destination, flight,
//! stay). The typed page records in `records.rs` convert into it.

use crate::collection::Identified;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ── Attribute keys ───────────────────────────────────────────────────────────

pub mod attr {
    pub const CULTURE: &str = "culture";
    pub const NATURE: &str = "nature";
    pub const FOOD: &str = "food";
    pub const COST: &str = "cost";
    pub const DISTANCE: &str = "distance";

    /// Keys every item must carry to be scored.
    pub const REQUIRED: [&str; 5] = [CULTURE, NATURE, FOOD, COST, DISTANCE];
}

// ── Item ─────────────────────────────────────────────────────────────────────

/// A candidate record: stable identifier, display name and named numeric attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: String,
    name: String,
    #[serde(default)]
    attributes: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    food_type: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), attributes: BTreeMap::new(), food_type: None }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: f64) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn with_food_type(mut self, food_type: impl Into<String>) -> Self {
        self.food_type = Some(food_type.into());
        self
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn food_type(&self) -> Option<&str> { self.food_type.as_deref() }
    pub fn attributes(&self) -> &BTreeMap<String, f64> { &self.attributes }

    pub fn attribute(&self, key: &str) -> Option<f64> {
        self.attributes.get(key).copied()
    }

    /// Explicit edit; returns the previous value if any.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: f64) -> Option<f64> {
        self.attributes.insert(key.into(), value)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Identified for Item {
    fn id(&self) -> &str { Item::id(self) }
}

// ── ScoredItem ───────────────────────────────────────────────────────────────

/// An item paired with its derived score. Never persisted; recompute on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredItem<'a> {
    pub item: &'a Item,
    pub score: f64,
}
