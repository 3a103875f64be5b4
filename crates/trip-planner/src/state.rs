//! state.rs — explicit planner state and its JSON export document
//!
//! The browser app keeps one key per page in local storage and exports them all
//! as a single JSON object. `PlannerState` is that object made explicit: callers
//! load it, mutate it through these methods and persist it themselves.

use crate::collection::{Identified, OrderedCollection};
use crate::error::{PlannerError, Result};
use crate::itinerary::Itinerary;
use crate::model::Item;
use crate::planner::RankingEngine;
use crate::records::{
    sample_accommodations, sample_destinations, sample_flights, Accommodation, Destination, Flight,
};
use crate::score::WeightSet;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

pub const KEY_FLIGHTS: &str = "tp_flights";
pub const KEY_PLACES: &str = "tp_places";
pub const KEY_DESTINATIONS: &str = "tp_destinations";
pub const KEY_PREFS: &str = "tp_prefs";
pub const KEY_TRIP: &str = "tp_trip";
pub const KEY_SELECTED_FLIGHT: &str = "tp_selected_flight";

const DEFAULT_MESSAGE: &str = "안녕하세요";

// ── TripInfo ─────────────────────────────────────────────────────────────────

/// Trip dates and the free-text note from the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripInfo {
    #[serde(rename = "from")]
    start: Option<NaiveDate>,
    #[serde(rename = "to")]
    end: Option<NaiveDate>,
    pub message: String,
}

impl Default for TripInfo {
    fn default() -> Self {
        Self { start: None, end: None, message: DEFAULT_MESSAGE.to_string() }
    }
}

impl TripInfo {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self> {
        let mut trip = Self::default();
        trip.set_dates(start, end)?;
        Ok(trip)
    }

    pub fn set_dates(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<()> {
        check_range(start, end)?;
        self.start = start;
        self.end = end;
        Ok(())
    }

    pub fn start(&self) -> Option<NaiveDate> { self.start }
    pub fn end(&self) -> Option<NaiveDate> { self.end }

    /// Nights between start and end, when both are set.
    pub fn nights(&self) -> Option<i64> {
        Some((self.end? - self.start?).num_days())
    }
}

fn check_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<()> {
    match (start, end) {
        (Some(s), Some(e)) if e < s => {
            Err(PlannerError::InvalidDateRange { start: s.to_string(), end: e.to_string() })
        }
        _ => Ok(()),
    }
}

// ── PlannerState ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannerState {
    #[serde(rename = "tp_flights")]
    pub flights: OrderedCollection<Flight>,
    #[serde(rename = "tp_places")]
    pub accommodations: OrderedCollection<Accommodation>,
    #[serde(rename = "tp_destinations")]
    pub destinations: OrderedCollection<Destination>,
    #[serde(rename = "tp_prefs")]
    pub preferences: WeightSet,
    #[serde(rename = "tp_trip")]
    pub trip: TripInfo,
    #[serde(rename = "tp_selected_flight")]
    selected_flight: Option<String>,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self {
            flights: samples(sample_flights()),
            accommodations: samples(sample_accommodations()),
            destinations: samples(sample_destinations()),
            preferences: WeightSet::default(),
            trip: TripInfo::default(),
            selected_flight: None,
        }
    }
}

// Sample ids are fixed and distinct.
fn samples<T: Identified>(items: Vec<T>) -> OrderedCollection<T> {
    OrderedCollection::from_vec(items).unwrap_or_default()
}

impl PlannerState {
    /// Restores a full export document. Missing or null keys fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut state = Self::default();
        state.apply_import(json)?;
        Ok(state)
    }

    /// Pretty-printed export document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Overwrites only the keys present and non-null in `json`.
    ///
    /// The whole document is validated before anything is replaced.
    pub fn apply_import(&mut self, json: &str) -> Result<()> {
        let doc: Map<String, Value> = serde_json::from_str(json)?;

        let flights = take::<OrderedCollection<Flight>>(&doc, KEY_FLIGHTS)?;
        let accommodations = take::<OrderedCollection<Accommodation>>(&doc, KEY_PLACES)?;
        let destinations = take::<OrderedCollection<Destination>>(&doc, KEY_DESTINATIONS)?;
        let preferences = take::<WeightSet>(&doc, KEY_PREFS)?;
        let trip = take::<TripInfo>(&doc, KEY_TRIP)?;
        let selected = take::<String>(&doc, KEY_SELECTED_FLIGHT)?;

        if let Some(p) = &preferences {
            p.validate()?;
        }
        if let Some(t) = &trip {
            check_range(t.start, t.end)?;
        }

        let mut next = self.clone();
        if let Some(v) = flights { next.flights = v; }
        if let Some(v) = accommodations { next.accommodations = v; }
        if let Some(v) = destinations { next.destinations = v; }
        if let Some(v) = preferences { next.preferences = v; }
        if let Some(v) = trip { next.trip = v; }
        if let Some(v) = selected { next.selected_flight = Some(v); }

        if let Some(id) = &next.selected_flight {
            if !next.flights.contains_id(id) {
                warn!(flight = %id, "selected flight not in imported flights; clearing selection");
                next.selected_flight = None;
            }
        }

        debug!(
            keys = doc.len(),
            flights = next.flights.len(),
            accommodations = next.accommodations.len(),
            destinations = next.destinations.len(),
            "applied import"
        );
        *self = next;
        Ok(())
    }

    // ── Flight selection ─────────────────────────────────────────────────────

    pub fn select_flight(&mut self, id: &str) -> Result<()> {
        if !self.flights.contains_id(id) {
            return Err(PlannerError::UnknownId(id.to_string()));
        }
        self.selected_flight = Some(id.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_flight = None;
    }

    pub fn selected_flight(&self) -> Option<&Flight> {
        self.selected_flight.as_deref().and_then(|id| self.flights.find(id))
    }

    // ── Idempotent removals ──────────────────────────────────────────────────

    pub fn remove_flight(&mut self, id: &str) -> Option<Flight> {
        let removed = self.flights.remove_by_id(id);
        if self.selected_flight.as_deref() == Some(id) {
            self.selected_flight = None;
        }
        removed
    }

    pub fn remove_accommodation(&mut self, id: &str) -> Option<Accommodation> {
        self.accommodations.remove_by_id(id)
    }

    pub fn remove_destination(&mut self, id: &str) -> Option<Destination> {
        self.destinations.remove_by_id(id)
    }

    // ── Planning ─────────────────────────────────────────────────────────────

    pub fn destination_items(&self) -> Vec<Item> {
        self.destinations.iter().map(Destination::to_item).collect()
    }

    /// Itinerary over the destinations using this state's preferences.
    pub fn plan_itinerary(&self, engine: &RankingEngine) -> Result<Itinerary> {
        engine.with_weights(self.preferences).itinerary(&self.destination_items())
    }
}

fn take<T: DeserializeOwned>(doc: &Map<String, Value>, key: &str) -> Result<Option<T>> {
    match doc.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => Ok(Some(T::deserialize(v)?)),
    }
}
