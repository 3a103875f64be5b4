//! trip-planner — ranking and list plumbing behind the travel planner pages
//!
//! Destinations are scored against preference sliders (`score`), ranked and
//! turned into a short itinerary (`planner`). Every list page (flights, stays,
//! destinations) shares one reorderable collection (`collection`). `state` holds
//! the whole planner document as explicit data; persisting it is the caller's job.

pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod itinerary;
pub mod model;
pub mod numeric;
pub mod planner;
pub mod records;
pub mod score;
pub mod state;

pub use crate::collection::{Identified, OrderedCollection};
pub use crate::error::{PlannerError, Result};
pub use crate::itinerary::{Itinerary, ItineraryDay};
pub use crate::model::{Item, ScoredItem};
pub use crate::planner::{build_itinerary, rank, RankingEngine, DEFAULT_ITINERARY_SIZE};
pub use crate::score::{score, WeightKey, WeightSet};
