//! records.rs — typed per-page records
//!
//! Form structs hold exactly what the user typed. `into_record()` validates at
//! the boundary and produces the typed record stored in an `OrderedCollection`.

use crate::collection::Identified;
use crate::error::Result;
use crate::model::{attr, Item};
use crate::numeric::{self, parse_amount, parse_count};
use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use uuid::Uuid;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// ── Flights ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub from: String,
    pub to: String,
    pub depart: String,
    pub arrive: String,
    #[serde(deserialize_with = "numeric::price")]
    pub price: f64,
    #[serde(rename = "duration", alias = "duration_minutes", deserialize_with = "numeric::duration")]
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightForm {
    pub airline: String,
    pub from: String,
    pub to: String,
    pub depart: String,
    pub arrive: String,
    pub price: String,
    pub duration: String,
}

impl FlightForm {
    pub fn into_record(self) -> Result<Flight> {
        Ok(Flight {
            id: new_id(),
            price: parse_amount("price", &self.price)?,
            duration_minutes: parse_count("duration", &self.duration)?,
            airline: self.airline.trim().to_string(),
            from: self.from.trim().to_string(),
            to: self.to.trim().to_string(),
            depart: self.depart.trim().to_string(),
            arrive: self.arrive.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightSortKey {
    Price,
    Duration,
}

impl FlightSortKey {
    pub fn compare(self, a: &Flight, b: &Flight) -> Ordering {
        match self {
            FlightSortKey::Price => a.price.total_cmp(&b.price),
            FlightSortKey::Duration => a.duration_minutes.cmp(&b.duration_minutes),
        }
    }
}

impl Identified for Flight {
    fn id(&self) -> &str { &self.id }
}

pub fn sample_flights() -> Vec<Flight> {
    let f = |id: &str, airline: &str, from: &str, to: &str, depart: &str, arrive: &str, price: f64, duration: u32| Flight {
        id: id.into(), airline: airline.into(), from: from.into(), to: to.into(),
        depart: depart.into(), arrive: arrive.into(), price, duration_minutes: duration,
    };
    vec![
        f("f1", "Air Seoul", "ICN", "HND", "08:30", "11:00", 120_000.0, 150),
        f("f2", "Korean Air", "ICN", "NRT", "09:00", "11:30", 150_000.0, 150),
        f("f3", "Asiana", "ICN", "SIN", "07:50", "13:40", 320_000.0, 350),
    ]
}

// ── Accommodations ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(rename = "price", alias = "price_per_night", deserialize_with = "numeric::price")]
    pub price_per_night: f64,
    #[serde(deserialize_with = "numeric::nights")]
    pub nights: u32,
    /// Written as one comma-separated string, the way the browser app stores it.
    #[serde(default, serialize_with = "joined_amenities", deserialize_with = "amenity_list")]
    pub amenities: Vec<String>,
}

impl Accommodation {
    pub fn total_price(&self) -> f64 {
        self.price_per_night * f64::from(self.nights)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccommodationForm {
    pub name: String,
    pub location: String,
    pub price: String,
    pub nights: String,
    /// Comma-separated.
    pub amenities: String,
}

impl AccommodationForm {
    pub fn into_record(self) -> Result<Accommodation> {
        Ok(Accommodation {
            id: new_id(),
            price_per_night: parse_amount("price", &self.price)?,
            nights: parse_count("nights", &self.nights)?,
            amenities: split_amenities(&self.amenities),
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
        })
    }
}

pub fn compare_by_price(a: &Accommodation, b: &Accommodation) -> Ordering {
    a.price_per_night.total_cmp(&b.price_per_night)
}

impl Identified for Accommodation {
    fn id(&self) -> &str { &self.id }
}

fn split_amenities(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Amenities {
    List(Vec<String>),
    Joined(String),
}

fn joined_amenities<S: Serializer>(list: &[String], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&list.join(", "))
}

fn amenity_list<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<String>, D::Error> {
    Ok(match Amenities::deserialize(deserializer)? {
        Amenities::List(list) => list,
        Amenities::Joined(raw) => split_amenities(&raw),
    })
}

pub fn sample_accommodations() -> Vec<Accommodation> {
    vec![
        Accommodation {
            id: "a1".into(), name: "City Hotel".into(), location: "Downtown".into(),
            price_per_night: 90_000.0, nights: 2,
            amenities: vec!["WiFi".into(), "Breakfast".into()],
        },
        Accommodation {
            id: "a2".into(), name: "Cozy Guesthouse".into(), location: "Old Town".into(),
            price_per_night: 45_000.0, nights: 3,
            amenities: vec!["Kitchen".into(), "Laundry".into()],
        },
    ]
}

// ── Destinations ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub summary: String,
    pub culture: f64,
    pub nature: f64,
    pub food: f64,
    pub cost: f64,
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_type: Option<String>,
}

impl Destination {
    /// Engine-facing view of this destination.
    pub fn to_item(&self) -> Item {
        let item = Item::new(self.id.clone(), self.name.clone())
            .with_attribute(attr::CULTURE, self.culture)
            .with_attribute(attr::NATURE, self.nature)
            .with_attribute(attr::FOOD, self.food)
            .with_attribute(attr::COST, self.cost)
            .with_attribute(attr::DISTANCE, self.distance);
        match &self.food_type {
            Some(food) => item.with_food_type(food.clone()),
            None => item,
        }
    }
}

/// Case-insensitive name order; on a case-only difference lowercase sorts first,
/// matching the browser's `localeCompare`.
pub fn compare_by_name(a: &Destination, b: &Destination) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| b.name.cmp(&a.name))
}

impl Identified for Destination {
    fn id(&self) -> &str { &self.id }
}

pub fn sample_destinations() -> Vec<Destination> {
    let d = |id: &str, name: &str, summary: &str, [culture, nature, food, cost, distance]: [f64; 5], food_type: &str| Destination {
        id: id.into(), name: name.into(), summary: summary.into(),
        culture, nature, food, cost, distance, food_type: Some(food_type.into()),
    };
    vec![
        d("d1", "서울", "도시 문화, 음식이 풍부한 대도시", [9.0, 3.0, 10.0, 7.0, 2.0], "Korean BBQ"),
        d("d2", "제주", "자연과 바다, 드라이브 코스가 매력", [6.0, 9.0, 8.0, 6.0, 6.0], "Seafood"),
        d("d3", "교토", "역사적 사찰과 전통문화", [10.0, 6.0, 8.0, 8.0, 7.0], "Kaiseki"),
        d("d4", "방콕", "저렴한 여행지, 다양한 길거리 음식", [7.0, 4.0, 9.0, 4.0, 9.0], "Street Food"),
    ]
}
