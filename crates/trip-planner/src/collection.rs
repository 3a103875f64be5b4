//! Reorderable, identifier-unique list shared by every list-editing page.
//!
//! A drag-and-drop reorder is a single `move_item(from, to)`: the source index
//! captured at drag start, the destination index at drop.

use crate::error::{PlannerError, Result};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Anything with a stable, unique identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderedCollection<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified> OrderedCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `items` in their current order, rejecting repeated identifiers.
    pub fn from_vec(items: Vec<T>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(PlannerError::DuplicateId(item.id().to_string()));
            }
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn get(&self, index: usize) -> Option<&T> { self.items.get(index) }
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.items.iter() }
    pub fn as_slice(&self) -> &[T] { &self.items }
    pub fn into_vec(self) -> Vec<T> { self.items }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.position_of(id).is_some()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Prepends `item`. Fails if its identifier is already present.
    pub fn insert_front(&mut self, item: T) -> Result<()> {
        if self.contains_id(item.id()) {
            return Err(PlannerError::DuplicateId(item.id().to_string()));
        }
        self.items.insert(0, item);
        Ok(())
    }

    /// Removes the item with `id`, returning it. Absent ids are a no-op.
    pub fn remove_by_id(&mut self, id: &str) -> Option<T> {
        let pos = self.position_of(id)?;
        Some(self.items.remove(pos))
    }

    /// Splices the element at `from` out and back in at `to` of the shortened list.
    ///
    /// Both indices must be in `[0, len)` before removal; otherwise nothing changes.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.items.len();
        for index in [from, to] {
            if index >= len {
                return Err(PlannerError::IndexOutOfRange { index, len });
            }
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        Ok(())
    }

    /// Stable sort; membership is unchanged.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
    }
}

impl<'a, T> IntoIterator for &'a OrderedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// Serialized as a plain array; uniqueness is re-checked on the way back in.

impl<T: Serialize> Serialize for OrderedCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for OrderedCollection<T>
where
    T: Deserialize<'de> + Identified,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        OrderedCollection::from_vec(items).map_err(de::Error::custom)
    }
}
