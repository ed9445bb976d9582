//! Ordered pair collection with stable ids.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::generate_id;

/// One name/value entry of a key-value collection.
///
/// Disabled pairs are kept in the collection but excluded from the
/// effective output sent with a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    /// Stable identifier, assigned at creation.
    pub id: String,
    /// The pair name. May be empty while being edited.
    pub name: String,
    /// The pair value. May be empty or span several lines.
    pub value: String,
    /// Whether this pair is enabled
    pub enabled: bool,
}

impl Pair {
    /// Creates a new enabled pair with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_id(generate_id(), name, value, true)
    }

    /// Creates a new disabled pair with a fresh id.
    #[must_use]
    pub fn disabled(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_id(generate_id(), name, value, false)
    }

    /// Creates a pair with an explicit id.
    #[must_use]
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        enabled: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: value.into(),
            enabled,
        }
    }

    /// Returns true if both name and value are empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.value.is_empty()
    }
}

/// An ordered collection of pairs.
///
/// Order is meaningful and preserved by every serialization. Ids are unique
/// within a collection: inserting a pair whose id is empty or already taken
/// assigns it a fresh one. Deserialization applies the same rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Pair>", into = "Vec<Pair>")]
pub struct PairCollection {
    items: Vec<Pair>,
}

impl PairCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a pair, returning its (possibly reassigned) id.
    pub fn push(&mut self, mut pair: Pair) -> String {
        self.ensure_unique_id(&mut pair);
        let id = pair.id.clone();
        self.items.push(pair);
        id
    }

    /// Inserts a pair directly after the pair with the given id.
    ///
    /// # Errors
    /// Returns `PairNotFound` if `after` is not in the collection.
    pub fn insert_after(&mut self, after: &str, mut pair: Pair) -> DomainResult<String> {
        let index = self.require_position(after)?;
        self.ensure_unique_id(&mut pair);
        let id = pair.id.clone();
        self.items.insert(index + 1, pair);
        Ok(id)
    }

    /// Removes and returns the pair with the given id.
    ///
    /// # Errors
    /// Returns `PairNotFound` if no such pair exists.
    pub fn remove(&mut self, id: &str) -> DomainResult<Pair> {
        let index = self.require_position(id)?;
        Ok(self.items.remove(index))
    }

    /// Renames a pair.
    ///
    /// # Errors
    /// Returns `PairNotFound` if no such pair exists.
    pub fn rename(&mut self, id: &str, name: impl Into<String>) -> DomainResult<()> {
        self.require_mut(id)?.name = name.into();
        Ok(())
    }

    /// Replaces a pair's value.
    ///
    /// # Errors
    /// Returns `PairNotFound` if no such pair exists.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> DomainResult<()> {
        self.require_mut(id)?.value = value.into();
        Ok(())
    }

    /// Enables or disables a pair.
    ///
    /// # Errors
    /// Returns `PairNotFound` if no such pair exists.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> DomainResult<()> {
        self.require_mut(id)?.enabled = enabled;
        Ok(())
    }

    /// Flips a pair's enabled flag, returning the new state.
    ///
    /// # Errors
    /// Returns `PairNotFound` if no such pair exists.
    pub fn toggle(&mut self, id: &str) -> DomainResult<bool> {
        let pair = self.require_mut(id)?;
        pair.enabled = !pair.enabled;
        Ok(pair.enabled)
    }

    /// Moves a pair so that it ends up at `index`.
    ///
    /// # Errors
    /// Returns `PairNotFound` for an unknown id and `IndexOutOfRange` when
    /// `index` is not a valid position.
    pub fn move_to(&mut self, id: &str, index: usize) -> DomainResult<()> {
        let from = self.require_position(id)?;
        if index >= self.items.len() {
            return Err(DomainError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let pair = self.items.remove(from);
        self.items.insert(index, pair);
        Ok(())
    }

    /// Returns the pair with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Pair> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Returns the position of the pair with the given id.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|p| p.id == id)
    }

    /// Returns an iterator over all pairs in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.items.iter()
    }

    /// Returns an iterator over enabled pairs.
    pub fn enabled(&self) -> impl Iterator<Item = &Pair> {
        self.items.iter().filter(|p| p.enabled)
    }

    /// Returns all pairs (enabled and disabled).
    #[must_use]
    pub fn all(&self) -> &[Pair] {
        &self.items
    }

    /// Returns the number of pairs.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no pairs.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn ensure_unique_id(&self, pair: &mut Pair) {
        if pair.id.is_empty() || self.get(&pair.id).is_some() {
            pair.id = generate_id();
        }
    }

    fn require_position(&self, id: &str) -> DomainResult<usize> {
        self.position(id)
            .ok_or_else(|| DomainError::PairNotFound(id.to_string()))
    }

    fn require_mut(&mut self, id: &str) -> DomainResult<&mut Pair> {
        self.items
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::PairNotFound(id.to_string()))
    }
}

impl FromIterator<Pair> for PairCollection {
    fn from_iter<T: IntoIterator<Item = Pair>>(iter: T) -> Self {
        let mut seen = HashSet::new();
        let items = iter
            .into_iter()
            .map(|mut pair| {
                if pair.id.is_empty() || seen.contains(&pair.id) {
                    pair.id = generate_id();
                }
                seen.insert(pair.id.clone());
                pair
            })
            .collect();
        Self { items }
    }
}

impl From<Vec<Pair>> for PairCollection {
    fn from(items: Vec<Pair>) -> Self {
        items.into_iter().collect()
    }
}

impl From<PairCollection> for Vec<Pair> {
    fn from(pairs: PairCollection) -> Self {
        pairs.items
    }
}

impl<'a> IntoIterator for &'a PairCollection {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for PairCollection {
    type Item = Pair;
    type IntoIter = std::vec::IntoIter<Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
