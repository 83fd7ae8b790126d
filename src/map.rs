//! Insertion-ordered, name-keyed container.
//!
//! [`NamedMap`] wraps [`IndexMap`] so that every container in the tree
//! (records, sections, fields, attributes) iterates in declaration order.
//! Serialized output depends on that order.
//!
//! Two insertion flavours sit side by side: [`NamedMap::insert_new`] refuses
//! a name that is already present, while [`NamedMap::insert`] overwrites it in
//! place, keeping its first position.
//!
//! ## Examples
//!
//! ```rust
//! use actdef::{NameKind, NamedMap};
//!
//! let mut map = NamedMap::new();
//! map.insert_new("first", 1, NameKind::Field).unwrap();
//! map.insert_new("second", 2, NameKind::Field).unwrap();
//! assert!(map.insert_new("first", 3, NameKind::Field).is_err());
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["first", "second"]);
//! ```

use crate::error::{Error, NameKind, Result};
use indexmap::map::Entry;
use indexmap::IndexMap;

/// An ordered map from names to values.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedMap<V>(IndexMap<String, V>);

impl<V> NamedMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        NamedMap(IndexMap::new())
    }

    /// Inserts `value` under `key` unless the key is already present.
    ///
    /// On a duplicate the map is left untouched and a
    /// [`Error::DuplicateName`] of the given `kind` is returned.
    pub fn insert_new(&mut self, key: impl Into<String>, value: V, kind: NameKind) -> Result<&mut V> {
        match self.0.entry(key.into()) {
            Entry::Occupied(entry) => Err(Error::duplicate(kind, entry.key())),
            Entry::Vacant(entry) => Ok(entry.insert(value)),
        }
    }

    /// Inserts a key-value pair, replacing any previous value.
    ///
    /// A replaced key keeps its first position. The old value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.0.insert(key.into(), value)
    }

    /// Returns the value for `key`, inserting the result of `make` first if
    /// the key is absent.
    pub fn get_or_insert_with<F>(&mut self, key: &str, make: F) -> Result<&mut V>
    where
        F: FnOnce() -> Result<V>,
    {
        if !self.0.contains_key(key) {
            let value = make()?;
            self.0.insert(key.to_string(), value);
        }
        self.0
            .get_mut(key)
            .ok_or_else(|| Error::format(format!("missing entry {key:?}")))
    }

    /// Looks a value up by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, V> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, V> {
        self.0.values()
    }

    /// Mutable values in insertion order.
    pub fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, String, V> {
        self.0.values_mut()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, V> {
        self.0.iter()
    }
}

impl<V> Default for NamedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> IntoIterator for NamedMap<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a NamedMap<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = indexmap::map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<V> FromIterator<(String, V)> for NamedMap<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        NamedMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_new_rejects_duplicates_without_change() {
        let mut map = NamedMap::new();
        map.insert_new("a", 1, NameKind::Field).unwrap();
        let err = map.insert_new("a", 2, NameKind::Field).unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut map = NamedMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        assert_eq!(map.insert("a", 10), Some(1));
        let entries: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(entries, vec![("a", 10), ("b", 2)]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut map: NamedMap<i32> = ["a", "b", "c"]
            .iter()
            .enumerate()
            .map(|(i, k)| (k.to_string(), i as i32))
            .collect();
        assert_eq!(map.remove("a"), Some(0));
        assert_eq!(map.remove("zzz"), None);
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn test_get_or_insert_with() {
        let mut map = NamedMap::new();
        *map.get_or_insert_with("n", || Ok(1)).unwrap() += 1;
        *map.get_or_insert_with("n", || Ok(100)).unwrap() += 1;
        assert_eq!(map.get("n"), Some(&3));
        assert!(map
            .get_or_insert_with("bad", || Err(Error::format("nope")))
            .is_err());
        assert!(!map.contains("bad"));
    }
}
