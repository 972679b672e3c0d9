use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::Reflect;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry {
    key: String,
    value: String,
}

/// An insertion-ordered, key-unique collection.
///
/// Entries live in internal storage, an ordered entry list plus a
/// key-to-slot lookup index. They are not own properties of the map, so
/// [`Reflect::own_keys`] over a map yields nothing no matter how many
/// entries it holds. The contents are reachable only through the
/// [`keys`](Self::keys), [`values`](Self::values), and
/// [`entries`](Self::entries) accessors.
#[derive(Clone, Debug, Default)]
pub struct AssociativeMap {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl AssociativeMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts `key` -> `value` and returns the displaced value, if any.
    /// A key that is already present keeps its original position; its
    /// value is replaced and no duplicate entry is created.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&slot) => {
                log::debug!("key {:?} already present, updating slot {}", key, slot);
                Some(std::mem::replace(&mut self.entries[slot].value, value))
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(Entry { key, value });
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Map keys in insertion order. Non-consuming; each call starts a
    /// fresh traversal.
    pub fn keys(&self) -> Keys<'_> {
        Keys {
            inner: self.entries.iter(),
        }
    }

    /// Map values in insertion order.
    pub fn values(&self) -> Values<'_> {
        Values {
            inner: self.entries.iter(),
        }
    }

    /// Key-value pairs in insertion order.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.entries.iter(),
        }
    }
}

// Map entries are internal storage, not own properties. Reflective
// enumeration has nothing to visit.
impl Reflect for AssociativeMap {
    fn own_keys(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(std::iter::empty())
    }
}

impl PartialEq for AssociativeMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for AssociativeMap {}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for AssociativeMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AssociativeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a> IntoIterator for &'a AssociativeMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl Serialize for AssociativeMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.value)?;
        }
        map.end()
    }
}

/// Iterator over map keys in insertion order.
#[derive(Clone)]
pub struct Keys<'a> {
    inner: std::slice::Iter<'a, Entry>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| entry.key.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Keys<'_> {}

/// Iterator over map values in insertion order.
#[derive(Clone)]
pub struct Values<'a> {
    inner: std::slice::Iter<'a, Entry>,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| entry.value.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Values<'_> {}

/// Iterator over map key-value pairs in insertion order.
#[derive(Clone)]
pub struct Entries<'a> {
    inner: std::slice::Iter<'a, Entry>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|entry| (entry.key.as_str(), entry.value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}
