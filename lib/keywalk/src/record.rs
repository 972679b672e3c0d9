use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::Reflect;

/// A plain string-to-string record. Every inserted key is an own
/// enumerable property, so [`Reflect::own_keys`] sees exactly the
/// inserted keys in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Sets `key` to `value`. Re-inserting an existing key overwrites its
    /// value in place without moving the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| k.as_str() == key) {
            Some((_, v)) => *v = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }
}

impl Reflect for Record {
    fn own_keys(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(self.fields.iter().map(|(k, _)| k.clone()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shortcut_record() -> Record {
        let mut record = Record::new();
        record.insert("js", "javascript");
        record.insert("cpp", "C++");
        record.insert("rb", "ruby");
        record.insert("swift", "swift by apple");
        record
    }

    #[test]
    fn test_record_own_keys_insertion_order() -> anyhow::Result<()> {
        let record = shortcut_record();
        let keys: Vec<String> = record.own_keys().collect();
        assert_eq!(keys, ["js", "cpp", "rb", "swift"]);
        Ok(())
    }

    #[test]
    fn test_record_own_keys_restartable() -> anyhow::Result<()> {
        let record = shortcut_record();
        let first: Vec<String> = record.own_keys().collect();
        let second: Vec<String> = record.own_keys().collect();
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_record_empty_enumerates_nothing() -> anyhow::Result<()> {
        let record = Record::new();
        assert!(record.is_empty());
        assert_eq!(record.own_keys().count(), 0);
        Ok(())
    }

    #[test]
    fn test_record_reinsert_updates_in_place() -> anyhow::Result<()> {
        let mut record = shortcut_record();
        record.insert("cpp", "C plus plus");
        let keys: Vec<String> = record.own_keys().collect();
        assert_eq!(keys, ["js", "cpp", "rb", "swift"]);
        assert_eq!(record.get("cpp"), Some("C plus plus"));
        assert_eq!(record.len(), 4);
        Ok(())
    }

    #[test]
    fn test_record_get_and_values() -> anyhow::Result<()> {
        let record = shortcut_record();
        assert_eq!(record.get("js"), Some("javascript"));
        assert_eq!(record.get("py"), None);
        let values: Vec<&str> = record.values().collect();
        assert_eq!(values, ["javascript", "C++", "ruby", "swift by apple"]);
        Ok(())
    }

    #[test]
    fn test_record_serialize_preserves_order() -> anyhow::Result<()> {
        let record: Record = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        let json = serde_json::to_string(&record)?;
        assert_eq!(json, r#"{"b":"2","a":"1","c":"3"}"#);
        Ok(())
    }
}
