use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};

/// Known or derived quantities for one shape instance, keyed by field.
///
/// Only finite, non-negative numbers are ever stored. Anything else is
/// treated as "unknown" and dropped at insertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValueMap {
    values: BTreeMap<String, f64>,
}

/// Whether `value` may be stored in a [`ValueMap`].
pub fn is_admissible(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous value.
    /// Returns false (and stores nothing) if the value is not admissible.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) -> bool {
        if !is_admissible(value) {
            return false;
        }
        self.values.insert(key.into(), value);
        true
    }

    /// Store `value` only if `key` is absent and the value is admissible.
    /// Returns whether a write happened.
    pub fn insert_if_absent(&mut self, key: &str, value: f64) -> bool {
        if self.values.contains_key(key) || !is_admissible(value) {
            return false;
        }
        self.values.insert(key.to_string(), value);
        true
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<f64> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ValueMap {
    /// Inadmissible pairs are skipped.
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut map = ValueMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'de> Deserialize<'de> for ValueMap {
    /// Same admission rule as [`ValueMap::insert`]: negative entries are dropped.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, f64>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

/// Keys whose values were typed by the user rather than derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManualFlags {
    keys: BTreeSet<String>,
}

impl ManualFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, key: impl Into<String>) {
        self.keys.insert(key.into());
    }

    pub fn unmark(&mut self, key: &str) {
        self.keys.remove(key);
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_non_finite() {
        let mut map = ValueMap::new();
        assert!(!map.insert("a", -1.0));
        assert!(!map.insert("a", f64::NAN));
        assert!(!map.insert("a", f64::INFINITY));
        assert!(map.insert("a", 0.0));
        assert_eq!(map.get("a"), Some(0.0));
    }

    #[test]
    fn insert_if_absent_keeps_first_value() {
        let mut map = ValueMap::new();
        assert!(map.insert_if_absent("s", 4.0));
        assert!(!map.insert_if_absent("s", 5.0));
        assert_eq!(map.get("s"), Some(4.0));
    }

    #[test]
    fn from_iter_drops_invalid_pairs() {
        let map: ValueMap = [("s", 2.0), ("luas", f64::NAN), ("kel", -8.0)]
            .into_iter()
            .collect();
        assert_eq!(map.len(), 1);
        assert!(map.contains("s"));
    }

    #[test]
    fn serializes_as_plain_object() {
        let map: ValueMap = [("r", 7.0)].into_iter().collect();
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"r":7.0}"#);
    }

    #[test]
    fn deserializing_drops_negative_entries() {
        let map: ValueMap = serde_json::from_str(r#"{"a":3,"b":-2}"#).unwrap();
        assert_eq!(map.get("a"), Some(3.0));
        assert!(!map.contains("b"));
    }

    #[test]
    fn manual_flags_mark_and_unmark() {
        let mut flags = ManualFlags::new();
        flags.mark("s");
        flags.mark("luas");
        flags.unmark("s");
        assert!(!flags.contains("s"));
        assert_eq!(flags.iter().collect::<Vec<_>>(), vec!["luas"]);
    }
}
