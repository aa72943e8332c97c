//! The keyboard layout map: physical-key identifier → printed label.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A key-unique mapping from physical-key identifier to the label printed on
/// that key in the user's current layout.
///
/// Serialises as a flat JSON object (`{"KeyA": "a", "Digit0": "0"}`), the
/// shape a browser produces from `Object.fromEntries(await
/// navigator.keyboard.getLayoutMap())`.
///
/// Labels are stored exactly as the source reported them; upper-casing is the
/// resolver's job.  A missing identifier means "no layout information for this
/// key", never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutMap {
    entries: HashMap<String, String>,
}

impl LayoutMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the label for `code`, returning the previous label.
    pub fn insert(&mut self, code: impl Into<String>, label: impl Into<String>) -> Option<String> {
        self.entries.insert(code.into(), label.into())
    }

    /// Looks up `code` verbatim (case-sensitive).
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LayoutMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_is_case_sensitive() {
        let map: LayoutMap = [("KeyA", "a")].into_iter().collect();
        assert_eq!(map.get("KeyA"), Some("a"));
        assert_eq!(map.get("keya"), None);
    }

    #[test]
    fn test_insert_replaces_existing_label() {
        // Arrange
        let mut map = LayoutMap::new();
        map.insert("KeyQ", "q");

        // Act
        let previous = map.insert("KeyQ", "a");

        // Assert: keys are unique, the newest label wins
        assert_eq!(previous.as_deref(), Some("q"));
        assert_eq!(map.get("KeyQ"), Some("a"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_deserializes_from_flat_json_object() {
        let json = r#"{"KeyA": "q", "Digit0": "à", "Equal": "="}"#;

        let map: LayoutMap = serde_json::from_str(json).unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map.get("KeyA"), Some("q"));
        assert_eq!(map.get("Digit0"), Some("à"));
    }

    #[test]
    fn test_serializes_to_flat_json_object() {
        let map: LayoutMap = [("Minus", "-")].into_iter().collect();

        let json = serde_json::to_string(&map).unwrap();

        assert_eq!(json, r#"{"Minus":"-"}"#);
    }

    #[test]
    fn test_rejects_non_string_labels() {
        let result: Result<LayoutMap, _> = serde_json::from_str(r#"{"KeyA": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_map() {
        let map = LayoutMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }
}
