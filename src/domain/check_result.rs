//! Selector presence results
//!
//! Keys keep the position of their first insertion; inserting an existing
//! key only replaces its value. The JSON form is an object whose members
//! follow that order.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;
use std::collections::HashMap;

use crate::infrastructure::grader_error::GraderResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultMap {
    entries: Vec<(String, bool)>,
    // selector -> position in `entries`
    index: HashMap<String, usize>,
}

impl ResultMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for `selector`, overwriting any earlier value in place
    pub fn insert(&mut self, selector: &str, present: bool) {
        if let Some(&position) = self.index.get(selector) {
            self.entries[position].1 = present;
        } else {
            self.index.insert(selector.to_string(), self.entries.len());
            self.entries.push((selector.to_string(), present));
        }
    }

    pub fn get(&self, selector: &str) -> Option<bool> {
        self.index
            .get(selector)
            .map(|&position| self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(key, present)| (key.as_str(), *present))
    }

    /// Pretty JSON with a four space indent
    pub fn to_pretty_json(&self) -> GraderResult<String> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Serialize for ResultMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, present) in &self.entries {
            map.serialize_entry(key, present)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let mut results = ResultMap::new();
        results.insert("z", true);
        results.insert("a", false);
        results.insert("m", true);
        assert_eq!(results.keys().collect::<Vec<_>>(), ["z", "a", "m"]);
    }

    #[test]
    fn test_duplicate_overwrites_in_place() {
        let mut results = ResultMap::new();
        results.insert("p", false);
        results.insert("a", true);
        results.insert("p", true);
        assert_eq!(results.len(), 2);
        assert_eq!(results.iter().collect::<Vec<_>>(), [("p", true), ("a", true)]);
    }

    #[test]
    fn test_many_selectors_stay_indexed() {
        let mut results = ResultMap::new();
        for i in 0..500 {
            results.insert(&format!("div.item-{i}"), i % 2 == 0);
        }
        results.insert("div.item-7", true);
        assert_eq!(results.len(), 500);
        assert_eq!(results.get("div.item-7"), Some(true));
        assert_eq!(results.get("div.item-8"), Some(true));
        assert_eq!(results.get("div.item-9"), Some(false));
        assert_eq!(results.get("div.item-500"), None);
        assert_eq!(results.keys().nth(7), Some("div.item-7"));
    }

    #[test]
    fn test_pretty_json_layout() {
        let mut results = ResultMap::new();
        results.insert("p", true);
        results.insert("a[href]", false);
        assert_eq!(
            results.to_pretty_json().unwrap(),
            "{\n    \"p\": true,\n    \"a[href]\": false\n}"
        );
    }

    #[test]
    fn test_empty_json() {
        assert_eq!(ResultMap::new().to_pretty_json().unwrap(), "{}");
    }

    #[test]
    fn test_selector_text_is_escaped() {
        let mut results = ResultMap::new();
        results.insert(r#"a[title="x"]"#, false);
        let value: serde_json::Value =
            serde_json::from_str(&results.to_pretty_json().unwrap()).unwrap();
        assert_eq!(value[r#"a[title="x"]"#], false);
    }
}
