//! Ordered list of selectors to evaluate against a document

use serde::{Deserialize, Serialize};

/// Selectors in the order they were declared. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckList {
    selectors: Vec<String>,
}

impl CheckList {
    pub const fn new(selectors: Vec<String>) -> Self {
        Self { selectors }
    }

    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.selectors.iter()
    }
}

impl From<Vec<String>> for CheckList {
    fn from(selectors: Vec<String>) -> Self {
        Self::new(selectors)
    }
}

impl<'a> IntoIterator for &'a CheckList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
