//! Observed data point
//!
//! An owned snapshot of one data point's attributes, as loaded from a
//! fixture or captured from an exporter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::ports::PointAttributes;

/// One observed data point and its attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataPoint {
    /// Attribute name to value
    pub attributes: BTreeMap<String, String>,
}

impl DataPoint {
    /// Create a data point without attributes
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attributes: BTreeMap::new(),
        }
    }

    /// Add an attribute, replacing any previous value for the same name
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DataPoint {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl PointAttributes for DataPoint {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.attribute(name)
    }

    fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    fn attribute_pairs(&self) -> Vec<(&str, &str)> {
        self.attributes.attribute_pairs()
    }
}
