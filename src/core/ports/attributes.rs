//! Observed data point attributes port
//!
//! Defines read-only access to the attributes of one observed data point.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read-only view of one data point's attributes
pub trait PointAttributes {
    /// Value of the attribute `name`, or `None` when absent
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Number of attributes carried by the data point
    fn attribute_count(&self) -> usize;

    /// All `(name, value)` pairs, in no particular order
    fn attribute_pairs(&self) -> Vec<(&str, &str)>;

    /// Render as `{a=1, b=2}`, sorted by name so output is stable
    fn describe_attributes(&self) -> String {
        let mut pairs = self.attribute_pairs();
        pairs.sort_unstable();
        let body: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
        format!("{{{}}}", body.join(", "))
    }
}

impl<S: BuildHasher> PointAttributes for HashMap<String, String, S> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }

    fn attribute_count(&self) -> usize {
        self.len()
    }

    fn attribute_pairs(&self) -> Vec<(&str, &str)> {
        self.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }
}

impl PointAttributes for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }

    fn attribute_count(&self) -> usize {
        self.len()
    }

    fn attribute_pairs(&self) -> Vec<(&str, &str)> {
        self.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }
}

impl<T: PointAttributes + ?Sized> PointAttributes for &T {
    fn attribute(&self, name: &str) -> Option<&str> {
        (**self).attribute(name)
    }

    fn attribute_count(&self) -> usize {
        (**self).attribute_count()
    }

    fn attribute_pairs(&self) -> Vec<(&str, &str)> {
        (**self).attribute_pairs()
    }
}
