//! Attribute matcher
//!
//! A matcher describes one expected data point attribute: its name, and
//! either the exact value it must carry or "any value".
//!
//! # Examples
//!
//! ```
//! use attrcheck::core::models::{attribute, attribute_with_any_value};
//!
//! let exact = attribute("area", "heap");
//! assert!(exact.matches("heap"));
//! assert!(!exact.matches("Heap"));
//!
//! let any = attribute_with_any_value("pool");
//! assert!(any.matches("G1 Eden Space"));
//! assert_eq!(any.to_string(), "{pool}");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

/// Matches a single data point attribute by name and (optionally) value
///
/// Equality and hashing only consider the attribute name, so a set of
/// matchers holds at most one matcher per attribute.
#[derive(Debug, Clone)]
pub struct AttributeMatcher {
    name: String,
    value: Option<String>,
}

/// Create a matcher requiring the attribute `name` to have exactly `value`
#[must_use]
pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> AttributeMatcher {
    AttributeMatcher {
        name: name.into(),
        value: Some(value.into()),
    }
}

/// Create a matcher requiring the attribute `name` to be present with any value
#[must_use]
pub fn attribute_with_any_value(name: impl Into<String>) -> AttributeMatcher {
    AttributeMatcher {
        name: name.into(),
        value: None,
    }
}

impl AttributeMatcher {
    /// Name of the attribute this matcher checks
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expected value, or `None` when any value is accepted
    #[must_use]
    pub fn expected_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether this matcher accepts any value
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        self.value.is_none()
    }

    /// Check an observed attribute value against this matcher
    ///
    /// Comparison is exact and case-sensitive. Absence of the attribute is
    /// not something a single matcher can see; the group matcher rejects it.
    #[must_use]
    pub fn matches(&self, observed: &str) -> bool {
        self.value.as_deref().is_none_or(|expected| expected == observed)
    }
}

impl PartialEq for AttributeMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for AttributeMatcher {}

impl Hash for AttributeMatcher {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for AttributeMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{{{}={}}}", self.name, value),
            None => write!(f, "{{{}}}", self.name),
        }
    }
}
