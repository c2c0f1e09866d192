//! Attribute sets
//!
//! An attribute set is the complete expected attribute signature of one
//! data point: a group of matchers with unique attribute names.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use super::matcher::AttributeMatcher;

/// Errors raised while building an attribute set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    /// Two matchers share the same attribute name
    #[error("duplicate matcher with name: {0}")]
    DuplicateName(String),

    /// A matcher has an empty attribute name
    #[error("attribute matcher name must not be empty")]
    EmptyName,
}

/// Ordered group of matchers, one per attribute name
#[derive(Debug, Clone)]
pub struct AttributeSet {
    matchers: Vec<AttributeMatcher>,
}

/// Build an attribute set from matchers, rejecting duplicate names
///
/// Input order is preserved. Nothing is returned on failure.
///
/// # Examples
///
/// ```
/// use attrcheck::core::models::{attribute, attribute_set, attribute_with_any_value, SetError};
///
/// let set = attribute_set([attribute("a", "1"), attribute_with_any_value("b")]).unwrap();
/// assert_eq!(set.len(), 2);
///
/// let err = attribute_set([attribute("a", "1"), attribute("a", "2")]).unwrap_err();
/// assert_eq!(err, SetError::DuplicateName("a".to_string()));
/// ```
pub fn attribute_set(
    matchers: impl IntoIterator<Item = AttributeMatcher>,
) -> Result<AttributeSet, SetError> {
    let matchers = matchers.into_iter();
    let mut list = Vec::with_capacity(matchers.size_hint().0);
    let mut seen: HashSet<String> = HashSet::with_capacity(list.capacity());

    for matcher in matchers {
        if matcher.name().is_empty() {
            return Err(SetError::EmptyName);
        }
        if !seen.insert(matcher.name().to_string()) {
            return Err(SetError::DuplicateName(matcher.name().to_string()));
        }
        list.push(matcher);
    }

    Ok(AttributeSet { matchers: list })
}

impl AttributeSet {
    /// The empty set, matching only data points without attributes
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Matchers in construction order
    #[must_use]
    pub fn matchers(&self) -> &[AttributeMatcher] {
        &self.matchers
    }

    /// Number of attributes a matching data point must carry
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether this set expects no attributes at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Look up the matcher for an attribute name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeMatcher> {
        self.matchers.iter().find(|m| m.name() == name)
    }

    /// Iterate over the expected attribute names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(AttributeMatcher::name)
    }
}

impl From<AttributeMatcher> for AttributeSet {
    fn from(matcher: AttributeMatcher) -> Self {
        Self {
            matchers: vec![matcher],
        }
    }
}

// Matchers compare by name only; two sets are equal when they expect the
// same names with the same values, in the same order.
impl PartialEq for AttributeSet {
    fn eq(&self, other: &Self) -> bool {
        self.matchers.len() == other.matchers.len()
            && self
                .matchers
                .iter()
                .zip(&other.matchers)
                .all(|(a, b)| a.name() == b.name() && a.expected_value() == b.expected_value())
    }
}

impl Eq for AttributeSet {}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a AttributeMatcher;
    type IntoIter = std::slice::Iter<'a, AttributeMatcher>;

    fn into_iter(self) -> Self::IntoIter {
        self.matchers.iter()
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, matcher) in self.matchers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{matcher}")?;
        }
        f.write_str("]")
    }
}
