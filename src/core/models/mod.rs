//! Domain models for attrcheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`AttributeMatcher`] - "attribute X with value Y" or "attribute X, any value"
//! - [`AttributeSet`] - every attribute a single data point must carry
//! - [`DataPoint`] - an observed data point's attributes

mod attribute_set;
mod data_point;
mod matcher;

pub use attribute_set::{AttributeSet, SetError, attribute_set};
pub use data_point::DataPoint;
pub use matcher::{AttributeMatcher, attribute, attribute_with_any_value};
