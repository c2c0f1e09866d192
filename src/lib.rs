//! attrcheck - verify that metric data points carry exactly the expected attributes
//!
//! Expected attributes are described with matchers grouped into attribute
//! sets; observed data points are matched against those sets and any
//! missing, unexpected or ambiguous data point is reported.
//!
//! ```
//! use attrcheck::core::models::{DataPoint, attribute, attribute_set};
//! use attrcheck::core::services::{MatchMode, match_data_points};
//!
//! let sets = vec![
//!     attribute_set([attribute("a", "1")]).unwrap(),
//!     attribute_set([attribute("a", "2")]).unwrap(),
//! ];
//! let points = vec![
//!     DataPoint::new().with_attribute("a", "2"),
//!     DataPoint::new().with_attribute("a", "1"),
//! ];
//! assert!(match_data_points(MatchMode::Bijective, &sets, &points).is_ok());
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod fixture;
pub mod output;
pub mod paths;
