//! Port traits (interfaces) for external dependencies
//!
//! The data points being verified are produced elsewhere (an exporter, a
//! mock collector, a fixture file). The core only sees them through these
//! traits, so any read-only attribute map can be checked.

mod attributes;

pub use attributes::PointAttributes;
