//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`grouping`] - Match data points against expected attribute sets
//! - [`assertions`] - Metric-level assertions built on the group matcher

pub mod assertions;
pub mod grouping;

pub use assertions::{AssertionError, AssertionFailure, MetricAssert};
pub use grouping::{
    Assignment, Contention, FailureKind, MatchError, MatchMode, match_data_points, set_matches,
};
