//! Metric assertions - fluent checks over one metric's data points
//!
//! This is the layer a test calls. It wraps the group matcher and adds the
//! metric name to every failure.
//!
//! # Examples
//!
//! ```
//! use attrcheck::core::models::{DataPoint, attribute, attribute_set, attribute_with_any_value};
//! use attrcheck::core::services::MetricAssert;
//!
//! let points = vec![
//!     DataPoint::new().with_attribute("type", "heap").with_attribute("pool", "G1 Eden Space"),
//!     DataPoint::new().with_attribute("type", "non_heap").with_attribute("pool", "Metaspace"),
//! ];
//!
//! MetricAssert::new("jvm.memory.used", &points)
//!     .has_data_points()
//!     .unwrap()
//!     .has_data_points_with_attributes(&[
//!         attribute_set([attribute("type", "heap"), attribute_with_any_value("pool")]).unwrap(),
//!         attribute_set([attribute("type", "non_heap"), attribute_with_any_value("pool")]).unwrap(),
//!     ])
//!     .unwrap();
//! ```

use thiserror::Error;

use super::grouping::{FailureKind, MatchError, MatchMode, match_data_points};
use crate::core::models::{AttributeMatcher, AttributeSet};
use crate::core::ports::PointAttributes;

/// An assertion about a metric's data points did not hold
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("metric '{metric}': {failure}")]
pub struct AssertionError {
    /// Name of the metric being checked
    pub metric: String,
    /// What went wrong
    pub failure: AssertionFailure,
}

/// Cause of an [`AssertionError`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionFailure {
    /// Attribute sets did not match the data points
    #[error(transparent)]
    Match(#[from] MatchError),

    /// Wrong number of data points
    #[error("expected {expected} data point(s) but found {actual}")]
    Count {
        /// Expected number of data points
        expected: usize,
        /// Observed number of data points
        actual: usize,
    },

    /// No data points at all
    #[error("metric has no data points")]
    NoDataPoints,
}

impl AssertionError {
    /// Matching failure category, when the cause is a matching failure
    #[must_use]
    pub const fn kind(&self) -> Option<FailureKind> {
        match &self.failure {
            AssertionFailure::Match(err) => Some(err.kind()),
            AssertionFailure::Count { .. } => Some(FailureKind::Cardinality),
            AssertionFailure::NoDataPoints => None,
        }
    }
}

/// Assertions over the data points of one metric
#[derive(Debug)]
pub struct MetricAssert<'a, P> {
    metric: String,
    points: &'a [P],
}

impl<'a, P: PointAttributes> MetricAssert<'a, P> {
    /// Start asserting on `points`, reported under `metric`
    #[must_use]
    pub fn new(metric: impl Into<String>, points: &'a [P]) -> Self {
        Self {
            metric: metric.into(),
            points,
        }
    }

    /// Name of the metric under test
    #[must_use]
    pub fn metric(&self) -> &str {
        &self.metric
    }

    fn fail(&self, failure: impl Into<AssertionFailure>) -> AssertionError {
        AssertionError {
            metric: self.metric.clone(),
            failure: failure.into(),
        }
    }

    /// At least one data point was observed
    pub fn has_data_points(&self) -> Result<&Self, AssertionError> {
        if self.points.is_empty() {
            return Err(self.fail(AssertionFailure::NoDataPoints));
        }
        Ok(self)
    }

    /// Exactly `expected` data points were observed
    pub fn has_data_point_count(&self, expected: usize) -> Result<&Self, AssertionError> {
        if self.points.len() != expected {
            return Err(self.fail(AssertionFailure::Count {
                expected,
                actual: self.points.len(),
            }));
        }
        Ok(self)
    }

    /// Data points correspond one-to-one with `sets`
    ///
    /// Each set must be matched by exactly one data point and each data
    /// point by exactly one set. Order of either side is irrelevant.
    pub fn has_data_points_with_attributes(
        &self,
        sets: &[AttributeSet],
    ) -> Result<&Self, AssertionError> {
        self.has_data_points_matching(MatchMode::Bijective, sets)
    }

    /// Data points match `sets` under an explicit matching mode
    pub fn has_data_points_matching(
        &self,
        mode: MatchMode,
        sets: &[AttributeSet],
    ) -> Result<&Self, AssertionError> {
        match_data_points(mode, sets, self.points).map_err(|err| self.fail(err))?;
        Ok(self)
    }

    /// Every data point carries exactly the one attribute `matcher` describes
    pub fn has_data_points_with_one_attribute(
        &self,
        matcher: AttributeMatcher,
    ) -> Result<&Self, AssertionError> {
        let set = AttributeSet::from(matcher);
        self.has_data_points_matching(MatchMode::Covering, std::slice::from_ref(&set))
    }

    /// No data point carries any attribute
    pub fn has_data_points_without_attributes(&self) -> Result<&Self, AssertionError> {
        self.has_data_points_matching(MatchMode::Covering, &[AttributeSet::empty()])
    }
}
