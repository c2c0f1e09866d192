//! Group matcher service - pairs expected attribute sets with data points
//!
//! This module contains pure matching logic with no I/O dependencies.
//!
//! A data point is *compatible* with an attribute set when it carries
//! exactly the set's attribute names (nothing missing, nothing extra) and
//! every matcher accepts the observed value. Matching then works on the
//! bipartite compatibility graph between sets and points.

use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::AttributeSet;
use crate::core::ports::PointAttributes;

/// How expected attribute sets are related to observed data points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// One data point per attribute set and vice versa
    #[default]
    Bijective,
    /// Each data point matches exactly one set, each set matches at least one point
    Covering,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bijective => write!(f, "bijective"),
            Self::Covering => write!(f, "covering"),
        }
    }
}

impl std::str::FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bijective" => Ok(Self::Bijective),
            "covering" => Ok(Self::Covering),
            _ => Err(format!("Invalid match mode: {s}. Use: bijective, covering")),
        }
    }
}

/// Category of a matching failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Number of sets and number of data points differ
    Cardinality,
    /// An attribute set has no compatible data point
    UnmatchedPattern,
    /// A data point has no compatible attribute set
    UnmatchedDataPoint,
    /// Compatible pairings exist but cannot be resolved
    Ambiguous,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cardinality => write!(f, "cardinality"),
            Self::UnmatchedPattern => write!(f, "unmatched_pattern"),
            Self::UnmatchedDataPoint => write!(f, "unmatched_data_point"),
            Self::Ambiguous => write!(f, "ambiguous"),
        }
    }
}

/// An attribute set left without a data point of its own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contention {
    /// The attribute set, rendered
    pub pattern: String,
    /// Compatible data points, all claimed by other sets
    pub candidates: Vec<String>,
}

impl fmt::Display for Contention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} competes for {}", self.pattern, self.candidates.join(", "))
    }
}

/// Why a collection of data points does not match the expected sets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Bijective mode needs as many data points as attribute sets
    #[error("expected {expected} data point(s) but found {actual}")]
    CardinalityMismatch {
        /// Number of attribute sets
        expected: usize,
        /// Number of observed data points
        actual: usize,
    },

    /// Attribute sets that no data point matches
    #[error("expected attributes not found: {}", .0.join(", "))]
    UnmatchedPatterns(Vec<String>),

    /// Data points that no attribute set matches
    #[error("unexpected data point attributes: {}", .0.join(", "))]
    UnmatchedDataPoints(Vec<String>),

    /// Attribute sets that cannot each get a distinct data point
    #[error("ambiguous match: {}", join_contentions(.0))]
    AmbiguousPatterns(Vec<Contention>),

    /// A data point compatible with several attribute sets (covering mode)
    #[error("ambiguous match: data point attributes {point} match more than one attribute set: {}", .patterns.join(", "))]
    AmbiguousDataPoint {
        /// The data point, rendered
        point: String,
        /// Every attribute set it matches
        patterns: Vec<String>,
    },
}

fn join_contentions(contentions: &[Contention]) -> String {
    contentions.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

impl MatchError {
    /// Failure category, for callers that branch on the kind of mismatch
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::CardinalityMismatch { .. } => FailureKind::Cardinality,
            Self::UnmatchedPatterns(_) => FailureKind::UnmatchedPattern,
            Self::UnmatchedDataPoints(_) => FailureKind::UnmatchedDataPoint,
            Self::AmbiguousPatterns(_) | Self::AmbiguousDataPoint { .. } => FailureKind::Ambiguous,
        }
    }
}

/// Successful pairing of attribute sets (by index) with data points (by index)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// `(set index, point index)`, sorted by point index
    pairs: Vec<(usize, usize)>,
}

impl Assignment {
    fn from_pairs(mut pairs: Vec<(usize, usize)>) -> Self {
        pairs.sort_unstable_by_key(|&(_, point)| point);
        Self { pairs }
    }

    /// `(set index, point index)` pairs, ordered by point index
    #[must_use]
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Index of the attribute set assigned to a data point
    #[must_use]
    pub fn set_for_point(&self, point: usize) -> Option<usize> {
        self.pairs.iter().find(|&&(_, p)| p == point).map(|&(set, _)| set)
    }

    /// Indices of the data points assigned to an attribute set
    pub fn points_for_set(&self, set: usize) -> impl Iterator<Item = usize> + '_ {
        self.pairs.iter().filter(move |&&(s, _)| s == set).map(|&(_, point)| point)
    }
}

/// Check whether a data point's attributes satisfy an attribute set
///
/// The point must carry exactly the set's attribute names, and every
/// matcher must accept the corresponding value.
#[must_use]
pub fn set_matches<P: PointAttributes + ?Sized>(set: &AttributeSet, point: &P) -> bool {
    // Set names are unique, so equal counts plus every name present means
    // the name sets are identical.
    point.attribute_count() == set.len()
        && set
            .matchers()
            .iter()
            .all(|m| point.attribute(m.name()).is_some_and(|value| m.matches(value)))
}

/// Match observed data points against expected attribute sets
///
/// Returns the pairing that was found, or the first failure in this order:
/// cardinality (bijective mode only), data points without a compatible
/// set, ambiguity, sets without a compatible point. In bijective mode the
/// ambiguity check runs last, after every set and point is known to have at
/// least one candidate.
pub fn match_data_points<P: PointAttributes>(
    mode: MatchMode,
    sets: &[AttributeSet],
    points: &[P],
) -> Result<Assignment, MatchError> {
    debug!(
        "matching {} attribute set(s) against {} data point(s) ({mode})",
        sets.len(),
        points.len()
    );

    if mode == MatchMode::Bijective && sets.len() != points.len() {
        return Err(MatchError::CardinalityMismatch {
            expected: sets.len(),
            actual: points.len(),
        });
    }

    let graph = CompatibilityGraph::build(sets, points);
    debug!("compatibility graph has {} edge(s)", graph.edge_count());

    let unmatched_points: Vec<String> = (0..points.len())
        .filter(|&point| graph.sets_for_point(point).is_empty())
        .map(|point| points[point].describe_attributes())
        .collect();
    if !unmatched_points.is_empty() {
        return Err(MatchError::UnmatchedDataPoints(unmatched_points));
    }

    match mode {
        MatchMode::Bijective => match_bijective(&graph, sets, points),
        MatchMode::Covering => match_covering(&graph, sets, points),
    }
}

fn unmatched_sets(graph: &CompatibilityGraph, sets: &[AttributeSet]) -> Result<(), MatchError> {
    let unmatched: Vec<String> = (0..sets.len())
        .filter(|&set| graph.points_for_set(set).is_empty())
        .map(|set| sets[set].to_string())
        .collect();
    if unmatched.is_empty() {
        Ok(())
    } else {
        Err(MatchError::UnmatchedPatterns(unmatched))
    }
}

fn match_bijective<P: PointAttributes>(
    graph: &CompatibilityGraph,
    sets: &[AttributeSet],
    points: &[P],
) -> Result<Assignment, MatchError> {
    unmatched_sets(graph, sets)?;

    // Augmenting-path search (Kuhn). owner[point] is the set currently
    // holding that point.
    let mut owner: Vec<Option<usize>> = vec![None; points.len()];
    let mut unresolved = Vec::new();
    for set in 0..sets.len() {
        let mut visited = vec![false; points.len()];
        if !augment(set, graph, &mut owner, &mut visited) {
            unresolved.push(set);
        }
    }

    if !unresolved.is_empty() {
        let contentions = unresolved
            .into_iter()
            .map(|set| Contention {
                pattern: sets[set].to_string(),
                candidates: graph
                    .points_for_set(set)
                    .iter()
                    .map(|&point| points[point].describe_attributes())
                    .collect(),
            })
            .collect();
        return Err(MatchError::AmbiguousPatterns(contentions));
    }

    let pairs = owner
        .into_iter()
        .enumerate()
        .filter_map(|(point, set)| set.map(|set| (set, point)))
        .collect();
    Ok(Assignment::from_pairs(pairs))
}

fn augment(
    set: usize,
    graph: &CompatibilityGraph,
    owner: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for &point in graph.points_for_set(set) {
        if visited[point] {
            continue;
        }
        visited[point] = true;
        let free = match owner[point] {
            None => true,
            Some(other) => {
                trace!("set #{set} wants point #{point}, trying to move set #{other}");
                augment(other, graph, owner, visited)
            },
        };
        if free {
            owner[point] = Some(set);
            return true;
        }
    }
    false
}

fn match_covering<P: PointAttributes>(
    graph: &CompatibilityGraph,
    sets: &[AttributeSet],
    points: &[P],
) -> Result<Assignment, MatchError> {
    for point in 0..points.len() {
        let candidates = graph.sets_for_point(point);
        if candidates.len() > 1 {
            return Err(MatchError::AmbiguousDataPoint {
                point: points[point].describe_attributes(),
                patterns: candidates.iter().map(|&set| sets[set].to_string()).collect(),
            });
        }
    }

    unmatched_sets(graph, sets)?;

    let pairs = (0..points.len())
        .filter_map(|point| graph.sets_for_point(point).first().map(|&set| (set, point)))
        .collect();
    Ok(Assignment::from_pairs(pairs))
}

/// Adjacency lists of the set/point compatibility relation
struct CompatibilityGraph {
    by_set: Vec<Vec<usize>>,
    by_point: Vec<Vec<usize>>,
}

impl CompatibilityGraph {
    fn build<P: PointAttributes>(sets: &[AttributeSet], points: &[P]) -> Self {
        let mut by_set = vec![Vec::new(); sets.len()];
        let mut by_point = vec![Vec::new(); points.len()];
        for (s, set) in sets.iter().enumerate() {
            for (p, point) in points.iter().enumerate() {
                if set_matches(set, point) {
                    by_set[s].push(p);
                    by_point[p].push(s);
                }
            }
        }
        Self { by_set, by_point }
    }

    fn points_for_set(&self, set: usize) -> &[usize] {
        &self.by_set[set]
    }

    fn sets_for_point(&self, point: usize) -> &[usize] {
        &self.by_point[point]
    }

    fn edge_count(&self) -> usize {
        self.by_set.iter().map(Vec::len).sum()
    }
}
