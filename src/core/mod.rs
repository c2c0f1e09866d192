//! Core domain logic for attrcheck
//!
//! This module contains pure matching logic with no I/O dependencies.
//! Observed data points are reached through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (AttributeMatcher, AttributeSet, DataPoint)
//! - `services/` - Group matching and metric assertions
//! - `ports/` - Trait definitions for externally produced data points

pub mod models;
pub mod ports;
pub mod services;
