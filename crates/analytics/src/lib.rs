//! # Sales Analytics Engine
//!
//! This crate is the pure-logic core of the dashboard: it turns the immutable
//! record store into the filtered views and aggregates the presentation layer
//! renders.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems and performs no I/O. It depends only on `core-types`
//!   (Layer 0).
//! - **Stateless Calculation:** The `AnalyticsEngine` is a stateless
//!   calculator over a `FilteredView`. Every aggregate is total: an empty
//!   view produces the defined empty value (zero, empty map, no bins), never
//!   a fault. This makes recomputation on every interaction safe.
//!
//! ## Public API
//!
//! - `FilterCriteria`: the user's filter bounds for one evaluation.
//! - `FilteredView` / `apply_filter`: the conjunction-of-predicates filter.
//! - `AnalyticsEngine`: totals, groupings, weekly series, histogram, top-N.
//! - `SalesSummary`: the top-level scalar metrics struct.
//! - `ReportCache`: optional memoization keyed by criteria equality.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod cache;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod filter;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use cache::ReportCache;
pub use criteria::FilterCriteria;
pub use engine::{AnalyticsEngine, GroupKey, HistogramBin};
pub use error::AnalyticsError;
pub use filter::{FilteredView, apply_filter};
pub use report::SalesSummary;
