use crate::criteria::FilterCriteria;
use crate::engine::AnalyticsEngine;
use crate::filter::apply_filter;
use crate::report::SalesSummary;
use core_types::OrderRecord;
use std::collections::HashMap;

/// An explicit memo of summaries keyed by normalized criteria equality.
///
/// This is purely a recomputation-avoidance convenience for an interactive
/// host that sees the same criteria repeatedly. Correctness never depends on
/// a hit: a miss runs the same pure filter-and-summarize pipeline the caller
/// could run directly.
#[derive(Debug, Default)]
pub struct ReportCache {
    entries: HashMap<FilterCriteria, SalesSummary>,
}

impl ReportCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the summary for `criteria` over `records`, computing and
    /// storing it on first sight.
    pub fn summary_for(
        &mut self,
        records: &[OrderRecord],
        criteria: &FilterCriteria,
        engine: &AnalyticsEngine,
    ) -> SalesSummary {
        if let Some(summary) = self.entries.get(criteria) {
            tracing::debug!("Report cache hit");
            return summary.clone();
        }

        let view = apply_filter(records, criteria);
        let summary = engine.summarize(&view);
        self.entries.insert(criteria.clone(), summary.clone());
        summary
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
