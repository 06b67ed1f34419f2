use crate::error::AnalyticsError;
use crate::filter::FilteredView;
use crate::report::SalesSummary;
use chrono::{Datelike, Duration, NaiveDate};
use core_types::OrderRecord;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

/// Which categorical field a grouped sum is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Product,
    Region,
}

/// One bar of the quantity distribution.
///
/// `lower`/`upper` are the bin edges over the quantity axis. Quantities are
/// unit counts, not currency, so f64 edges are fine here.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// A stateless calculator for deriving presentation aggregates from a
/// filtered view.
///
/// Every method is a pure function of its input: no shared mutable state,
/// safe to call again on every interaction. Empty views degrade to the
/// documented empty value rather than erroring.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of `amount` over the view; zero if empty.
    pub fn total_sales(&self, view: &FilteredView) -> Decimal {
        view.records().iter().map(|r| r.amount).sum()
    }

    pub fn order_count(&self, view: &FilteredView) -> usize {
        view.len()
    }

    /// Mean order amount, rounded to 2 decimals. Defined as zero for an
    /// empty view; the division is guarded, never raised.
    pub fn average_order(&self, view: &FilteredView) -> Decimal {
        let count = view.len();
        if count == 0 {
            return Decimal::ZERO;
        }
        (self.total_sales(view) / Decimal::from(count)).round_dp(2)
    }

    /// The KPI row: total, count, and average in one struct.
    pub fn summarize(&self, view: &FilteredView) -> SalesSummary {
        SalesSummary {
            total_sales: self.total_sales(view),
            order_count: self.order_count(view),
            average_order: self.average_order(view),
        }
    }

    /// Groups the view by the chosen categorical field and sums `amount`.
    ///
    /// The result is unordered; the presentation layer sorts descending by
    /// total for display.
    pub fn sum_by_key(&self, view: &FilteredView, key: GroupKey) -> HashMap<String, Decimal> {
        let mut totals: HashMap<String, Decimal> = HashMap::new();
        for record in view.records() {
            let group = match key {
                GroupKey::Product => &record.product,
                GroupKey::Region => &record.region,
            };
            *totals.entry(group.clone()).or_insert(Decimal::ZERO) += record.amount;
        }
        totals
    }

    /// Buckets the view into calendar weeks and sums `amount` per bucket.
    ///
    /// Weeks are ISO weeks starting Monday: the bucket key is the Monday on
    /// or before the order date. Output is ascending by week. Weeks with no
    /// records are not emitted: the series feeds totals, and sparse ranges
    /// stay sparse rather than being zero-filled.
    pub fn weekly_time_series(&self, view: &FilteredView) -> Vec<(NaiveDate, Decimal)> {
        let mut buckets: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for record in view.records() {
            let week_start = monday_of(record.order_date);
            *buckets.entry(week_start).or_insert(Decimal::ZERO) += record.amount;
        }
        buckets.into_iter().collect()
    }

    /// Equal-width bins over `[min(quantity), max(quantity)]` of the view.
    ///
    /// Degenerate inputs are handled explicitly: an empty view yields no
    /// bins, and a view where every quantity is equal collapses to a single
    /// `[q, q]` bin, so the bin-width division can never be by zero.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidParameter` when `bins` is zero.
    pub fn quantity_histogram(
        &self,
        view: &FilteredView,
        bins: usize,
    ) -> Result<Vec<HistogramBin>, AnalyticsError> {
        if bins == 0 {
            return Err(AnalyticsError::InvalidParameter(
                "histogram bin count must be at least 1".to_string(),
            ));
        }
        if view.is_empty() {
            return Ok(Vec::new());
        }

        let quantities: Vec<u32> = view.records().iter().map(|r| r.quantity).collect();
        let (Some(min), Some(max)) = (
            quantities.iter().min().copied(),
            quantities.iter().max().copied(),
        ) else {
            return Ok(Vec::new());
        };

        if min == max {
            return Ok(vec![HistogramBin {
                lower: f64::from(min),
                upper: f64::from(max),
                count: quantities.len(),
            }]);
        }

        let width = f64::from(max - min) / bins as f64;
        let mut counts = vec![0usize; bins];
        for q in &quantities {
            let offset = f64::from(q - min) / width;
            // The maximum quantity lands exactly on the top edge; clamp it
            // into the final bin.
            let index = (offset as usize).min(bins - 1);
            counts[index] += 1;
        }

        Ok(counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                lower: f64::from(min) + i as f64 * width,
                upper: f64::from(min) + (i + 1) as f64 * width,
                count,
            })
            .collect())
    }

    /// Two-level grouping: sums `amount` per (region, product) pair.
    pub fn region_product_breakdown(
        &self,
        view: &FilteredView,
    ) -> HashMap<(String, String), Decimal> {
        let mut totals: HashMap<(String, String), Decimal> = HashMap::new();
        for record in view.records() {
            let key = (record.region.clone(), record.product.clone());
            *totals.entry(key).or_insert(Decimal::ZERO) += record.amount;
        }
        totals
    }

    /// The `n` highest-amount records, descending.
    ///
    /// The sort is stable, so records with equal amounts keep their original
    /// relative order from the view.
    pub fn top_n<'a>(&self, view: &'a FilteredView, n: usize) -> Vec<&'a OrderRecord> {
        let mut ranked: Vec<&OrderRecord> = view.records().iter().collect();
        ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
        ranked.truncate(n);
        ranked
    }
}

/// The Monday on or before the given date.
fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
