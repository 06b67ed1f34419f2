use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The top-level scalar metrics for one filtered view.
///
/// This struct is the headline output of the `AnalyticsEngine` and is what
/// the presentation layer renders as its KPI row. All fields are defined for
/// an empty view: zero orders means zero sales and a zero average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    /// Sum of `amount` over the view.
    pub total_sales: Decimal,
    /// Number of records in the view.
    pub order_count: usize,
    /// `total_sales / order_count`, rounded to 2 decimals; zero when the
    /// view is empty.
    pub average_order: Decimal,
}

impl SalesSummary {
    /// Creates a new, zeroed-out summary, the defined value for an empty view.
    pub fn new() -> Self {
        Self {
            total_sales: Decimal::ZERO,
            order_count: 0,
            average_order: Decimal::ZERO,
        }
    }
}

impl Default for SalesSummary {
    fn default() -> Self {
        Self::new()
    }
}
