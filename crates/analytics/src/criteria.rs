use chrono::NaiveDate;
use core_types::OrderRecord;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// The full set of user-chosen filter bounds for one evaluation.
///
/// This is a value object: it is rebuilt from user input on every
/// interaction and has no lifecycle of its own. It is `Eq + Hash` so a
/// normalized criteria value can key the report cache.
///
/// All bounds are inclusive. The categorical sets carry explicit-selection
/// semantics: an empty set means the user cleared that picker, and matches
/// nothing. There is no implicit "all" fallback; "all" is whatever
/// `all_inclusive` put in the set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterCriteria {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub products: BTreeSet<String>,
    pub regions: BTreeSet<String>,
    pub reps: BTreeSet<String>,
    pub min_amount: Decimal,
    pub max_amount: Decimal,
}

impl FilterCriteria {
    /// Builds the fully-open criteria for a record set: the complete date
    /// span, every distinct categorical value, and the amount range
    /// `[0, max]`. Applying this to the same records keeps all of them.
    ///
    /// For an empty record set the date range collapses to `MIN..MAX` and
    /// the sets stay empty; the resulting view is empty either way.
    pub fn all_inclusive(records: &[OrderRecord]) -> Self {
        let start_date = records
            .iter()
            .map(|r| r.order_date)
            .min()
            .unwrap_or(NaiveDate::MIN);
        let end_date = records
            .iter()
            .map(|r| r.order_date)
            .max()
            .unwrap_or(NaiveDate::MAX);
        let max_amount = records
            .iter()
            .map(|r| r.amount)
            .max()
            .unwrap_or(Decimal::ZERO);

        Self {
            start_date,
            end_date,
            products: records.iter().map(|r| r.product.clone()).collect(),
            regions: records.iter().map(|r| r.region.clone()).collect(),
            reps: records.iter().map(|r| r.sales_rep.clone()).collect(),
            min_amount: Decimal::ZERO,
            max_amount,
        }
    }

    /// True iff the record satisfies all five predicates simultaneously.
    pub fn matches(&self, record: &OrderRecord) -> bool {
        record.order_date >= self.start_date
            && record.order_date <= self.end_date
            && self.regions.contains(&record.region)
            && self.products.contains(&record.product)
            && self.reps.contains(&record.sales_rep)
            && record.amount >= self.min_amount
            && record.amount <= self.max_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(date: &str, amount: Decimal) -> OrderRecord {
        OrderRecord {
            order_id: "ORD100000".to_string(),
            order_date: date.parse().unwrap(),
            product: "Alpha".to_string(),
            region: "North".to_string(),
            sales_rep: "Asha".to_string(),
            quantity: 1,
            unit_price: amount,
            amount,
        }
    }

    #[test]
    fn test_bounds_are_inclusive_on_both_ends() {
        let criteria = FilterCriteria {
            start_date: "2026-01-10".parse().unwrap(),
            end_date: "2026-01-20".parse().unwrap(),
            products: BTreeSet::from(["Alpha".to_string()]),
            regions: BTreeSet::from(["North".to_string()]),
            reps: BTreeSet::from(["Asha".to_string()]),
            min_amount: dec!(100),
            max_amount: dec!(200),
        };

        assert!(criteria.matches(&record("2026-01-10", dec!(100))));
        assert!(criteria.matches(&record("2026-01-20", dec!(200))));
        assert!(!criteria.matches(&record("2026-01-09", dec!(150))));
        assert!(!criteria.matches(&record("2026-01-21", dec!(150))));
        assert!(!criteria.matches(&record("2026-01-15", dec!(99.99))));
        assert!(!criteria.matches(&record("2026-01-15", dec!(200.01))));
    }

    #[test]
    fn test_single_day_window() {
        let mut criteria = FilterCriteria::all_inclusive(&[record("2026-01-15", dec!(50))]);
        criteria.start_date = "2026-01-15".parse().unwrap();
        criteria.end_date = criteria.start_date;

        assert!(criteria.matches(&record("2026-01-15", dec!(50))));
        assert!(!criteria.matches(&record("2026-01-16", dec!(50))));
    }

    #[test]
    fn test_all_inclusive_matches_every_source_record() {
        let records = vec![
            record("2026-01-01", dec!(10)),
            record("2026-02-01", dec!(999.99)),
        ];
        let criteria = FilterCriteria::all_inclusive(&records);

        assert!(records.iter().all(|r| criteria.matches(r)));
    }

    #[test]
    fn test_empty_categorical_set_matches_nothing() {
        let records = vec![record("2026-01-01", dec!(10))];
        let mut criteria = FilterCriteria::all_inclusive(&records);
        criteria.regions.clear();

        assert!(!criteria.matches(&records[0]));
    }
}
