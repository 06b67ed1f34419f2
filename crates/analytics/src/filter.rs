use crate::criteria::FilterCriteria;
use core_types::OrderRecord;

/// The subset of the record store satisfying one `FilterCriteria`.
///
/// A view owns copies of the matching records, in store insertion order; the
/// store itself is never touched. Views are cheap to rebuild and are
/// recomputed whenever the criteria change.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    records: Vec<OrderRecord>,
}

impl FilteredView {
    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<OrderRecord> {
        self.records
    }
}

/// Applies the conjunction of all five predicates over the record set.
///
/// A record passes iff its date, region, product, rep, and amount all fall
/// within the criteria's bounds (inclusive). Output preserves the input
/// order; no further ordering is guaranteed.
pub fn apply_filter(records: &[OrderRecord], criteria: &FilterCriteria) -> FilteredView {
    let kept: Vec<OrderRecord> = records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect();

    tracing::debug!(
        kept = kept.len(),
        total = records.len(),
        "Applied filter criteria"
    );

    FilteredView { records: kept }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn record(id: &str, date: &str, region: &str, amount: Decimal) -> OrderRecord {
        OrderRecord {
            order_id: id.to_string(),
            order_date: date.parse::<NaiveDate>().unwrap(),
            product: "Alpha".to_string(),
            region: region.to_string(),
            sales_rep: "Asha".to_string(),
            quantity: 1,
            unit_price: amount,
            amount,
        }
    }

    fn store() -> Vec<OrderRecord> {
        vec![
            record("ORD100000", "2026-01-05", "North", dec!(120.00)),
            record("ORD100001", "2026-01-10", "South", dec!(80.00)),
            record("ORD100002", "2026-02-01", "North", dec!(300.00)),
            record("ORD100003", "2026-02-15", "East", dec!(45.50)),
        ]
    }

    #[test]
    fn test_all_inclusive_criteria_keep_the_whole_store() {
        let records = store();
        let criteria = FilterCriteria::all_inclusive(&records);

        let view = apply_filter(&records, &criteria);

        assert_eq!(view.records(), records.as_slice());
    }

    #[test]
    fn test_every_kept_record_satisfies_all_predicates() {
        let records = store();
        let mut criteria = FilterCriteria::all_inclusive(&records);
        criteria.regions.remove("South");
        criteria.min_amount = dec!(100);

        let view = apply_filter(&records, &criteria);

        assert!(view.records().iter().all(|r| criteria.matches(r)));
        // Soundness the other way: nothing that matches was dropped.
        let expected: Vec<_> = records.iter().filter(|r| criteria.matches(r)).collect();
        assert_eq!(view.len(), expected.len());
    }

    #[test]
    fn test_explicitly_empty_region_selection_empties_the_view() {
        let records = store();
        let mut criteria = FilterCriteria::all_inclusive(&records);
        criteria.regions.clear();

        let view = apply_filter(&records, &criteria);

        assert!(view.is_empty());
    }

    #[test]
    fn test_view_preserves_insertion_order() {
        let records = store();
        let mut criteria = FilterCriteria::all_inclusive(&records);
        criteria.regions = std::collections::BTreeSet::from(["North".to_string()]);

        let view = apply_filter(&records, &criteria);

        let ids: Vec<_> = view.records().iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(ids, vec!["ORD100000", "ORD100002"]);
    }
}
