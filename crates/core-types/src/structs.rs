use crate::error::CoreError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single sales transaction.
///
/// This struct is the fundamental unit of data in the system. It is produced
/// by the store (loaded from disk or generated), filtered by the analytics
/// crate, and serialized back out by the export crate. The categorical fields
/// (`product`, `region`, `sales_rep`) are open vocabularies: any string is
/// accepted, the known values are simply whatever appears in the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Unique identifier, format `ORD` + zero-padded integer.
    pub order_id: String,
    /// Calendar date of the order. No time component.
    pub order_date: NaiveDate,
    pub product: String,
    pub region: String,
    pub sales_rep: String,
    /// Number of units sold, always >= 1.
    pub quantity: u32,
    /// Price per unit, 2-decimal currency precision.
    pub unit_price: Decimal,
    /// Line total. Equals `quantity * unit_price` rounded to 2 decimals at
    /// creation time; not re-validated when loading persisted data.
    pub amount: Decimal,
}

impl OrderRecord {
    /// Creates a new record, deriving `amount` from quantity and unit price.
    ///
    /// # Errors
    ///
    /// Returns a `CoreError::InvalidInput` if the quantity is zero or the
    /// unit price is not positive.
    pub fn new(
        order_id: String,
        order_date: NaiveDate,
        product: String,
        region: String,
        sales_rep: String,
        quantity: u32,
        unit_price: Decimal,
    ) -> Result<Self, CoreError> {
        if quantity == 0 {
            return Err(CoreError::InvalidInput(
                "quantity".to_string(),
                "must be at least 1".to_string(),
            ));
        }
        if unit_price <= Decimal::ZERO {
            return Err(CoreError::InvalidInput(
                "unit_price".to_string(),
                format!("must be positive, got {unit_price}"),
            ));
        }

        let amount = (Decimal::from(quantity) * unit_price).round_dp(2);

        Ok(Self {
            order_id,
            order_date,
            product,
            region,
            sales_rep,
            quantity,
            unit_price,
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_amount_is_derived_and_rounded() {
        let record = OrderRecord::new(
            "ORD100000".to_string(),
            date("2025-06-01"),
            "Alpha".to_string(),
            "North".to_string(),
            "Asha".to_string(),
            3,
            dec!(99.99),
        )
        .unwrap();

        assert_eq!(record.amount, dec!(299.97));
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let result = OrderRecord::new(
            "ORD100001".to_string(),
            date("2025-06-01"),
            "Alpha".to_string(),
            "North".to_string(),
            "Asha".to_string(),
            0,
            dec!(10.00),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_non_positive_price_is_rejected() {
        let result = OrderRecord::new(
            "ORD100002".to_string(),
            date("2025-06-01"),
            "Beta".to_string(),
            "South".to_string(),
            "Ravi".to_string(),
            2,
            dec!(0.00),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_serde_uses_iso_dates() {
        let record = OrderRecord::new(
            "ORD100003".to_string(),
            date("2025-06-15"),
            "Gamma".to_string(),
            "East".to_string(),
            "Meera".to_string(),
            1,
            dec!(120.50),
        )
        .unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"order_date\":\"2025-06-15\""));

        let back: OrderRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
