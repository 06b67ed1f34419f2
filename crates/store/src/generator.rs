use chrono::{Duration, NaiveDate};
use core_types::{CoreError, OrderRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// The fixed product vocabulary. Position matters: later-listed products
/// carry a price uplift of `10% * index`.
pub const PRODUCTS: [&str; 4] = ["Alpha", "Beta", "Gamma", "Delta"];

/// Selection weights for `PRODUCTS`, in the same order.
const PRODUCT_WEIGHTS: [f64; 4] = [0.30, 0.25, 0.25, 0.20];

pub const REGIONS: [&str; 4] = ["North", "South", "East", "West"];

pub const SALES_REPS: [&str; 5] = ["Asha", "Ravi", "Sunil", "Meera", "Kavita"];

/// Parameters controlling one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorParams {
    pub seed: u64,
    pub record_count: usize,
    /// Span of order dates in days, ending at `end_date`. Must be >= 1.
    pub day_span: i64,
    /// The anchor for the date window. Production passes "today"; tests pass
    /// a fixed date so the output is fully reproducible.
    pub end_date: NaiveDate,
}

/// Synthesizes a deterministic batch of sample orders.
///
/// The same parameters always yield the same record sequence: the only source
/// of randomness is a `StdRng` seeded from `params.seed`, and every draw
/// happens in a fixed order per record.
pub fn generate_sample_data(params: &GeneratorParams) -> Result<Vec<OrderRecord>, CoreError> {
    if params.day_span < 1 {
        return Err(CoreError::InvalidInput(
            "day_span".to_string(),
            format!("must be at least 1, got {}", params.day_span),
        ));
    }

    let mut rng = StdRng::seed_from_u64(params.seed);
    let start_date = params.end_date - Duration::days(params.day_span);
    let mut records = Vec::with_capacity(params.record_count);

    for i in 0..params.record_count {
        let day_offset = rng.gen_range(0..params.day_span);
        let order_date = start_date + Duration::days(day_offset);

        let product_index = weighted_index(&mut rng, &PRODUCT_WEIGHTS);
        let product = PRODUCTS[product_index];
        let region = REGIONS[rng.gen_range(0..REGIONS.len())];
        let sales_rep = SALES_REPS[rng.gen_range(0..SALES_REPS.len())];

        let quantity = 1 + poisson(&mut rng, 3.0);

        let raw_price = rng.gen_range(50.0..500.0) * (1.0 + 0.1 * product_index as f64);
        let unit_price = Decimal::from_f64(raw_price)
            .ok_or_else(|| CoreError::Calculation(format!("non-finite unit price {raw_price}")))?
            .round_dp(2);

        let record = OrderRecord::new(
            format!("ORD{}", 100_000 + i),
            order_date,
            product.to_string(),
            region.to_string(),
            sales_rep.to_string(),
            quantity,
            unit_price,
        )?;
        records.push(record);
    }

    Ok(records)
}

/// Picks an index from `weights` (which must sum to 1.0) with the
/// corresponding probability.
fn weighted_index(rng: &mut StdRng, weights: &[f64]) -> usize {
    let roll: f64 = rng.gen_range(0.0..1.0);
    let mut cumulative = 0.0;
    for (i, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if roll < cumulative {
            return i;
        }
    }
    // Floating-point slack: the roll landed past the final cumulative sum.
    weights.len() - 1
}

/// Draws from a Poisson distribution via Knuth's product-of-uniforms method.
fn poisson(rng: &mut StdRng, lambda: f64) -> u32 {
    let threshold = (-lambda).exp();
    let mut k = 0u32;
    let mut product = 1.0f64;
    loop {
        product *= rng.gen_range(0.0..1.0);
        if product <= threshold {
            return k;
        }
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn params() -> GeneratorParams {
        GeneratorParams {
            seed: 42,
            record_count: 200,
            day_span: 180,
            end_date: "2026-08-30".parse().unwrap(),
        }
    }

    #[test]
    fn test_same_seed_yields_identical_records() {
        let first = generate_sample_data(&params()).unwrap();
        let second = generate_sample_data(&params()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seed_yields_different_records() {
        let first = generate_sample_data(&params()).unwrap();
        let mut other = params();
        other.seed = 7;
        let second = generate_sample_data(&other).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_generated_records_respect_invariants() {
        let p = params();
        let records = generate_sample_data(&p).unwrap();
        let start = p.end_date - Duration::days(p.day_span);

        assert_eq!(records.len(), p.record_count);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.order_id, format!("ORD{}", 100_000 + i));
            assert!(record.quantity >= 1);
            assert!(record.unit_price > dec!(0));
            assert_eq!(
                record.amount,
                (Decimal::from(record.quantity) * record.unit_price).round_dp(2)
            );
            assert!(record.order_date >= start && record.order_date <= p.end_date);
            assert!(PRODUCTS.contains(&record.product.as_str()));
            assert!(REGIONS.contains(&record.region.as_str()));
            assert!(SALES_REPS.contains(&record.sales_rep.as_str()));
        }
    }

    #[test]
    fn test_day_span_must_be_positive() {
        let mut p = params();
        p.day_span = 0;

        assert!(generate_sample_data(&p).is_err());
    }

    #[test]
    fn test_every_product_appears_with_enough_records() {
        let records = generate_sample_data(&params()).unwrap();

        for product in PRODUCTS {
            assert!(
                records.iter().any(|r| r.product == product),
                "missing product {product}"
            );
        }
    }
}
