use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use tallybook_catalog::ProductType;
use tallybook_core::{DomainError, DomainResult, Money, ValueObject};

/// Computed tax for a single invoice line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tax {
    pub amount: Money,
    /// Human-readable description of the applied rule, e.g. `"23%"`.
    pub description: String,
}

impl ValueObject for Tax {}

/// Pluggable tax calculation, consulted once per requested item.
///
/// Implementations decide how a product category and a net amount map to a
/// tax; the book keeper treats the policy as an opaque function.
pub trait TaxPolicy {
    fn calculate_tax(&self, product_type: ProductType, amount: &Money) -> DomainResult<Tax>;
}

/// Tax amounts are rounded to whole cents.
const TAX_SCALE: u32 = 2;

/// Rate-table policy: one percentage per product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTableTaxPolicy {
    rates: BTreeMap<ProductType, Decimal>,
}

impl RateTableTaxPolicy {
    /// Build a policy from explicit percentage rates (`23` means 23%).
    pub fn new(rates: BTreeMap<ProductType, Decimal>) -> DomainResult<Self> {
        for (product_type, rate) in &rates {
            if rate.is_sign_negative() && !rate.is_zero() {
                return Err(DomainError::validation(format!(
                    "tax rate for {product_type:?} cannot be negative"
                )));
            }
        }
        Ok(Self { rates })
    }

    pub fn rate(&self, product_type: ProductType) -> Option<Decimal> {
        self.rates.get(&product_type).copied()
    }
}

impl Default for RateTableTaxPolicy {
    /// Standard 23%, food 8%, drugs 5%.
    fn default() -> Self {
        Self {
            rates: BTreeMap::from([
                (ProductType::Standard, Decimal::from(23)),
                (ProductType::Food, Decimal::from(8)),
                (ProductType::Drug, Decimal::from(5)),
            ]),
        }
    }
}

impl TaxPolicy for RateTableTaxPolicy {
    fn calculate_tax(&self, product_type: ProductType, amount: &Money) -> DomainResult<Tax> {
        let rate = self.rate(product_type).ok_or_else(|| {
            DomainError::invariant(format!("no tax rate configured for {product_type:?}"))
        })?;

        let raw = amount
            .amount()
            .checked_mul(rate)
            .and_then(|value| value.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(|| DomainError::invariant("tax amount overflow"))?;
        let rounded = raw.round_dp_with_strategy(TAX_SCALE, RoundingStrategy::MidpointAwayFromZero);

        Ok(Tax {
            amount: Money::new(rounded, amount.currency()),
            description: format!("{rate}%"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tallybook_core::Currency;

    fn eur(amount: &str) -> Money {
        Money::new(amount.parse().unwrap(), Currency::Eur)
    }

    #[test]
    fn default_rates_per_category() {
        let policy = RateTableTaxPolicy::default();

        let standard = policy
            .calculate_tax(ProductType::Standard, &eur("100"))
            .unwrap();
        assert_eq!(standard.amount, eur("23"));
        assert_eq!(standard.description, "23%");

        let food = policy.calculate_tax(ProductType::Food, &eur("100")).unwrap();
        assert_eq!(food.amount, eur("8"));
        assert_eq!(food.description, "8%");

        let drug = policy.calculate_tax(ProductType::Drug, &eur("100")).unwrap();
        assert_eq!(drug.amount, eur("5"));
        assert_eq!(drug.description, "5%");
    }

    #[test]
    fn tax_is_rounded_to_cents_midpoint_away_from_zero() {
        let policy = RateTableTaxPolicy::default();

        // 10.01 * 8% = 0.8008 -> 0.80
        let truncated = policy
            .calculate_tax(ProductType::Food, &eur("10.01"))
            .unwrap();
        assert_eq!(truncated.amount, eur("0.80"));

        // 0.50 * 23% = 0.115 -> 0.12 (midpoint rounds away from zero)
        let midpoint = policy
            .calculate_tax(ProductType::Standard, &eur("0.50"))
            .unwrap();
        assert_eq!(midpoint.amount, eur("0.12"));
    }

    #[test]
    fn tax_keeps_the_amount_currency() {
        let policy = RateTableTaxPolicy::default();
        let amount = Money::new("100".parse().unwrap(), Currency::Pln);
        let tax = policy.calculate_tax(ProductType::Drug, &amount).unwrap();
        assert_eq!(tax.amount.currency(), Currency::Pln);
    }

    #[test]
    fn negative_rate_is_rejected() {
        let rates = BTreeMap::from([(ProductType::Food, Decimal::from(-8))]);
        let err = RateTableTaxPolicy::new(rates).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("cannot be negative") => {}
            _ => panic!("Expected Validation error for negative rate"),
        }
    }

    #[test]
    fn missing_rate_is_an_invariant_violation() {
        let rates = BTreeMap::from([(ProductType::Standard, Decimal::from(23))]);
        let policy = RateTableTaxPolicy::new(rates).unwrap();
        let err = policy.calculate_tax(ProductType::Food, &eur("10")).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("no tax rate configured") => {}
            _ => panic!("Expected InvariantViolation for missing rate"),
        }
    }

    #[test]
    fn zero_rate_yields_zero_tax() {
        let rates = BTreeMap::from([(ProductType::Food, Decimal::ZERO)]);
        let policy = RateTableTaxPolicy::new(rates).unwrap();
        let tax = policy.calculate_tax(ProductType::Food, &eur("10")).unwrap();
        assert!(tax.amount.is_zero());
        assert_eq!(tax.description, "0%");
    }
}
