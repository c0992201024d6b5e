use derive_more::{Display, From, Into};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};
use std::iter::Sum;
use std::str::FromStr;

use crate::domain::errors::ValidationError;

/// Value Object - product identifier as published in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Strict parse of an identifier read from a `data-id` attribute.
    /// Surrounding whitespace is ignored, anything else that is not an
    /// unsigned integer is rejected.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        raw.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidProductId(raw.to_string()))
    }
}

/// Value Object - unit price, exact decimal arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Price from an amount expressed in cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub const MAX: Price = Price(Decimal::MAX);

    /// Line total for `quantity` units, `None` past the decimal range.
    pub fn checked_times(&self, quantity: u32) -> Option<Price> {
        self.0.checked_mul(Decimal::from(quantity)).map(Price)
    }

    pub fn checked_add(&self, other: Price) -> Option<Price> {
        self.0.checked_add(other.0).map(Price)
    }

    /// Line total for `quantity` units, clamped to [`Price::MAX`].
    pub fn times(&self, quantity: u32) -> Price {
        self.checked_times(quantity).unwrap_or(Price::MAX)
    }

    /// Catalog prices must be JSON numbers; strings such as `"10"` are
    /// refused here, unlike the lenient snapshot decoding.
    pub(crate) fn deserialize_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Price, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        let text = number.to_string();
        // Floats may print in exponent form ("1e20")
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map(Price)
            .map_err(|e| serde::de::Error::custom(format!("price {} out of range: {}", number, e)))
    }

    /// Amount rounded half away from zero to two decimals, without symbol.
    pub fn to_fixed(&self) -> String {
        let rounded = self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", rounded)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.to_fixed())
    }
}

/// Clamps to [`Price::MAX`] instead of overflowing.
impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |acc, price| acc.checked_add(price).unwrap_or(Price::MAX))
    }
}

/// Value Object - product category label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Active grid filter. Transient: resets to `All` on every page load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Value carried by the `data-category` attribute of the filter button.
    pub const ALL_KEY: &'static str = "all";

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_KEY,
            CategoryFilter::Only(category) => category.value(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_parse_is_strict() {
        assert_eq!(ProductId::parse(" 42 "), Ok(ProductId::new(42)));
        assert!(ProductId::parse("42abc").is_err());
        assert!(ProductId::parse("-1").is_err());
        assert!(ProductId::parse("").is_err());
        assert!(ProductId::parse("1.5").is_err());
    }

    #[test]
    fn price_formats_two_decimals() {
        assert_eq!(Price::from_cents(1000).to_string(), "$10.00");
        assert_eq!(Price::new(Decimal::new(19995, 3)).to_string(), "$20.00");
        assert_eq!(Price::new(Decimal::new(5, 0)).to_string(), "$5.00");
    }

    #[test]
    fn price_times_and_sum_are_exact() {
        let total: Price = [Price::from_cents(10), Price::from_cents(20)].into_iter().sum();
        assert_eq!(total, Price::from_cents(30));
        assert_eq!(Price::from_cents(10).times(3), Price::from_cents(30));
    }

    #[test]
    fn overflowing_arithmetic_is_checked() {
        let huge = Price::new(Decimal::from_scientific("1e20").unwrap());
        assert_eq!(huge.checked_times(4_000_000_000), None);
        assert_eq!(huge.times(4_000_000_000), Price::MAX);
        assert_eq!(Price::MAX.checked_add(Price::from_cents(1)), None);
        let total: Price = [Price::MAX, Price::from_cents(1)].into_iter().sum();
        assert_eq!(total, Price::MAX);
    }

    #[test]
    fn filter_all_matches_everything() {
        let tools = Category::from("Tools");
        assert!(CategoryFilter::All.matches(&tools));
        assert!(CategoryFilter::Only(tools.clone()).matches(&tools));
        assert!(!CategoryFilter::Only(Category::from("Toys")).matches(&tools));
    }
}
