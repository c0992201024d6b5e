use derive_more::{Display, Into};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::errors::ValidationError;

/// Value Object - line item quantity, never below one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    /// `None` for zero, which is never a valid line quantity.
    pub fn new(value: u32) -> Option<Self> {
        (value >= 1).then_some(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Parse a quantity typed into the cart input. Only strictly
    /// positive integers are accepted.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        raw.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ValidationError::InvalidQuantity(raw.to_string()))
    }

    pub fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// `None` when the decrement would reach zero.
    pub fn decremented(self) -> Option<Self> {
        Self::new(self.0 - 1)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u32::deserialize(deserializer)?;
        Self::new(value).ok_or_else(|| serde::de::Error::custom("quantity must be at least 1"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_positive_integers() {
        assert_eq!(Quantity::parse("3").map(|q| q.value()), Ok(3));
        assert_eq!(Quantity::parse(" 12 ").map(|q| q.value()), Ok(12));
        assert!(Quantity::parse("0").is_err());
        assert!(Quantity::parse("-3").is_err());
        assert!(Quantity::parse("two").is_err());
        assert!(Quantity::parse("2.5").is_err());
        assert!(Quantity::parse("").is_err());
    }

    #[test]
    fn decrement_from_one_is_none() {
        assert_eq!(Quantity::ONE.decremented(), None);
        assert_eq!(Quantity::ONE.incremented().decremented(), Some(Quantity::ONE));
    }

    #[test]
    fn increment_saturates() {
        let max = Quantity::new(u32::MAX).unwrap();
        assert_eq!(max.incremented(), max);
    }
}
