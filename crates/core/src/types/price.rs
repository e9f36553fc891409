//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., rupees, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A price in the store currency.
    #[must_use]
    pub const fn lkr(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::LKR)
    }

    /// Format for display (e.g., "LKR 4500.00").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {:.2}", self.currency_code.code(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// Sri Lankan rupee, the store currency.
    #[default]
    LKR,
    USD,
    EUR,
}

impl CurrencyCode {
    /// The ISO 4217 code as a string.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::LKR => "LKR",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display() {
        let price = Price::lkr(Decimal::new(450000, 2));
        assert_eq!(price.display(), "LKR 4500.00");
    }

    #[test]
    fn test_default_currency_is_lkr() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::LKR);
    }
}
