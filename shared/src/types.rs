use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// Identifier aliases shared by the catalog and the views
pub type ProductId = u32;
pub type TestId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    EUR,
    USD,
    GBP,
    CHF,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "€",
            Currency::USD => "$",
            Currency::GBP => "£",
            Currency::CHF => "CHF",
        }
    }
}

/// An amount in whole or fractional units of a currency.
///
/// Displays the way the dashboard prints prices: amount first, then the
/// currency symbol (`750 €`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount.normalize(), self.currency.symbol())
    }
}
