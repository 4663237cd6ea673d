//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices are whole currency units (the store quotes watches in
//! euros without cents), but filter bounds typed by visitors may carry
//! decimals, so amounts are held as [`Decimal`] rather than integers.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::Quantity;

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (euros, not cents).
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

    /// Create a euro price from whole units.
    #[must_use]
    pub fn eur(units: i64) -> Self {
        Self::new(Decimal::from(units), CurrencyCode::EUR)
    }

    /// A zero euro price.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(Decimal::ZERO, CurrencyCode::EUR)
    }

    /// The price of `quantity` items at this unit price.
    #[must_use]
    pub fn times(self, quantity: Quantity) -> Self {
        Self::new(
            self.amount * Decimal::from(quantity.get()),
            self.currency_code,
        )
    }

    /// Format for display the way `Intl.NumberFormat("es-ES")` does.
    ///
    /// Two decimals, `,` as decimal separator, `.` grouping only once the
    /// integer part reaches five digits, and the symbol trailing after a
    /// non-breaking space: `13.900,00 €`, `9500,00 €`.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let fixed = format!("{rounded:.2}");
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let grouped = if int_part.len() >= 5 {
            group_thousands(int_part)
        } else {
            int_part.to_owned()
        };

        let sign = if self.amount.is_sign_negative() && !self.amount.is_zero() {
            "-"
        } else {
            ""
        };

        format!(
            "{sign}{grouped},{frac_part}\u{a0}{}",
            self.currency_code.symbol()
        )
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

/// Insert `.` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// ISO 4217 currency codes. The storefront only sells in euros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    EUR,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::EUR => "€",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_from_five_digits() {
        assert_eq!(Price::eur(13_900).display(), "13.900,00\u{a0}€");
        assert_eq!(Price::eur(505_115).display(), "505.115,00\u{a0}€");
        assert_eq!(Price::eur(1_250_000).display(), "1.250.000,00\u{a0}€");
    }

    #[test]
    fn test_display_four_digits_ungrouped() {
        assert_eq!(Price::eur(9_500).display(), "9500,00\u{a0}€");
        assert_eq!(Price::zero().display(), "0,00\u{a0}€");
    }

    #[test]
    fn test_display_rounds_to_cents() {
        let price = Price::new(Decimal::new(1_234_567, 3), CurrencyCode::EUR);
        assert_eq!(price.display(), "1234,57\u{a0}€");
    }

    #[test]
    fn test_times_and_sum() {
        let line = Price::eur(13_900).times(Quantity::new(2));
        assert_eq!(line, Price::eur(27_800));

        let total: Price = [Price::eur(100), Price::eur(250)].into_iter().sum();
        assert_eq!(total, Price::eur(350));

        let empty: Price = core::iter::empty().sum();
        assert_eq!(empty, Price::zero());
    }

    #[test]
    fn test_currency_code_wire_form() {
        assert_eq!(serde_json::to_string(&CurrencyCode::EUR).unwrap(), r#""EUR""#);
        assert!(serde_json::from_str::<CurrencyCode>(r#""USD""#).is_err());
    }
}
