//! Catalog filter record.
//!
//! Persisted under [`crate::storage::keys::FILTERS`] as
//! `{"brand": string, "min": string|number, "max": string|number}`.
//! Bounds keep exactly what the visitor typed so the filter form can be
//! refilled verbatim; they are only interpreted as numbers when matching.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::Product;

/// Brand and price-range constraints on the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    /// Exact brand name; empty means any brand.
    pub brand: String,
    pub min: PriceBound,
    pub max: PriceBound,
}

/// Stored shape; missing fields read as unconstrained.
#[derive(Default, Deserialize)]
#[serde(default)]
struct StoredFilter {
    brand: String,
    min: PriceBound,
    max: PriceBound,
}

impl<'de> Deserialize<'de> for FilterState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let StoredFilter { brand, min, max } = super::from_object(deserializer)?;
        Ok(Self { brand, min, max })
    }
}

impl FilterState {
    /// A filter constraining only the brand.
    #[must_use]
    pub fn brand(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            ..Self::default()
        }
    }

    /// Whether no constraint is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brand.trim().is_empty() && self.min.value().is_none() && self.max.value().is_none()
    }

    /// Whether `product` passes every active constraint.
    ///
    /// Bounds that are empty or not numeric are ignored.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let brand = self.brand.trim();
        if !brand.is_empty() && product.brand != brand {
            return false;
        }

        let price = product.price.amount;
        if self.min.value().is_some_and(|min| price < min) {
            return false;
        }
        if self.max.value().is_some_and(|max| price > max) {
            return false;
        }
        true
    }
}

/// A price bound exactly as entered: text, a JSON number, or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<RawBound>", into = "String")]
pub struct PriceBound(String);

impl PriceBound {
    /// An unconstrained bound.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// The raw text of the bound.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric value, if the text is a number.
    ///
    /// Surrounding whitespace is ignored; plain and scientific notation are
    /// accepted, as is `Infinity` with an optional sign. Magnitudes beyond
    /// the decimal range saturate to [`Decimal::MAX`] / [`Decimal::MIN`].
    /// Empty or non-numeric text (including `_` digit separators) yields
    /// `None`.
    #[must_use]
    pub fn value(&self) -> Option<Decimal> {
        let text = self.0.trim();
        let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
        let negative = text.starts_with('-');

        if unsigned == "Infinity" {
            return Some(saturated(negative));
        }
        if unsigned.is_empty()
            || !unsigned
                .bytes()
                .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
        {
            return None;
        }

        if let Ok(value) = Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)) {
            return Some(value);
        }

        // Out of decimal range but still a number.
        let float: f64 = text.parse().ok()?;
        if float.abs() < 1.0 {
            return Some(Decimal::ZERO);
        }
        Some(Decimal::try_from(float).unwrap_or_else(|_| saturated(float.is_sign_negative())))
    }
}

const fn saturated(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}

impl From<&str> for PriceBound {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl From<String> for PriceBound {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<i64> for PriceBound {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<PriceBound> for String {
    fn from(bound: PriceBound) -> Self {
        bound.0
    }
}

/// Stored shapes accepted for a bound.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBound {
    Text(String),
    Number(serde_json::Number),
}

impl From<Option<RawBound>> for PriceBound {
    fn from(raw: Option<RawBound>) -> Self {
        match raw {
            Some(RawBound::Text(text)) => Self(text),
            Some(RawBound::Number(number)) => Self(number.to_string()),
            None => Self::empty(),
        }
    }
}
