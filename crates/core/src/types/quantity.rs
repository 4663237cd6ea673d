//! Cart line quantities.

use core::fmt;

use serde::{Deserialize, Serialize};

/// How many units of a product a cart line holds.
///
/// ## Constraints
///
/// - A quantity set by the visitor is never below 1; [`Quantity::clamped`]
///   raises `0` and negative requests to 1.
/// - Values read back from storage are taken as-is, so a hand-edited `0`
///   survives until the next mutation of that line.
///
/// ## Examples
///
/// ```
/// use chrono_royale_core::Quantity;
///
/// assert_eq!(Quantity::clamped(3).get(), 3);
/// assert_eq!(Quantity::clamped(0).get(), 1);
/// assert_eq!(Quantity::clamped(-5).get(), 1);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// One unit.
    pub const ONE: Self = Self(1);

    /// Create a quantity without clamping.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create a quantity from a requested value, clamping to at least 1.
    ///
    /// Requests beyond `u32::MAX` saturate.
    #[must_use]
    pub fn clamped(requested: i64) -> Self {
        Self(u32::try_from(requested.max(1)).unwrap_or(u32::MAX))
    }

    /// The underlying count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// This quantity plus one, saturating.
    #[must_use]
    pub const fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Add another quantity, saturating.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}
