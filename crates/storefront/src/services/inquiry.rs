//! Availability inquiry built from the cart.
//!
//! Pieces are not sold online: the visitor sends the cart contents as an
//! inquiry. Opening the inquiry takes a snapshot of the resolvable cart
//! lines; submitting validates the contact fields and is otherwise
//! simulated (nothing is delivered).

use chrono_royale_core::{Email, Price, ProductId, Quantity};
use serde::Deserialize;

use super::forms::{self, Field, Validation};
use crate::catalog::Catalog;
use crate::models::Cart;

/// One cart line as shown in the inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryLine {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub quantity: Quantity,
    pub line_total: Price,
}

impl InquiryLine {
    /// `"{name} ({brand}) x{qty} — {line total}"`.
    #[must_use]
    pub fn summary_entry(&self) -> String {
        format!(
            "{} ({}) x{} — {}",
            self.name, self.brand, self.quantity, self.line_total
        )
    }
}

/// Snapshot of the cart taken when the inquiry is opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquirySummary {
    pub lines: Vec<InquiryLine>,
    pub total: Price,
    /// Single-line summary submitted with the form; empty for an empty cart.
    pub summary_text: String,
}

impl InquirySummary {
    /// Resolve `cart` against `catalog`. Dangling lines are left out.
    #[must_use]
    pub fn snapshot(cart: &Cart, catalog: &Catalog) -> Self {
        let lines: Vec<InquiryLine> = cart
            .resolved_lines(catalog)
            .into_iter()
            .map(|line| InquiryLine {
                id: line.product.id.clone(),
                name: line.product.name.clone(),
                brand: line.product.brand.clone(),
                quantity: line.qty,
                line_total: line.line_total(),
            })
            .collect();

        if lines.is_empty() {
            return Self::default();
        }

        let summary_text = lines
            .iter()
            .map(InquiryLine::summary_entry)
            .collect::<Vec<_>>()
            .join(" | ");

        Self {
            total: cart.totals(catalog).total,
            lines,
            summary_text,
        }
    }

    /// Whether there is nothing to inquire about.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Inquiry form as submitted. Missing fields arrive empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub cart_summary: String,
}

/// An inquiry that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub cart_summary: String,
}

impl InquiryForm {
    /// Check required fields: name and email.
    ///
    /// # Errors
    ///
    /// Returns the failed fields; nothing is submitted in that case.
    pub fn validate(&self) -> Result<Inquiry, Validation> {
        let mut validation = Validation::new();
        validation.require(Field::Name, &self.name);
        let email = validation.require_email(Field::Email, &self.email);

        match email {
            Some(email) if validation.is_valid() => Ok(Inquiry {
                name: self.name.trim().to_owned(),
                email,
                phone: forms::optional(self.phone.as_deref()),
                message: forms::optional(self.message.as_deref()),
                cart_summary: self.cart_summary.clone(),
            }),
            _ => Err(validation),
        }
    }
}
