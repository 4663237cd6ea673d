//! Required-field validation for the storefront forms.
//!
//! Mirrors browser constraint validation: a `required` field must be
//! non-blank, an email field must also hold a well-formed address. Failed
//! fields are collected so the form can be re-rendered with inline state.

use std::collections::BTreeSet;

use chrono_royale_core::Email;
use thiserror::Error;

/// A validated form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// The HTML `name` of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Fields that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{count} field(s) failed validation", count = .invalid.len())]
pub struct Validation {
    invalid: BTreeSet<Field>,
}

impl Validation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `field` invalid if `value` is blank.
    pub fn require(&mut self, field: Field, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.invalid.insert(field);
        }
        self
    }

    /// Parse a required email, marking `field` invalid on failure.
    pub fn require_email(&mut self, field: Field, value: &str) -> Option<Email> {
        match Email::parse(value) {
            Ok(email) => Some(email),
            Err(_) => {
                self.invalid.insert(field);
                None
            }
        }
    }

    /// Whether every checked field passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    /// Whether `field` failed.
    #[must_use]
    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    /// Failed fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.invalid.iter().copied()
    }
}

/// Trimmed copy of an optional free-text field; blank becomes `None`.
#[must_use]
pub fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_blank() {
        let mut validation = Validation::new();
        validation.require(Field::Name, "  ").require(Field::Message, "hola");
        assert!(!validation.is_valid());
        assert!(validation.is_invalid(Field::Name));
        assert!(!validation.is_invalid(Field::Message));
        assert_eq!(validation.to_string(), "1 field(s) failed validation");
    }

    #[test]
    fn test_require_email() {
        let mut validation = Validation::new();
        assert!(validation.require_email(Field::Email, "a@b.com").is_some());
        assert!(validation.is_valid());

        assert!(validation.require_email(Field::Email, "nope").is_none());
        assert_eq!(validation.fields().collect::<Vec<_>>(), vec![Field::Email]);
    }

    #[test]
    fn test_optional() {
        assert_eq!(optional(Some(" 600 000 000 ")).as_deref(), Some("600 000 000"));
        assert_eq!(optional(Some("   ")), None);
        assert_eq!(optional(None), None);
    }
}
