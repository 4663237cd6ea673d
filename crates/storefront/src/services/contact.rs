//! Contact page form.

use chrono_royale_core::Email;
use serde::Deserialize;

use super::forms::{self, Field, Validation};

/// Contact form as submitted. Missing fields arrive empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// A contact message that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactForm {
    /// Check required fields: name, email and message.
    ///
    /// # Errors
    ///
    /// Returns the failed fields; nothing is sent in that case.
    pub fn validate(&self) -> Result<ContactMessage, Validation> {
        let mut validation = Validation::new();
        validation
            .require(Field::Name, &self.name)
            .require(Field::Message, &self.message);
        let email = validation.require_email(Field::Email, &self.email);

        match email {
            Some(email) if validation.is_valid() => Ok(ContactMessage {
                name: self.name.trim().to_owned(),
                email,
                phone: forms::optional(self.phone.as_deref()),
                message: self.message.trim().to_owned(),
            }),
            _ => Err(validation),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let message = form(" Ana ", "ana@correo.es", " ¿Disponible? ").validate().unwrap();
        assert_eq!(message.name, "Ana");
        assert_eq!(message.email.as_str(), "ana@correo.es");
        assert_eq!(message.message, "¿Disponible?");
    }

    #[test]
    fn test_all_fields_required() {
        let validation = ContactForm::default().validate().unwrap_err();
        assert!(validation.is_invalid(Field::Name));
        assert!(validation.is_invalid(Field::Email));
        assert!(validation.is_invalid(Field::Message));
    }

    #[test]
    fn test_malformed_email() {
        let validation = form("Ana", "ana-at-correo", "hola").validate().unwrap_err();
        assert_eq!(validation.fields().collect::<Vec<_>>(), vec![Field::Email]);
    }
}
