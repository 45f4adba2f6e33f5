//! Validation of new account requests.

use validator::Validate;

use super::error::DirectoryError;

/// Trims and lowercases an email so lookups and uniqueness ignore case.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// A request to register an account.
#[derive(Debug, Clone, Validate)]
pub struct NewAccount {
    /// Display name, at most 255 characters.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Normalized email, at most 255 characters.
    #[validate(email, length(max = 255))]
    pub email: String,
    /// Plain secret, hashed before storage.
    #[validate(length(min = 1))]
    pub secret: String,
}

impl NewAccount {
    /// Normalizes and validates raw fields.
    ///
    /// # Errors
    ///
    /// Returns `Validation` naming every blank or malformed field.
    pub fn parse(name: &str, email: &str, secret: &str) -> Result<Self, DirectoryError> {
        let candidate = Self {
            name: name.trim().to_string(),
            email: normalize_email(email),
            secret: secret.to_string(),
        };

        let mut fields: Vec<String> = match candidate.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .field_errors()
                .keys()
                .map(ToString::to_string)
                .collect(),
        };
        if candidate.secret.trim().is_empty() && !fields.iter().any(|f| f == "secret") {
            fields.push("secret".to_string());
        }

        if !fields.is_empty() {
            fields.sort();
            return Err(DirectoryError::Validation(format!(
                "invalid fields: {}",
                fields.join(", ")
            )));
        }

        Ok(candidate)
    }
}
