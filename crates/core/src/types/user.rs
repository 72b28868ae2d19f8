//! The signed-in user singleton.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
    /// The input does not have the `local@domain` shape.
    #[error("email must look like local@domain")]
    Malformed,
}

/// An email address as reported by the identity provider.
///
/// Only the structural `local@domain` shape is checked; the provider is
/// trusted for everything else.
///
/// ```
/// use pantry_core::Email;
///
/// assert!(Email::parse("cook@example.com").is_ok());
/// assert!(Email::parse("@example.com").is_err());
/// assert!(Email::parse("cook@").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse an `Email` from a string, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError`] if the input is blank or lacks a non-empty local
    /// part and domain around a single `@`.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }

        match trimmed.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(trimmed.to_owned()))
            }
            _ => Err(EmailError::Malformed),
        }
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The user signed in through the external identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedInUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
    /// Subject identifier issued by the provider (stable per account).
    #[serde(rename = "sub")]
    pub subject: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(
            Email::parse(" cook@example.com ").unwrap().as_str(),
            "cook@example.com"
        );
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(Email::parse("   "), Err(EmailError::Empty));
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(Email::parse("no-at"), Err(EmailError::Malformed));
        assert_eq!(Email::parse("a@b@c"), Err(EmailError::Malformed));
    }

    #[test]
    fn test_user_record_shape() {
        let user = SignedInUser {
            name: "Ada".to_owned(),
            email: Email::parse("ada@example.com").unwrap(),
            subject: "1234".to_owned(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["sub"], "1234");
        assert_eq!(json["email"], "ada@example.com");
    }
}
