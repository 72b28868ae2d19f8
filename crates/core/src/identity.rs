//! Third-party sign-in.
//!
//! The identity SDK runs in the user's browser and hands back a signed token
//! (a JWS in compact form). Only the payload segment is read: it is
//! base64url-decoded and parsed as JSON for `name`, `email` and `sub`. The
//! signature is **not** verified here.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::types::{Email, EmailError, SignedInUser};

/// Errors turning a credential into a [`SignedInUser`].
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// No credential was delivered.
    #[error("credential is empty")]
    Empty,

    /// The token is not three dot-separated segments.
    #[error("credential is not a compact token ({segments} segments)")]
    Malformed { segments: usize },

    /// The payload segment is not base64.
    #[error("credential payload is not base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// The payload is not the expected JSON object.
    #[error("credential payload is not valid claims: {0}")]
    Claims(#[from] serde_json::Error),

    /// A required claim is absent or blank.
    #[error("credential is missing the {0} claim")]
    MissingClaim(&'static str),

    /// The email claim is not an address.
    #[error("credential email is invalid: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Capability: turn a delivered credential into a signed-in user.
pub trait IdentityProvider: Send + Sync {
    /// Client identifier the SDK is initialized with.
    fn client_id(&self) -> &str;

    /// Decode the credential delivered by the SDK's sign-in callback.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] if the credential is malformed.
    fn sign_in(&self, credential: &str) -> Result<SignedInUser, IdentityError>;
}

/// Google Identity Services sign-in.
#[derive(Debug, Clone)]
pub struct GoogleIdentity {
    client_id: String,
}

impl GoogleIdentity {
    /// Create a provider for the given OAuth client ID.
    #[must_use]
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
        }
    }
}

impl IdentityProvider for GoogleIdentity {
    fn client_id(&self) -> &str {
        &self.client_id
    }

    fn sign_in(&self, credential: &str) -> Result<SignedInUser, IdentityError> {
        decode_id_token(credential)
    }
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: Option<String>,
    email: Option<String>,
    name: Option<String>,
}

/// Extract the user from a token's payload segment without verifying it.
///
/// Padding and the standard base64 alphabet are tolerated alongside
/// base64url. A missing `name` falls back to the email address.
///
/// # Errors
///
/// Returns [`IdentityError`] if the token is not three segments, the payload
/// is not base64 JSON, or `sub`/`email` are missing.
pub fn decode_id_token(token: &str) -> Result<SignedInUser, IdentityError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(IdentityError::Empty);
    }

    let segments: Vec<&str> = token.split('.').collect();
    let [_header, payload, _signature] = segments.as_slice() else {
        return Err(IdentityError::Malformed {
            segments: segments.len(),
        });
    };

    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = URL_SAFE_NO_PAD.decode(normalized)?;
    let claims: Claims = serde_json::from_slice(&bytes)?;

    let subject = non_blank(claims.sub).ok_or(IdentityError::MissingClaim("sub"))?;
    let email = non_blank(claims.email).ok_or(IdentityError::MissingClaim("email"))?;
    let email = Email::parse(&email)?;
    let name = non_blank(claims.name).unwrap_or_else(|| email.to_string());

    Ok(SignedInUser {
        name,
        email,
        subject,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload),
            "c2lnbmF0dXJl"
        )
    }

    #[test]
    fn test_decodes_claims() {
        let token = token_with(r#"{"sub":"1234","email":"ada@example.com","name":"Ada Lovelace"}"#);
        let user = GoogleIdentity::new("client").sign_in(&token).unwrap();
        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.email.as_str(), "ada@example.com");
        assert_eq!(user.subject, "1234");
    }

    #[test]
    fn test_name_falls_back_to_email() {
        let token = token_with(r#"{"sub":"1","email":"cook@example.com"}"#);
        assert_eq!(decode_id_token(&token).unwrap().name, "cook@example.com");
    }

    #[test]
    fn test_tolerates_padding_and_standard_alphabet() {
        use base64::engine::general_purpose::STANDARD;

        // Padded, standard alphabet
        let payload = STANDARD.encode(r#"{"sub":"~~~","email":"a@b.c"}"#);
        let token = format!("h.{payload}.s");
        assert_eq!(decode_id_token(&token).unwrap().subject, "~~~");
    }

    #[test]
    fn test_rejects_wrong_segment_count() {
        assert!(matches!(
            decode_id_token("only.two"),
            Err(IdentityError::Malformed { segments: 2 })
        ));
        assert!(matches!(decode_id_token("  "), Err(IdentityError::Empty)));
    }

    #[test]
    fn test_rejects_non_base64_payload() {
        assert!(matches!(
            decode_id_token("h.!!!.s"),
            Err(IdentityError::Encoding(_))
        ));
    }

    #[test]
    fn test_rejects_non_json_payload() {
        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("not json"));
        assert!(matches!(decode_id_token(&token), Err(IdentityError::Claims(_))));
    }

    #[test]
    fn test_rejects_missing_claims() {
        let token = token_with(r#"{"email":"a@b.c"}"#);
        assert!(matches!(
            decode_id_token(&token),
            Err(IdentityError::MissingClaim("sub"))
        ));

        let token = token_with(r#"{"sub":"1","email":"   "}"#);
        assert!(matches!(
            decode_id_token(&token),
            Err(IdentityError::MissingClaim("email"))
        ));
    }

    #[test]
    fn test_rejects_bad_email() {
        let token = token_with(r#"{"sub":"1","email":"nobody"}"#);
        assert!(matches!(
            decode_id_token(&token),
            Err(IdentityError::InvalidEmail(_))
        ));
    }
}
