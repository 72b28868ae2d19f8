//! Sign-in commands.
//!
//! The credential is the ID token Google Identity Services hands to the
//! page; its payload is decoded without verifying the signature.

use pantry_core::Action;
use pantry_core::identity::IdentityProvider;

use super::{CommandError, Pantry};

/// Report the signed-in user.
#[must_use]
pub fn whoami(pantry: &Pantry) -> Vec<String> {
    let line = pantry.state().user.as_ref().map_or_else(
        || "Not signed in.".to_owned(),
        |user| format!("Signed in as {} <{}>", user.name, user.email),
    );
    vec![line]
}

/// Sign in with a delivered credential.
///
/// # Errors
///
/// Returns `CommandError::Identity` if the credential cannot be decoded, in
/// which case the stored user is left alone.
pub fn sign_in(
    pantry: &mut Pantry,
    identity: &impl IdentityProvider,
    credential: &str,
) -> Result<Vec<String>, CommandError> {
    let user = identity.sign_in(credential).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected sign-in credential");
    })?;

    let line = format!("Signed in as {} <{}>", user.name, user.email);
    pantry.dispatch(Action::SignIn(user))?;
    Ok(vec![line])
}

/// Forget the signed-in user.
///
/// # Errors
///
/// Returns `CommandError::Storage` if the user record cannot be removed.
pub fn sign_out(pantry: &mut Pantry) -> Result<Vec<String>, CommandError> {
    pantry.dispatch(Action::SignOut)?;
    Ok(vec!["Signed out.".to_owned()])
}
