//! Bundled fixtures standing in for backend responses.
//!
//! The real login flow receives the user record from the auth backend;
//! until that backend is wired in, the bundled record below is used as
//! the login payload.

use thiserror::Error;

use crate::models::User;

/// Bundled user record.
const USER_JSON: &str = include_str!("../static/user.json");

/// Error parsing a bundled fixture.
#[derive(Debug, Error)]
#[error("malformed bundled fixture: {0}")]
pub struct FixtureError(#[from] serde_json::Error);

/// The bundled user record used as the login payload.
///
/// # Errors
///
/// Returns [`FixtureError`] if the bundled JSON does not match the
/// [`User`] model.
pub fn default_user() -> Result<User, FixtureError> {
    Ok(serde_json::from_str(USER_JSON)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_user_parses() {
        let user = default_user().expect("bundled fixture is valid");
        assert_eq!(user.name, "Maria Ivanova");
        assert_eq!(user.email.as_str(), "maria@example.com");
        assert_eq!(user.avatar_url, "/img/users/user5.svg");
    }
}
