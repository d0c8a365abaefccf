//! User domain types.
//!
//! The user record is issued wholesale by the auth backend; the state
//! layer never edits individual fields.

use serde::{Deserialize, Serialize};

use clementine_core::{Email, UserId};

/// An authenticated storefront user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identity issued by the auth service.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: Email,
    /// Path to the user's avatar image.
    pub avatar_url: String,
    /// Contact phone number, if the user provided one.
    #[serde(default)]
    pub phone: Option<String>,
}
