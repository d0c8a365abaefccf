//! External collaborator traits.
//!
//! The state layer depends on three collaborators it does not implement:
//! the auth backend, client-side navigation, and transient notifications.
//! Each is a single-operation trait so the layer can be driven against
//! real implementations or test doubles.

mod error;

pub use error::GatewayError;

use async_trait::async_trait;

/// Auth backend operations used by the state layer.
///
/// [`logout`](AuthGateway::logout) invalidates the session server-side and
/// is the only suspension point in the logout flow.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Invalidate the current session server-side.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the backend is unreachable or rejects
    /// the request.
    async fn logout(&self) -> Result<(), GatewayError>;
}

/// Client-side navigation.
pub trait NavigationGateway: Send + Sync {
    /// Navigate to `path`.
    fn navigate(&self, path: &str);
}

/// Transient user-facing notifications.
pub trait Notifier: Send + Sync {
    /// Display a success message.
    fn success(&self, message: &str);
}
