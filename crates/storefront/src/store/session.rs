//! Session state: the currently authenticated user.

use tokio::sync::watch;

use crate::models::User;

/// Holds the current authenticated user, if any.
///
/// There is exactly one current user value at any time; `None` denotes an
/// anonymous session. The user record is replaced wholesale on login and
/// cleared wholesale on logout - no field-level edits. Both transitions
/// are idempotent and infallible.
#[derive(Debug)]
pub struct SessionStore {
    current: watch::Sender<Option<User>>,
}

impl SessionStore {
    /// Create an anonymous session.
    #[must_use]
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self { current }
    }

    /// Replace the current user with `user`.
    pub fn login(&self, user: User) {
        tracing::info!(user = %user.id, "session user set");
        self.current.send_replace(Some(user));
    }

    /// Clear the current user.
    pub fn logout(&self) {
        if self.current.send_replace(None).is_some() {
            tracing::info!("session user cleared");
        }
    }

    /// Snapshot of the current user.
    ///
    /// Returns a clone; the stored value is only mutated through
    /// [`login`](Self::login) and [`logout`](Self::logout).
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.current.borrow().clone()
    }

    /// Whether a user is currently logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Subscribe to session changes.
    ///
    /// The receiver observes every mutation; sends are synchronous, so a
    /// subscriber that re-derives view state sees the new value before
    /// the next read.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.current.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
