//! Header projection and the logout flow.
//!
//! The header is a pure projection of session and cart state; logging out
//! is the one stateful interaction, and the only place the layer awaits
//! an external collaborator.

use std::time::Duration;

use thiserror::Error;

use crate::gateways::{AuthGateway, GatewayError, NavigationGateway, Notifier};
use crate::routes::HOME_PATH;
use crate::state::AppState;

/// Logo image path, always rendered.
const LOGO_URL: &str = "/img/logo.svg";

/// Message shown after a successful logout.
const LOGOUT_SUCCESS_MESSAGE: &str = "You have been logged out";

/// Header text configuration.
///
/// Supplied by the embedding page; when absent, the header renders the
/// logo alone.
#[derive(Debug, Clone)]
pub struct HeaderContent {
    /// Label for the login link.
    pub login_label: String,
    /// Label for the logout link.
    pub logout_label: String,
}

impl Default for HeaderContent {
    fn default() -> Self {
        Self {
            login_label: "Log in".to_owned(),
            logout_label: "Log out".to_owned(),
        }
    }
}

/// View-ready header projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Logo image path.
    pub logo_url: &'static str,
    /// Cart section, present only when content was supplied.
    pub cart: Option<CartSection>,
    /// User section, present only when content was supplied.
    pub user: Option<UserSection>,
}

/// The cart section of the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSection {
    /// Formatted cart total, e.g. `"0 ₽"`.
    pub total: String,
}

/// The user section of the header.
///
/// A login link and a logout link are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserSection {
    /// Anonymous session: link to the login page.
    Login {
        /// Visible link label.
        label: String,
    },
    /// Authenticated session: profile chip with a logout link.
    Profile {
        /// The user's display name.
        name: String,
        /// The user's avatar image path.
        avatar_url: String,
        /// Visible logout link label.
        logout_label: String,
    },
}

/// Errors that can occur while logging out.
#[derive(Debug, Error)]
pub enum LogoutError {
    /// The auth gateway failed or refused the request.
    #[error("logout failed: {0}")]
    Gateway(#[from] GatewayError),

    /// The auth gateway did not answer within the configured bound.
    #[error("logout timed out after {after:?}")]
    TimedOut {
        /// The bound that was exceeded.
        after: Duration,
    },
}

/// Header presentation logic.
///
/// Holds the shared [`AppState`] and the three collaborators the logout
/// flow calls into.
#[derive(Debug)]
pub struct Header<A, N, T> {
    state: AppState,
    auth: A,
    navigation: N,
    notifier: T,
    content: Option<HeaderContent>,
}

impl<A, N, T> Header<A, N, T>
where
    A: AuthGateway,
    N: NavigationGateway,
    T: Notifier,
{
    /// Create a header without content configuration.
    #[must_use]
    pub const fn new(state: AppState, auth: A, navigation: N, notifier: T) -> Self {
        Self {
            state,
            auth,
            navigation,
            notifier,
            content: None,
        }
    }

    /// Supply content configuration, enabling the cart and user sections.
    #[must_use]
    pub fn with_content(mut self, content: HeaderContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Project current session and cart state into a view.
    ///
    /// Recomputed from the stores on every call; the cart total can never
    /// lag behind an order update.
    #[must_use]
    pub fn view(&self) -> HeaderView {
        let Some(content) = &self.content else {
            return HeaderView {
                logo_url: LOGO_URL,
                cart: None,
                user: None,
            };
        };

        let user = match self.state.session().current_user() {
            Some(user) => UserSection::Profile {
                name: user.name,
                avatar_url: user.avatar_url,
                logout_label: content.logout_label.clone(),
            },
            None => UserSection::Login {
                label: content.login_label.clone(),
            },
        };

        HeaderView {
            logo_url: LOGO_URL,
            cart: Some(CartSection {
                total: self.state.cart().total().display(),
            }),
            user: Some(user),
        }
    }

    /// Log the current user out.
    ///
    /// Awaits the auth gateway (bounded by the configured timeout); on
    /// success clears the session, shows the success notification, and
    /// navigates home unless `current_path` already is the home path.
    ///
    /// Called from the logout control, which only renders for an
    /// authenticated session; on an anonymous session this is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`LogoutError`] if the gateway fails or times out. The
    /// session is left untouched in that case so the user may retry, and
    /// no notification or navigation happens.
    pub async fn log_out(&self, current_path: &str) -> Result<(), LogoutError> {
        if !self.state.session().is_authenticated() {
            return Ok(());
        }

        let bound = self.state.config().logout_timeout;
        match tokio::time::timeout(bound, self.auth.logout()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "auth gateway rejected logout");
                return Err(e.into());
            }
            Err(_) => {
                tracing::warn!(timeout = ?bound, "logout timed out");
                return Err(LogoutError::TimedOut { after: bound });
            }
        }

        self.state.session().logout();
        self.notifier.success(LOGOUT_SUCCESS_MESSAGE);

        if current_path != HOME_PATH {
            self.navigation.navigate(HOME_PATH);
        }

        tracing::info!("user logged out");
        Ok(())
    }
}
