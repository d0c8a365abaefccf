//! Logout flow scenarios against recording gateway doubles.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use clementine_storefront::config::StorefrontConfig;
use clementine_storefront::fixtures;
use clementine_storefront::gateways::{AuthGateway, GatewayError, NavigationGateway, Notifier};
use clementine_storefront::layout::{Header, HeaderContent, LogoutError};
use clementine_storefront::state::AppState;

#[derive(Clone, Copy)]
enum AuthBehavior {
    Succeed,
    Reject,
    Hang,
}

#[derive(Clone)]
struct RecordingAuth {
    behavior: AuthBehavior,
    calls: Arc<Mutex<u32>>,
}

impl RecordingAuth {
    fn new(behavior: AuthBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl AuthGateway for RecordingAuth {
    async fn logout(&self) -> Result<(), GatewayError> {
        *self.calls.lock().unwrap() += 1;
        match self.behavior {
            AuthBehavior::Succeed => Ok(()),
            AuthBehavior::Reject => Err(GatewayError::Rejected { status: 401 }),
            AuthBehavior::Hang => {
                std::future::pending::<()>().await;
                Ok(())
            }
        }
    }
}

#[derive(Clone, Default)]
struct RecordingNavigation {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigation {
    fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl NavigationGateway for RecordingNavigation {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_owned());
    }
}

#[derive(Clone, Default)]
struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }
}

fn logged_in_state(config: StorefrontConfig) -> AppState {
    let state = AppState::new(config);
    state
        .session()
        .login(fixtures::default_user().expect("bundled fixture"));
    state
}

fn header(
    state: AppState,
    auth: RecordingAuth,
) -> (
    Header<RecordingAuth, RecordingNavigation, RecordingNotifier>,
    RecordingNavigation,
    RecordingNotifier,
) {
    let navigation = RecordingNavigation::default();
    let notifier = RecordingNotifier::default();
    let header = Header::new(state, auth, navigation.clone(), notifier.clone())
        .with_content(HeaderContent::default());
    (header, navigation, notifier)
}

#[tokio::test]
async fn logout_from_home_skips_navigation() {
    let state = logged_in_state(StorefrontConfig::default());
    let auth = RecordingAuth::new(AuthBehavior::Succeed);
    let (header, navigation, notifier) = header(state.clone(), auth.clone());

    header.log_out("/").await.expect("logout succeeds");

    assert_eq!(auth.calls(), 1);
    assert_eq!(notifier.messages().len(), 1);
    assert!(navigation.paths().is_empty());
    assert!(state.session().current_user().is_none());
}

#[tokio::test]
async fn logout_elsewhere_navigates_home_once() {
    let state = logged_in_state(StorefrontConfig::default());
    let auth = RecordingAuth::new(AuthBehavior::Succeed);
    let (header, navigation, notifier) = header(state.clone(), auth.clone());

    header.log_out("/orders").await.expect("logout succeeds");

    assert_eq!(auth.calls(), 1);
    assert_eq!(notifier.messages().len(), 1);
    assert_eq!(navigation.paths(), ["/"]);
    assert!(state.session().current_user().is_none());
}

#[tokio::test]
async fn rejected_logout_keeps_the_session_for_retry() {
    let state = logged_in_state(StorefrontConfig::default());
    let auth = RecordingAuth::new(AuthBehavior::Reject);
    let (header, navigation, notifier) = header(state.clone(), auth.clone());

    let err = header.log_out("/orders").await.expect_err("logout fails");

    assert!(matches!(err, LogoutError::Gateway(_)));
    assert_eq!(auth.calls(), 1);
    assert!(notifier.messages().is_empty());
    assert!(navigation.paths().is_empty());
    assert!(state.session().is_authenticated());
}

#[tokio::test(start_paused = true)]
async fn hung_gateway_times_out_at_the_configured_bound() {
    let config = StorefrontConfig {
        logout_timeout: Duration::from_millis(50),
        ..StorefrontConfig::default()
    };
    let state = logged_in_state(config);
    let auth = RecordingAuth::new(AuthBehavior::Hang);
    let (header, navigation, notifier) = header(state.clone(), auth.clone());

    let err = header.log_out("/orders").await.expect_err("logout times out");

    assert!(matches!(
        err,
        LogoutError::TimedOut { after } if after == Duration::from_millis(50)
    ));
    assert!(notifier.messages().is_empty());
    assert!(navigation.paths().is_empty());
    assert!(state.session().is_authenticated());
}

#[tokio::test]
async fn anonymous_logout_is_a_no_op() {
    let state = AppState::default();
    let auth = RecordingAuth::new(AuthBehavior::Succeed);
    let (header, navigation, notifier) = header(state, auth.clone());

    header.log_out("/").await.expect("no-op succeeds");

    assert_eq!(auth.calls(), 0);
    assert!(notifier.messages().is_empty());
    assert!(navigation.paths().is_empty());
}
