// ============================================================================
// SESSION STATE - Who is signed in
// ============================================================================
// Only four operations mutate the session: check_session, login, logout and
// update_user. Everything else reads snapshots or subscribes.
// ============================================================================

use crate::error::ApiError;
use crate::models::Identity;
use crate::services::ApiClient;
use crate::utils::{clear_storage_keys, LOGIN_FAILED, STORAGE_KEY_PROFILE, STORAGE_KEY_SESSION};

use super::reactivity::{ReactiveState, SubscriptionId};

pub const SESSION_NOT_CONFIRMED: &str = "Signed in, but the session could not be confirmed. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: Option<Identity>,
    /// True until the first session check resolves
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }
}

/// Result handed back to the login form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl AuthOutcome {
    pub fn succeeded() -> Self {
        Self { success: true, message: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()) }
    }
}

pub struct SessionStore {
    client: ApiClient,
    state: ReactiveState<Session>,
}

impl SessionStore {
    pub fn new(client: ApiClient) -> Self {
        Self { client, state: ReactiveState::new(Session::default()) }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn snapshot(&self) -> Session {
        self.state.get()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Session) + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id);
    }

    /// Asks the backend who owns the current cookie. Any failure reads as
    /// signed out. `loading` is cleared on every exit path, including when
    /// the future is dropped mid-request.
    pub async fn check_session(&self) {
        log::info!("🔍 Checking session...");
        let mut completion = CheckCompletion { state: &self.state, user: None };

        match self.client.check_session().await {
            Ok(Some(identity)) => {
                log::info!(
                    "✅ Authenticated: {} ({})",
                    identity.email,
                    if identity.is_admin { "admin" } else { "user" }
                );
                completion.user = Some(identity);
            }
            Ok(None) => log::info!("❌ Not authenticated"),
            Err(ApiError::Rejected { status: 401, .. }) => log::info!("❌ Not authenticated (401)"),
            Err(e) => log::warn!("⚠️ Session check failed, treating as signed out: {}", e),
        }

        drop(completion);
    }

    /// Signs in, then resolves through an authoritative `check_session`.
    /// The session never shows an identity the check has not confirmed.
    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        log::info!("🔐 Login attempt: {}", email.trim());

        if let Err(e) = self.client.login(email, password).await {
            log::warn!("❌ Login failed: {}", e);
            let message = match e {
                ApiError::Rejected { message, .. } if !message.is_empty() => message,
                _ => LOGIN_FAILED.to_string(),
            };
            return AuthOutcome::failed(message);
        }

        self.check_session().await;

        if self.state.with(Session::is_authenticated) {
            log::info!("✅ Login confirmed");
            AuthOutcome::succeeded()
        } else {
            log::warn!("⚠️ Login accepted but session check did not confirm it");
            AuthOutcome::failed(SESSION_NOT_CONFIRMED)
        }
    }

    /// Clears the local identity whatever the backend says. Does not
    /// re-check the session afterwards: a stale cookie must not bring the
    /// user back.
    pub async fn logout(&self) {
        log::info!("👋 Logging out...");
        let _clear = ClearUser(&self.state);

        clear_storage_keys(&[STORAGE_KEY_SESSION, STORAGE_KEY_PROFILE]);

        match self.client.logout().await {
            Ok(()) => log::info!("✅ Backend session closed"),
            Err(e) => log::warn!("⚠️ Logout request failed, clearing local session anyway: {}", e),
        }
    }

    /// Replaces the stored identity. The caller has already persisted it.
    pub fn update_user(&self, identity: Identity) {
        log::info!("🔄 Updating user: {}", identity.email);
        self.state.update(|session| session.user = Some(identity));
    }
}

struct CheckCompletion<'a> {
    state: &'a ReactiveState<Session>,
    user: Option<Identity>,
}

impl Drop for CheckCompletion<'_> {
    fn drop(&mut self) {
        let user = self.user.take();
        self.state.update(|session| {
            session.user = user;
            session.loading = false;
        });
    }
}

struct ClearUser<'a>(&'a ReactiveState<Session>);

impl Drop for ClearUser<'_> {
    fn drop(&mut self) {
        self.0.update(|session| session.user = None);
    }
}
