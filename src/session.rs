//! Session Manager
//!
//! Owns the credential lifecycle and the current-user snapshot. Every other
//! component reads session state through this type; nothing else writes it.
//!
//! Login is a deliberate two-step protocol: `login` only stores the returned
//! credential, and the caller hydrates the snapshot with `refresh` afterward,
//! so login failures and session-hydration failures stay distinguishable.

use crate::api::ApiClient;
use crate::error::{ClientError, Result};
use crate::models::User;
use crate::token_store::TokenStore;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Process start, before the initial credential check.
    Unknown,
    /// A credential check or login is in flight.
    Authenticating,
    Authenticated,
    Anonymous,
}

#[derive(Debug)]
pub struct SessionManager {
    api: ApiClient,
    tokens: TokenStore,
    status: SessionStatus,
    user: Option<User>,
    loading: bool,
}

impl SessionManager {
    pub fn new(api: ApiClient, tokens: TokenStore) -> Self {
        Self {
            api,
            tokens,
            status: SessionStatus::Unknown,
            user: None,
            loading: true,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// True until the initial credential check has completed.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Initial credential check. A stored credential that the backend rejects
    /// for any reason is treated as "was never valid": it is cleared and the
    /// session lands on `Anonymous` without surfacing an error.
    pub async fn initialize(&mut self) {
        if self.tokens.load().is_some() {
            self.status = SessionStatus::Authenticating;
            match self.api.current_user().await {
                Ok(user) => {
                    self.store_snapshot(user);
                    self.status = SessionStatus::Authenticated;
                }
                Err(err) => {
                    debug!("initial auth check failed: {err}");
                    self.tokens.clear();
                    self.user = None;
                    self.status = SessionStatus::Anonymous;
                }
            }
        } else {
            self.status = SessionStatus::Anonymous;
        }
        self.loading = false;
        self.check_invariant();
    }

    /// Re-fetch the user snapshot and replace it wholesale. No-op without a
    /// credential. A transient failure is logged and swallowed; it must not
    /// force a logout (that distinction belongs to `initialize`). An
    /// unauthorized response, however, means the credential died mid-session.
    pub async fn refresh(&mut self) {
        let Some(token) = self.tokens.load() else {
            return;
        };

        match self.api.current_user().await {
            Ok(user) => {
                // A logout may have raced the fetch; a stale snapshot must not
                // resurrect the session.
                if self.tokens.load().as_deref() != Some(token.as_str()) {
                    debug!("discarding refresh result, credential changed underneath");
                    return;
                }
                self.store_snapshot(user);
                self.status = SessionStatus::Authenticated;
                self.check_invariant();
            }
            Err(err) if err.is_unauthorized() => {
                warn!("credential rejected during refresh, logging out");
                self.logout();
            }
            Err(err) => {
                warn!("user refresh failed: {err}");
            }
        }
    }

    /// Exchange credentials for a bearer token and persist it. Does not
    /// populate the user snapshot; call `refresh` next.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        self.status = SessionStatus::Authenticating;
        match self.api.login(email, password).await {
            Ok(token) => {
                self.tokens.save(&token.access_token)?;
                info!("logged in");
                Ok(())
            }
            Err(err) => {
                self.status = SessionStatus::Anonymous;
                Err(err)
            }
        }
    }

    /// Clear credential and snapshot synchronously. Irreversible without a
    /// new login.
    pub fn logout(&mut self) {
        self.tokens.clear();
        self.user = None;
        self.status = SessionStatus::Anonymous;
        self.check_invariant();
    }

    /// Route an API error through session-expiry handling: a 401 while
    /// authenticated tears the session down and becomes `SessionExpired`;
    /// anything else passes through unchanged.
    pub fn handle_unauthorized(&mut self, err: ClientError) -> ClientError {
        if err.is_unauthorized() && self.is_authenticated() {
            warn!("unauthorized response while authenticated, logging out");
            self.logout();
            ClientError::SessionExpired
        } else {
            err
        }
    }

    fn store_snapshot(&mut self, user: User) {
        if user.longest_streak < user.current_streak {
            // Server-owned invariant; log rather than "fix" foreign truth.
            warn!(
                "backend sent longest_streak {} < current_streak {}",
                user.longest_streak, user.current_streak
            );
        }
        self.user = Some(user);
    }

    fn check_invariant(&self) {
        debug_assert!(
            self.status != SessionStatus::Authenticated
                || (self.user.is_some() && self.tokens.load().is_some()),
            "Authenticated session requires both a credential and a user snapshot"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use httpmock::prelude::*;

    fn user_body(current_streak: u32) -> serde_json::Value {
        serde_json::json!({
            "id": "7f8a3b50-1111-4222-8333-444455556666",
            "username": "ada",
            "email": "ada@example.com",
            "current_streak": current_streak,
            "longest_streak": 9,
            "total_points": 120
        })
    }

    fn session_for(server: &MockServer, dir: &tempfile::TempDir) -> SessionManager {
        let config = ClientConfig {
            api_url: server.base_url(),
            ..ClientConfig::default()
        };
        let tokens = TokenStore::at(dir.path().join("token"));
        let api = ApiClient::new(&config, tokens.clone());
        SessionManager::new(api, tokens)
    }

    #[tokio::test]
    async fn test_initialize_without_credential() {
        let server = MockServer::start();
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_for(&server, &dir);

        assert_eq!(session.status(), SessionStatus::Unknown);
        assert!(session.is_loading());

        session.initialize().await;

        assert_eq!(session.status(), SessionStatus::Anonymous);
        assert!(!session.is_loading());
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_initialize_with_valid_credential() {
        let server = MockServer::start();
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_for(&server, &dir);
        TokenStore::at(dir.path().join("token")).save("tok").unwrap();

        server.mock(|when, then| {
            when.method(GET).path("/user/me");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(user_body(6));
        });

        session.initialize().await;

        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert_eq!(session.user().unwrap().current_streak, 6);
    }

    #[tokio::test]
    async fn test_initialize_with_rejected_credential_clears_it() {
        let server = MockServer::start();
        let dir = tempfile::tempdir().unwrap();
        let tokens = TokenStore::at(dir.path().join("token"));
        tokens.save("stale").unwrap();
        let mut session = session_for(&server, &dir);

        server.mock(|when, then| {
            when.method(GET).path("/user/me");
            then.status(401)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({"detail": "Could not validate credentials"}));
        });

        session.initialize().await;

        assert_eq!(session.status(), SessionStatus::Anonymous);
        assert_eq!(tokens.load(), None);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_refresh_is_noop_without_credential() {
        let server = MockServer::start();
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_for(&server, &dir);
        session.initialize().await;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/user/me");
            then.status(200).json_body(user_body(1));
        });

        session.refresh().await;
        mock.assert_hits(0);
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_refresh_is_idempotent() {
        let server = MockServer::start();
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_for(&server, &dir);
        TokenStore::at(dir.path().join("token")).save("tok").unwrap();

        server.mock(|when, then| {
            when.method(GET).path("/user/me");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(user_body(6));
        });

        session.initialize().await;
        session.refresh().await;
        let first = session.user().unwrap().clone();
        session.refresh().await;
        let second = session.user().unwrap().clone();

        assert_eq!(first.current_streak, second.current_streak);
        assert_eq!(first.total_points, second.total_points);
        assert_eq!(session.status(), SessionStatus::Authenticated);
    }

    #[tokio::test]
    async fn test_transient_refresh_failure_keeps_session() {
        let server = MockServer::start();
        let dir = tempfile::tempdir().unwrap();
        let tokens = TokenStore::at(dir.path().join("token"));
        tokens.save("tok").unwrap();
        let mut session = session_for(&server, &dir);

        let mut ok = server.mock(|when, then| {
            when.method(GET).path("/user/me");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(user_body(6));
        });
        session.initialize().await;
        assert!(session.is_authenticated());
        ok.delete();

        server.mock(|when, then| {
            when.method(GET).path("/user/me");
            then.status(500);
        });

        session.refresh().await;

        // Can't-refresh is not was-never-valid: the session survives.
        assert!(session.is_authenticated());
        assert_eq!(tokens.load().as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_unauthorized_refresh_forces_logout() {
        let server = MockServer::start();
        let dir = tempfile::tempdir().unwrap();
        let tokens = TokenStore::at(dir.path().join("token"));
        tokens.save("tok").unwrap();
        let mut session = session_for(&server, &dir);

        let mut ok = server.mock(|when, then| {
            when.method(GET).path("/user/me");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(user_body(6));
        });
        session.initialize().await;
        ok.delete();

        server.mock(|when, then| {
            when.method(GET).path("/user/me");
            then.status(401)
                .json_body(serde_json::json!({"detail": "Could not validate credentials"}));
        });

        session.refresh().await;

        assert_eq!(session.status(), SessionStatus::Anonymous);
        assert_eq!(tokens.load(), None);
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_login_is_two_step() {
        let server = MockServer::start();
        let dir = tempfile::tempdir().unwrap();
        let tokens = TokenStore::at(dir.path().join("token"));
        let mut session = session_for(&server, &dir);
        session.initialize().await;

        server.mock(|when, then| {
            when.method(POST)
                .path("/auth/login")
                .json_body(serde_json::json!({"email": "ada@example.com", "password": "hunter2"}));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({"access_token": "fresh-token", "token_type": "bearer"}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/user/me");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(user_body(6));
        });

        session.login("ada@example.com", "hunter2").await.unwrap();
        // Credential stored, snapshot not yet hydrated.
        assert_eq!(tokens.load().as_deref(), Some("fresh-token"));
        assert!(session.user().is_none());
        assert_eq!(session.status(), SessionStatus::Authenticating);

        session.refresh().await;
        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert!(session.user().is_some());
    }

    #[tokio::test]
    async fn test_failed_login_lands_anonymous() {
        let server = MockServer::start();
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_for(&server, &dir);
        session.initialize().await;

        server.mock(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(401)
                .json_body(serde_json::json!({"detail": "Incorrect email or password"}));
        });

        let err = session.login("ada@example.com", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Incorrect email or password");
        assert_eq!(session.status(), SessionStatus::Anonymous);
    }

    #[tokio::test]
    async fn test_handle_unauthorized_maps_to_session_expired() {
        let server = MockServer::start();
        let dir = tempfile::tempdir().unwrap();
        let tokens = TokenStore::at(dir.path().join("token"));
        tokens.save("tok").unwrap();
        let mut session = session_for(&server, &dir);

        server.mock(|when, then| {
            when.method(GET).path("/user/me");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(user_body(6));
        });
        session.initialize().await;

        let err = ClientError::request(Some(reqwest::StatusCode::UNAUTHORIZED), "nope");
        let mapped = session.handle_unauthorized(err);
        assert!(matches!(mapped, ClientError::SessionExpired));
        assert_eq!(session.status(), SessionStatus::Anonymous);
        assert_eq!(tokens.load(), None);

        // Non-401 errors pass through untouched and leave the session alone.
        let err = ClientError::request(Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR), "boom");
        let mapped = session.handle_unauthorized(err);
        assert!(matches!(mapped, ClientError::Request { .. }));
    }
}
