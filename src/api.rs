//! Request Gateway for the backend REST boundary
//!
//! Wraps every outbound call: reads the stored credential at call time and
//! attaches it as a bearer header, serializes bodies as JSON, and normalizes
//! any non-2xx response into `ClientError::Request` carrying the backend's
//! `detail` message when one can be parsed.
//!
//! The gateway never mutates session state. Credential-expiry handling lives
//! in the Session Manager so it is not duplicated per call site.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::models::{
    Challenge, ChallengeHistory, LeaderboardUser, SubmissionRequest, SubmissionResult, Token, User,
};
use crate::token_store::TokenStore;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::debug;

const GENERIC_ERROR: &str = "An error occurred";

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, tokens: TokenStore) -> Self {
        Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer credential when one is stored, then dispatch and
    /// decode. All endpoint methods funnel through here so the error shape is
    /// uniform.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let request = match self.tokens.load() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("detail")
                        .and_then(|d| d.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| GENERIC_ERROR.to_string());
            debug!("request failed: {} {}", status, message);
            return Err(ClientError::request(Some(status), message));
        }

        Ok(response.json().await?)
    }

    // ===== Auth =====

    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<User> {
        self.execute(self.http.post(self.url("/auth/register")).json(&serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        })))
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Token> {
        self.execute(self.http.post(self.url("/auth/login")).json(&serde_json::json!({
            "email": email,
            "password": password,
        })))
        .await
    }

    // ===== User =====

    pub async fn current_user(&self) -> Result<User> {
        self.execute(self.http.get(self.url("/user/me"))).await
    }

    pub async fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardUser>> {
        self.execute(
            self.http
                .get(self.url("/user/leaderboard"))
                .query(&[("limit", limit)]),
        )
        .await
    }

    // ===== Challenges =====

    pub async fn today_challenge(&self) -> Result<Challenge> {
        self.execute(self.http.get(self.url("/challenge/today"))).await
    }

    pub async fn challenge_history(&self, page: u32, page_size: u32) -> Result<ChallengeHistory> {
        self.execute(
            self.http
                .get(self.url("/challenge/history"))
                .query(&[("page", page), ("page_size", page_size)]),
        )
        .await
    }

    pub async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionResult> {
        self.execute(self.http.post(self.url("/challenge/submit")).json(request))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer, dir: &tempfile::TempDir) -> ApiClient {
        let config = ClientConfig {
            api_url: server.base_url(),
            ..ClientConfig::default()
        };
        ApiClient::new(&config, TokenStore::at(dir.path().join("token")))
    }

    #[tokio::test]
    async fn test_bearer_attached_when_token_stored() {
        let server = MockServer::start();
        let dir = tempfile::tempdir().unwrap();
        let client = client_for(&server, &dir);

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/user/me")
                .header("authorization", "Bearer tok-123");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "id": "7f8a3b50-1111-4222-8333-444455556666",
                    "username": "ada",
                    "email": "ada@example.com",
                    "current_streak": 1,
                    "longest_streak": 2,
                    "total_points": 10
                }));
        });

        TokenStore::at(dir.path().join("token")).save("tok-123").unwrap();
        let user = client.current_user().await.unwrap();
        assert_eq!(user.username, "ada");
        mock.assert();
    }

    #[tokio::test]
    async fn test_error_detail_parsed() {
        let server = MockServer::start();
        let dir = tempfile::tempdir().unwrap();
        let client = client_for(&server, &dir);

        server.mock(|when, then| {
            when.method(GET).path("/challenge/today");
            then.status(404)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({"detail": "No challenge available for today"}));
        });

        let err = client.today_challenge().await.unwrap_err();
        assert_eq!(err.to_string(), "No challenge available for today");
        match err {
            ClientError::Request { status, .. } => {
                assert_eq!(status.map(|s| s.as_u16()), Some(404));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_without_body_falls_back_to_generic() {
        let server = MockServer::start();
        let dir = tempfile::tempdir().unwrap();
        let client = client_for(&server, &dir);

        server.mock(|when, then| {
            when.method(GET).path("/challenge/today");
            then.status(502).body("<html>bad gateway</html>");
        });

        let err = client.today_challenge().await.unwrap_err();
        assert_eq!(err.to_string(), GENERIC_ERROR);
    }

    #[tokio::test]
    async fn test_no_header_without_token() {
        let server = MockServer::start();
        let dir = tempfile::tempdir().unwrap();
        let client = client_for(&server, &dir);

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/user/leaderboard")
                .query_param("limit", "5");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!([]));
        });

        let rows = client.leaderboard(5).await.unwrap();
        assert!(rows.is_empty());
        mock.assert();
    }
}
