//! Error taxonomy for the client
//!
//! Three kinds of failure cross component boundaries:
//! - `Request`: the backend said no (or the network did)
//! - `Validation`: a local pre-submit check failed; never reaches the network
//! - `SessionExpired`: an unauthorized response while authenticated; the
//!   session must be torn down

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or HTTP failure from the backend boundary.
    #[error("{message}")]
    Request {
        /// HTTP status, absent for transport-level failures.
        status: Option<StatusCode>,
        message: String,
    },

    /// Pre-submit local check failure with a user-facing message.
    #[error("{0}")]
    Validation(String),

    /// The stored credential was rejected mid-session.
    #[error("Session expired, please log in again")]
    SessionExpired,
}

impl ClientError {
    pub fn request(status: Option<StatusCode>, message: impl Into<String>) -> Self {
        Self::Request {
            status,
            message: message.into(),
        }
    }

    /// True for a 401 response from the backend.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::Request {
                status: Some(status),
                ..
            } if *status == StatusCode::UNAUTHORIZED
        )
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Request {
            status: None,
            message: format!("Local storage error: {err}"),
        }
    }
}
