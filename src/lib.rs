//! Daily Challenge client
//!
//! Session and challenge-submission orchestration for the "one challenge per
//! day" backend. Users authenticate, fetch the single daily challenge, submit
//! exactly one answer before the UTC-midnight deadline, and track
//! streaks/points/rank. Streaks, points, and ranking are computed server-side;
//! this client only renders what the backend reports.
//!
//! ## Module Structure
//!
//! - `error`: failure taxonomy (request / validation / session expiry)
//! - `models`: wire types mirroring the backend's JSON records
//! - `config`: client configuration (TOML file + env override)
//! - `token_store`: the persisted opaque bearer credential
//! - `api`: Request Gateway over the REST boundary
//! - `session`: Session Manager (credential lifecycle + user snapshot)
//! - `countdown`: time remaining until the next UTC-midnight reset
//! - `submission`: Submission Validator (category-keyed shape rules)
//! - `orchestrator`: the top-level challenge flow state machine

pub mod api;
pub mod config;
pub mod countdown;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod session;
pub mod submission;
pub mod token_store;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use orchestrator::{ChallengeFlow, FlowState};
pub use session::{SessionManager, SessionStatus};
pub use token_store::TokenStore;
