//! Wire types for the Daily Challenge backend
//!
//! These mirror the backend's JSON records. The client never computes derived
//! gamification state (streaks, points, rank); user snapshots are replaced
//! wholesale on refresh, never edited field by field.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Challenge difficulty. Point value is assigned server-side per difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// Challenge category. The backend treats this as an open string set, so
/// anything beyond the known values round-trips through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Logic,
    Coding,
    Life,
    #[serde(untagged)]
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Logic => "logic",
            Self::Coding => "coding",
            Self::Life => "life",
            Self::Other(s) => s,
        }
    }
}

/// Current-user snapshot returned by `GET /user/me`.
///
/// `longest_streak >= current_streak` always holds; the backend owns that
/// invariant and the client only re-renders whatever it is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_points: u32,
    #[serde(default)]
    pub total_submissions: u32,
    #[serde(default)]
    pub last_completed_date: Option<NaiveDate>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Leaderboard entry from `GET /user/leaderboard`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardUser {
    pub rank: u32,
    pub id: Uuid,
    pub username: String,
    pub total_points: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// The single daily challenge from `GET /challenge/today`.
///
/// Immutable for a given day except `user_submitted`, which the backend
/// recomputes on every fetch and which flips to true after a confirmed
/// successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub expected_output: Option<String>,
    #[serde(default)]
    pub active_date: Option<NaiveDate>,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub user_submitted: bool,
}

/// How an answer is entered, as stored on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionType {
    Text,
    Code,
    Checkbox,
}

/// Client-local draft of an answer. Created fresh each time the submit form
/// opens, discarded on cancel or successful send, never persisted.
#[derive(Debug, Clone)]
pub struct SubmissionDraft {
    pub challenge_id: Uuid,
    pub content: String,
    pub submission_type: SubmissionType,
    pub completed: bool,
}

impl SubmissionDraft {
    pub fn new(challenge_id: Uuid, submission_type: SubmissionType) -> Self {
        Self {
            challenge_id,
            content: String::new(),
            submission_type,
            completed: false,
        }
    }
}

/// Validated request body for `POST /challenge/submit`.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRequest {
    pub challenge_id: Uuid,
    pub content: String,
    pub submission_type: SubmissionType,
    pub completed: bool,
}

/// Accepted submission returned by the backend. Consumed once to drive the
/// success banner, not retained.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionResult {
    pub id: Uuid,
    pub challenge_id: Uuid,
    pub submission_type: SubmissionType,
    pub completed: bool,
    pub points_awarded: u32,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Paginated page of past challenges from `GET /challenge/history`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChallengeHistory {
    pub challenges: Vec<Challenge>,
    pub total: u32,
    pub page: u32,
    pub page_size: u32,
}

/// Token response from `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}
