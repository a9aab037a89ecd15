//! Submission Validator
//!
//! Determines the required submission shape from the challenge category and
//! enforces pre-submit completeness. Pure functions only; no side effects and
//! no network access. The orchestrator re-runs validation immediately before
//! dispatch so a stale draft can never slip through.

use crate::error::{ClientError, Result};
use crate::models::{Category, Challenge, SubmissionDraft, SubmissionRequest, SubmissionType};

/// Content stored for completed life challenges; they carry no user-authored
/// text.
pub const COMPLETED_CONTENT: &str = "Completed";

pub const ERR_MUST_COMPLETE: &str = "You must mark the challenge as completed";
pub const ERR_ANSWER_REQUIRED: &str = "Please provide your answer";
pub const ERR_WRONG_CHALLENGE: &str = "Submission does not match the current challenge";

/// Free-form answers are caller-selectable between plain text and code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreeFormKind {
    Text,
    Code,
}

/// Closed set of submission shapes, selected by category. Keeps the state
/// space exhaustively matchable instead of string-keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    /// Completion tick only ("life" challenges).
    Checkbox,
    FreeForm(FreeFormKind),
}

/// Map a challenge category to its required submission shape.
pub fn kind_for_category(category: &Category) -> SubmissionKind {
    match category {
        Category::Life => SubmissionKind::Checkbox,
        _ => SubmissionKind::FreeForm(FreeFormKind::Text),
    }
}

/// Default wire type for a fresh draft of the given category.
pub fn default_submission_type(category: &Category) -> SubmissionType {
    match kind_for_category(category) {
        SubmissionKind::Checkbox => SubmissionType::Checkbox,
        SubmissionKind::FreeForm(_) => SubmissionType::Text,
    }
}

/// Validate a draft against its challenge and synthesize the request to send.
///
/// Checkbox challenges require the completed tick and get the fixed literal as
/// content. Free-form challenges require non-whitespace content; submitting at
/// all implies completion, so `completed` is forced true.
pub fn validate(challenge: &Challenge, draft: &SubmissionDraft) -> Result<SubmissionRequest> {
    if draft.challenge_id != challenge.id {
        return Err(ClientError::Validation(ERR_WRONG_CHALLENGE.to_string()));
    }

    match kind_for_category(&challenge.category) {
        SubmissionKind::Checkbox => {
            if !draft.completed {
                return Err(ClientError::Validation(ERR_MUST_COMPLETE.to_string()));
            }
            Ok(SubmissionRequest {
                challenge_id: challenge.id,
                content: COMPLETED_CONTENT.to_string(),
                submission_type: SubmissionType::Checkbox,
                completed: true,
            })
        }
        SubmissionKind::FreeForm(_) => {
            if draft.content.trim().is_empty() {
                return Err(ClientError::Validation(ERR_ANSWER_REQUIRED.to_string()));
            }
            // A checkbox draft can't be sent for a free-form challenge.
            let submission_type = match draft.submission_type {
                SubmissionType::Code => SubmissionType::Code,
                _ => SubmissionType::Text,
            };
            Ok(SubmissionRequest {
                challenge_id: challenge.id,
                content: draft.content.clone(),
                submission_type,
                completed: true,
            })
        }
    }
}
