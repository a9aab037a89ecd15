//! Challenge Orchestrator
//!
//! Top-level state machine for the daily flow: gate on session readiness,
//! fetch today's challenge, manage the submit-form lifecycle, enforce the
//! one-time-submission lockout client-side, and trigger the post-submission
//! refreshes.
//!
//! The fetch-then-refresh-then-refresh chain is modeled as named states so
//! ordering and error handling of each step stay independently testable.

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::{Challenge, SubmissionDraft, SubmissionResult, SubmissionType};
use crate::session::SessionManager;
use crate::submission;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    /// Waiting on the session's initial credential check.
    Init,
    /// Session is anonymous; hand off to login and do nothing further.
    Redirecting,
    /// Today's challenge fetch in flight.
    Loading,
    /// Challenge on screen, no form open.
    Ready,
    /// Challenge fetch failed. Terminal until `start` is called again.
    LoadError(String),
    /// Submit form open with a live draft.
    SubmitOpen,
    /// Submission dispatched, response pending.
    Submitting,
    /// Dispatch failed after validation; form stays open, draft preserved.
    SubmitError(String),
    /// Submission accepted; result available for the success banner.
    SubmitSuccess,
}

#[derive(Debug)]
pub struct ChallengeFlow {
    api: ApiClient,
    session: SessionManager,
    state: FlowState,
    challenge: Option<Challenge>,
    draft: Option<SubmissionDraft>,
    result: Option<SubmissionResult>,
    /// Validation message surfaced on the open form, cleared on next attempt.
    form_error: Option<String>,
}

impl ChallengeFlow {
    pub fn new(api: ApiClient, session: SessionManager) -> Self {
        Self {
            api,
            session,
            state: FlowState::Init,
            challenge: None,
            draft: None,
            result: None,
            form_error: None,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionManager {
        &mut self.session
    }

    pub fn challenge(&self) -> Option<&Challenge> {
        self.challenge.as_ref()
    }

    pub fn draft(&self) -> Option<&SubmissionDraft> {
        self.draft.as_ref()
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Entry point, also the external re-entry that clears a `LoadError`.
    /// Completes the session's initial check if still pending, then either
    /// redirects (anonymous) or loads today's challenge.
    pub async fn start(&mut self) {
        self.state = FlowState::Init;
        self.challenge = None;
        self.draft = None;
        self.result = None;
        self.form_error = None;

        if self.session.is_loading() {
            self.session.initialize().await;
        }

        if !self.session.is_authenticated() {
            debug!("session anonymous, redirecting to login");
            self.state = FlowState::Redirecting;
            return;
        }

        self.state = FlowState::Loading;
        match self.api.today_challenge().await {
            Ok(challenge) => {
                self.challenge = Some(challenge);
                self.state = FlowState::Ready;
            }
            Err(err) => {
                let err = self.session.handle_unauthorized(err);
                if matches!(err, ClientError::SessionExpired) {
                    self.state = FlowState::Redirecting;
                } else {
                    self.state = FlowState::LoadError(err.to_string());
                }
            }
        }
    }

    /// True while a submit attempt is still permitted for today's challenge.
    pub fn can_submit(&self) -> bool {
        self.state == FlowState::Ready
            && self
                .challenge
                .as_ref()
                .is_some_and(|c| !c.user_submitted)
    }

    /// Open the submit form with a fresh draft. A no-op (returning false)
    /// once `user_submitted` is set, from initial load or a prior submission.
    pub fn open_submit(&mut self) -> bool {
        if !self.can_submit() {
            debug!("submit not available in state {:?}", self.state);
            return false;
        }
        let challenge = self.challenge.as_ref().expect("Ready state holds a challenge");
        self.draft = Some(SubmissionDraft::new(
            challenge.id,
            submission::default_submission_type(&challenge.category),
        ));
        self.form_error = None;
        self.state = FlowState::SubmitOpen;
        true
    }

    /// Discard the draft and close the form.
    pub fn cancel_submit(&mut self) {
        if matches!(self.state, FlowState::SubmitOpen | FlowState::SubmitError(_)) {
            self.draft = None;
            self.form_error = None;
            self.state = FlowState::Ready;
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.content = content.into();
        }
    }

    pub fn set_submission_type(&mut self, submission_type: SubmissionType) {
        if let Some(draft) = self.draft.as_mut() {
            draft.submission_type = submission_type;
        }
    }

    pub fn set_completed(&mut self, completed: bool) {
        if let Some(draft) = self.draft.as_mut() {
            draft.completed = completed;
        }
    }

    /// Validate the current draft and dispatch it. Validation failure keeps
    /// the form open with a message and issues no network call. Dispatch
    /// failure preserves the draft so input is not lost.
    pub async fn submit(&mut self) {
        if !matches!(self.state, FlowState::SubmitOpen | FlowState::SubmitError(_)) {
            debug!("ignoring submit in state {:?}", self.state);
            return;
        }
        let (Some(challenge), Some(draft)) = (self.challenge.as_ref(), self.draft.as_ref()) else {
            return;
        };

        // Re-validate against the latest draft right before dispatch.
        let request = match submission::validate(challenge, draft) {
            Ok(request) => request,
            Err(err) => {
                self.form_error = Some(err.to_string());
                self.state = FlowState::SubmitOpen;
                return;
            }
        };

        self.form_error = None;
        self.state = FlowState::Submitting;

        match self.api.submit(&request).await {
            Ok(result) => {
                info!(points = result.points_awarded, "submission accepted");
                self.result = Some(result);
                self.draft = None;
                self.state = FlowState::SubmitSuccess;
                self.refresh_after_submit().await;
            }
            Err(err) => {
                let err = self.session.handle_unauthorized(err);
                if matches!(err, ClientError::SessionExpired) {
                    self.draft = None;
                    self.state = FlowState::Redirecting;
                } else {
                    self.state = FlowState::SubmitError(err.to_string());
                }
            }
        }
    }

    /// Post-success follow-ups: re-fetch today's challenge for the
    /// authoritative `user_submitted` flag, then refresh the user snapshot for
    /// updated streak/points. Both are best-effort; the submission is already
    /// durable server-side, so failures are logged and the success state
    /// stands.
    async fn refresh_after_submit(&mut self) {
        match self.api.today_challenge().await {
            Ok(challenge) => self.challenge = Some(challenge),
            Err(err) => warn!("challenge refresh after submit failed: {err}"),
        }
        // Lockout holds even if the re-fetch failed.
        if let Some(challenge) = self.challenge.as_mut() {
            challenge.user_submitted = true;
        }

        self.session.refresh().await;
    }

    /// Consume the submission result for the success banner and settle back
    /// into `Ready`. The result is transient and not retained.
    pub fn take_result(&mut self) -> Option<SubmissionResult> {
        let result = self.result.take();
        if self.state == FlowState::SubmitSuccess {
            self.state = FlowState::Ready;
        }
        result
    }
}
