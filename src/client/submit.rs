use std::sync::{Mutex, PoisonError};
use validator::{Validate, ValidateError};

use super::{ErrorReporter, Navigator, RegistrationEndpoint, SessionStore};
use crate::forms::{Register, RegisterResponse};

/// Shown when the server gave us nothing better to show.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// What the presentation layer observes between and during
/// submissions. Snapshots only; the controller owns the live value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub pending: bool,
    pub last_error: Option<String>,
}

/// Outcome of one completed submission attempt.
#[derive(Debug)]
pub enum Submission {
    Success(RegisterResponse),
    /// The defensive validation guard fired. The live form should
    /// have blocked submission before this point.
    Rejected(ValidateError),
    Failure { message: String },
}

/// Drives one registration form: validates the input, calls the
/// registration endpoint, and on success logs the session in and
/// asks for navigation.
///
/// At most one submission runs at a time; a second `submit` while
/// one is in flight returns `None` without touching anything.
pub struct SubmitController<E, S, N, R> {
    endpoint: E,
    sessions: S,
    navigator: N,
    reporter: R,
    destination: String,
    state: Mutex<SubmissionState>,
}

impl<E, S, N, R> SubmitController<E, S, N, R>
where
    E: RegistrationEndpoint,
    S: SessionStore,
    N: Navigator,
    R: ErrorReporter,
{
    /// `destination` is where the navigator is sent after a
    /// successful registration.
    pub fn new(
        endpoint: E,
        sessions: S,
        navigator: N,
        reporter: R,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            endpoint,
            sessions,
            navigator,
            reporter,
            destination: destination.into(),
            state: Mutex::new(SubmissionState::default()),
        }
    }

    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.lock_state().clone()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, SubmissionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Flips the state to pending unless a submission is already in
    /// flight. One critical section, so transitions are serialized.
    fn begin(&self) -> bool {
        let mut state = self.lock_state();
        if state.pending {
            return false;
        }

        state.pending = true;
        state.last_error = None;
        true
    }

    fn finish(&self, last_error: Option<String>) {
        let mut state = self.lock_state();
        state.pending = false;
        state.last_error = last_error;
    }

    /// Runs the whole submit pipeline and resolves every failure
    /// into a [`Submission`]; nothing escapes as a panic or an
    /// unhandled error.
    ///
    /// Returns `None` when a submission is already pending.
    #[tracing::instrument(skip_all, name = "client.users.register")]
    pub async fn submit(&self, form: &Register) -> Option<Submission> {
        if !self.begin() {
            tracing::debug!("a submission is already in flight, ignoring");
            return None;
        }

        if let Err(errors) = form.validate() {
            tracing::warn!("submission blocked by form validation");
            self.finish(None);
            return Some(Submission::Rejected(errors));
        }

        let payload = form.to_payload();
        match self.endpoint.register(&payload).await {
            Ok(response) => {
                self.sessions.login(&response.user, &response.tokens);
                self.navigator.go_to(&self.destination);
                self.finish(None);
                Some(Submission::Success(response))
            }
            Err(error) => {
                tracing::error!("user registration failed: {error}");
                self.reporter.report(&error);

                let message = error
                    .user_message()
                    .unwrap_or(GENERIC_ERROR_MESSAGE)
                    .to_string();
                self.finish(Some(message.clone()));
                Some(Submission::Failure { message })
            }
        }
    }
}
