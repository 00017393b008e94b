mod submit;

pub use submit::{Submission, SubmissionState, SubmitController, GENERIC_ERROR_MESSAGE};

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::forms::{AuthTokens, RegisterPayload, RegisterResponse, User};

/// How a registration call can go wrong, as seen from the client.
///
/// `Service` carries the human-readable message the server attached
/// to its rejection, when it attached one.
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("registration service rejected the request")]
    Service { message: Option<String> },
    #[error("failed to reach the registration service")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl EndpointError {
    /// The server-supplied message suitable for showing to the user,
    /// if the failure carried one.
    #[must_use]
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Service { message } => message.as_deref(),
            Self::Network(..) => None,
        }
    }
}

/// The remote service that actually creates the account.
#[async_trait]
pub trait RegistrationEndpoint: Send + Sync {
    async fn register(&self, payload: &RegisterPayload)
        -> Result<RegisterResponse, EndpointError>;
}

/// Activates an authenticated session from server-issued
/// credentials. Side-effect complete once it returns.
pub trait SessionStore: Send + Sync {
    fn login(&self, user: &User, tokens: &AuthTokens);
}

/// Requests a view transition. Fire-and-forget.
pub trait Navigator: Send + Sync {
    fn go_to(&self, destination: &str);
}

/// Receives raw endpoint failures for diagnostics.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &EndpointError);
}

/// Reporter used when no telemetry sink is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ErrorReporter for NoopReporter {
    fn report(&self, _error: &EndpointError) {}
}

#[async_trait]
impl<T: RegistrationEndpoint + ?Sized> RegistrationEndpoint for Arc<T> {
    async fn register(
        &self,
        payload: &RegisterPayload,
    ) -> Result<RegisterResponse, EndpointError> {
        (**self).register(payload).await
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    fn login(&self, user: &User, tokens: &AuthTokens) {
        (**self).login(user, tokens);
    }
}

impl<T: Navigator + ?Sized> Navigator for Arc<T> {
    fn go_to(&self, destination: &str) {
        (**self).go_to(destination);
    }
}

impl<T: ErrorReporter + ?Sized> ErrorReporter for Arc<T> {
    fn report(&self, error: &EndpointError) {
        (**self).report(error);
    }
}
