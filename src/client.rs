//! Auth actions invoked by the forms once validation passes.
//!
//! There is no backend: [`SimulatedApi`] stands in for the HTTP calls with a
//! fixed latency and a random failure rate. The forms only see the
//! [`AuthApi`] trait, so tests inject deterministic implementations.

use crate::errors::AppError;
use rand::Rng;
use secrecy::SecretString;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Login submission, alive only for the duration of the submit.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
    pub remember_me: bool,
}

#[derive(Debug)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub accept_terms: bool,
}

#[derive(Debug)]
pub struct PasswordReset {
    pub email: String,
}

/// Asynchronous auth operations. Every call settles with `Ok` or an error;
/// there is no cancellation.
pub trait AuthApi: Send + Sync {
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<(), AppError>> + Send;

    fn register(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = Result<(), AppError>> + Send;

    fn request_password_reset(
        &self,
        request: &PasswordReset,
    ) -> impl Future<Output = Result<(), AppError>> + Send;
}

/// Delayed fake that fails with probability `failure_rate`.
#[derive(Clone, Debug)]
pub struct SimulatedApi {
    latency: Duration,
    failure_rate: f64,
}

impl Default for SimulatedApi {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATENCY, Self::DEFAULT_FAILURE_RATE)
    }
}

impl SimulatedApi {
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);
    pub const DEFAULT_FAILURE_RATE: f64 = 0.1;

    /// `failure_rate` is clamped to `0.0..=1.0`; NaN counts as zero.
    #[must_use]
    pub fn new(latency: Duration, failure_rate: f64) -> Self {
        let failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };
        Self {
            latency,
            failure_rate,
        }
    }

    #[must_use]
    pub const fn failure_rate(&self) -> f64 {
        self.failure_rate
    }

    async fn call(&self, operation: &'static str) -> Result<(), AppError> {
        // drawn before the await so the thread-local rng never crosses it
        let fails = rand::thread_rng().gen_bool(self.failure_rate);
        debug!(operation, latency_ms = self.latency.as_millis(), "simulated request");
        tokio::time::sleep(self.latency).await;

        if fails {
            warn!(operation, "simulated request failed");
            Err(AppError::Network(format!("{operation} request failed")))
        } else {
            Ok(())
        }
    }
}

impl AuthApi for SimulatedApi {
    #[instrument(skip_all, fields(username = %credentials.username))]
    async fn login(&self, credentials: &Credentials) -> Result<(), AppError> {
        self.call("login").await
    }

    #[instrument(skip_all, fields(username = %registration.username))]
    async fn register(&self, registration: &Registration) -> Result<(), AppError> {
        self.call("register").await
    }

    #[instrument(skip_all)]
    async fn request_password_reset(&self, _request: &PasswordReset) -> Result<(), AppError> {
        self.call("password reset").await
    }
}
