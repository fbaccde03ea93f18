//! Form controllers for the login, registration and password reset pages.
//!
//! Every form follows the same submission cycle:
//!
//! 1. **Validate:** all fields are checked; failures are shown inline and the
//!    cycle stops in `Idle` without calling the action.
//! 2. **Submit:** the submit control moves to `Submitting` (disabled, loading
//!    indicator shown) and the injected [`AuthApi`](crate::client::AuthApi)
//!    action is awaited.
//! 3. **Settle:** the control returns to `Idle` on both branches, then a
//!    success or error notification is shown. Success yields a redirect that
//!    the caller applies after its delay.
//!
//! Simulated action failures surface as one generic notification per form.
//! Any other error is returned to the caller.

pub mod forgot_password;
pub mod login;
pub mod register;
pub mod validation;

pub use forgot_password::ForgotPasswordForm;
pub use login::LoginForm;
pub use register::RegisterForm;

use crate::errors::AppError;
use crate::routes::Redirect;
use crate::ui::{Notifier, SubmitButton};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Result of one submit event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid,
    /// The action failed; an error notification is showing.
    Failed,
    Succeeded { redirect: Redirect },
}

/// Services a form needs while submitting.
#[derive(Debug)]
pub struct SubmitContext<'a, A> {
    pub api: &'a A,
    pub notifier: &'a Notifier,
    pub redirect_delay: Duration,
}

impl<A> Clone for SubmitContext<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for SubmitContext<'_, A> {}

/// Runs `action` with the control in `Submitting` and always resets it.
async fn run_action<F>(button: &mut SubmitButton, action: F) -> Result<(), AppError>
where
    F: Future<Output = Result<(), AppError>>,
{
    button.begin()?;
    let result = action.await;
    button.finish();
    result
}

/// Maps a simulated network failure to the form's generic notification.
fn action_failed(
    error: AppError,
    notifier: &Notifier,
    message: &str,
) -> Result<SubmitOutcome, AppError> {
    match error {
        AppError::Network(reason) => {
            warn!(%reason, "submission failed");
            notifier.error(message);
            Ok(SubmitOutcome::Failed)
        }
        other => Err(other),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::client::{AuthApi, Credentials, PasswordReset, Registration};
    use crate::errors::AppError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Deterministic api that either always succeeds or always fails and
    /// counts calls.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedApi {
        pub(crate) fail: bool,
        pub(crate) calls: AtomicUsize,
    }

    impl ScriptedApi {
        pub(crate) fn succeeding() -> Self {
            Self::default()
        }

        pub(crate) fn failing() -> Self {
            Self {
                fail: true,
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn settle(&self) -> Result<(), AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(AppError::Network("scripted failure".to_string()))
            } else {
                Ok(())
            }
        }
    }

    impl AuthApi for ScriptedApi {
        async fn login(&self, _credentials: &Credentials) -> Result<(), AppError> {
            self.settle()
        }

        async fn register(&self, _registration: &Registration) -> Result<(), AppError> {
            self.settle()
        }

        async fn request_password_reset(&self, _request: &PasswordReset) -> Result<(), AppError> {
            self.settle()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::NotificationKind;

    #[tokio::test]
    async fn run_action_resets_button_on_failure() {
        let mut button = SubmitButton::new("Send", "Sending...");
        let result = run_action(&mut button, async {
            Err(AppError::Network("down".to_string()))
        })
        .await;
        assert!(result.is_err());
        assert!(button.is_enabled());
    }

    #[test]
    fn action_failed_notifies_only_network_errors() {
        let notifier = Notifier::default();

        let outcome = action_failed(
            AppError::Network("down".to_string()),
            &notifier,
            "Login failed. Please try again.",
        );
        assert_eq!(outcome, Ok(SubmitOutcome::Failed));
        assert_eq!(
            notifier.latest().map(|notification| notification.kind),
            Some(NotificationKind::Error)
        );

        let outcome = action_failed(
            AppError::Storage("disk full".to_string()),
            &notifier,
            "Login failed. Please try again.",
        );
        assert_eq!(outcome, Err(AppError::Storage("disk full".to_string())));
        assert_eq!(notifier.active().len(), 1);
    }
}
