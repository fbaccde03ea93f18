//! Password reset request page. On success the form is replaced by a "link
//! sent" confirmation before the redirect back to login.

use super::validation::{validate_email, Field};
use super::{action_failed, run_action, SubmitContext, SubmitOutcome};
use crate::client::{AuthApi, PasswordReset};
use crate::errors::AppError;
use crate::routes::{Redirect, Route};
use crate::ui::{FieldErrors, SubmitButton};
use tracing::{debug, info, instrument};

pub const SUCCESS_MESSAGE: &str = "Password reset link sent to your email";
pub const FAILURE_MESSAGE: &str = "Failed to send reset link. Please try again.";

#[derive(Debug)]
pub struct ForgotPasswordForm {
    email: String,
    sent_to: Option<String>,
    errors: FieldErrors,
    button: SubmitButton,
}

impl Default for ForgotPasswordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ForgotPasswordForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            email: String::new(),
            sent_to: None,
            errors: FieldErrors::new(&[Field::Email]),
            button: SubmitButton::new("Send reset link", "Sending..."),
        }
    }

    pub fn input(&mut self, field: Field, value: &str) {
        if field == Field::Email {
            value.clone_into(&mut self.email);
            self.errors.apply(field, validate_email(value));
        } else {
            debug!(%field, "password reset form has no such field");
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Address the link was sent to, once the request succeeded.
    #[must_use]
    pub fn sent_to(&self) -> Option<&str> {
        self.sent_to.as_deref()
    }

    /// Whether the form (as opposed to the confirmation) is showing.
    #[must_use]
    pub const fn is_form_visible(&self) -> bool {
        self.sent_to.is_none()
    }

    /// Back from the confirmation to an empty form.
    pub fn reset(&mut self) {
        self.email.clear();
        self.sent_to = None;
        self.errors.clear_all();
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub const fn button(&self) -> &SubmitButton {
        &self.button
    }

    /// Submit event.
    ///
    /// # Errors
    /// Returns [`AppError::Busy`] if a submission is outstanding.
    #[instrument(skip_all)]
    pub async fn submit<A: AuthApi>(
        &mut self,
        context: SubmitContext<'_, A>,
    ) -> Result<SubmitOutcome, AppError> {
        if !self.errors.apply(Field::Email, validate_email(&self.email)) {
            debug!("password reset form invalid");
            return Ok(SubmitOutcome::Invalid);
        }

        let request = PasswordReset {
            email: self.email.clone(),
        };

        if let Err(error) = run_action(
            &mut self.button,
            context.api.request_password_reset(&request),
        )
        .await
        {
            return action_failed(error, context.notifier, FAILURE_MESSAGE);
        }

        info!("password reset requested");
        self.sent_to = Some(request.email);
        context.notifier.success(SUCCESS_MESSAGE);
        Ok(SubmitOutcome::Succeeded {
            redirect: Redirect::new(Route::login(), context.redirect_delay),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::test_support::ScriptedApi;
    use crate::forms::validation::FieldError;
    use crate::ui::Notifier;
    use std::time::Duration;

    fn context<'a>(api: &'a ScriptedApi, notifier: &'a Notifier) -> SubmitContext<'a, ScriptedApi> {
        SubmitContext {
            api,
            notifier,
            redirect_delay: Duration::from_secs(2),
        }
    }

    #[tokio::test]
    async fn empty_email_is_required() {
        let api = ScriptedApi::succeeding();
        let notifier = Notifier::default();
        let mut form = ForgotPasswordForm::new();

        assert_eq!(
            form.submit(context(&api, &notifier)).await,
            Ok(SubmitOutcome::Invalid)
        );
        assert_eq!(
            form.errors().message(Field::Email),
            Some(FieldError::EmailRequired.message())
        );
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn success_switches_to_confirmation() {
        let api = ScriptedApi::succeeding();
        let notifier = Notifier::default();
        let mut form = ForgotPasswordForm::new();
        form.input(Field::Email, "user@example.com");

        let outcome = form.submit(context(&api, &notifier)).await;

        assert_eq!(
            outcome,
            Ok(SubmitOutcome::Succeeded {
                redirect: Redirect::new(Route::login(), Duration::from_secs(2)),
            })
        );
        assert!(!form.is_form_visible());
        assert_eq!(form.sent_to(), Some("user@example.com"));

        form.reset();
        assert!(form.is_form_visible());
        assert_eq!(form.email(), "");
    }

    #[tokio::test]
    async fn failure_keeps_form_visible() {
        let api = ScriptedApi::failing();
        let notifier = Notifier::default();
        let mut form = ForgotPasswordForm::new();
        form.input(Field::Email, "user@example.com");

        assert_eq!(
            form.submit(context(&api, &notifier)).await,
            Ok(SubmitOutcome::Failed)
        );
        assert!(form.is_form_visible());
        assert!(form.button().is_enabled());
        assert_eq!(
            notifier.latest().map(|notification| notification.message),
            Some(FAILURE_MESSAGE.to_string())
        );
    }
}
