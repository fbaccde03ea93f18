//! Login page controller. Persists or clears the remembered username, but
//! only once the login action has succeeded.

use super::validation::{validate_required, validate_username, Field};
use super::{action_failed, run_action, SubmitContext, SubmitOutcome};
use crate::client::{AuthApi, Credentials};
use crate::errors::AppError;
use crate::preferences::{PreferenceStore, Preferences};
use crate::routes::{Redirect, Route};
use crate::ui::{FieldErrors, SubmitButton};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument};

pub const SUCCESS_MESSAGE: &str = "Login successful! Redirecting...";
pub const FAILURE_MESSAGE: &str = "Login failed. Please try again.";

const FIELDS: [Field; 2] = [Field::Username, Field::Password];

#[derive(Debug)]
pub struct LoginForm {
    username: String,
    password: SecretString,
    remember_me: bool,
    errors: FieldErrors,
    button: SubmitButton,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            username: String::new(),
            password: SecretString::default(),
            remember_me: false,
            errors: FieldErrors::new(&FIELDS),
            button: SubmitButton::new("Sign in", "Signing in..."),
        }
    }

    /// Input event: stores the value and re-validates that field.
    pub fn input(&mut self, field: Field, value: &str) {
        match field {
            Field::Username => {
                value.clone_into(&mut self.username);
                self.errors.apply(field, validate_username(value));
            }
            Field::Password => {
                self.password = SecretString::from(value.to_string());
                self.errors.apply(field, validate_required(field, value));
            }
            _ => debug!(%field, "login form has no such field"),
        }
    }

    pub fn set_remember_me(&mut self, remember_me: bool) {
        self.remember_me = remember_me;
    }

    /// Fills the username without validating it, as on page load.
    pub fn prefill(&mut self, username: &str, remember_me: bool) {
        username.clone_into(&mut self.username);
        self.remember_me = remember_me;
        self.errors.clear(Field::Username);
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub const fn remember_me(&self) -> bool {
        self.remember_me
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub const fn button(&self) -> &SubmitButton {
        &self.button
    }

    fn validate(&mut self) -> bool {
        let username_ok = self
            .errors
            .apply(Field::Username, validate_username(&self.username));
        let password_ok = self.errors.apply(
            Field::Password,
            validate_required(Field::Password, self.password.expose_secret()),
        );
        username_ok && password_ok
    }

    /// Submit event.
    ///
    /// # Errors
    /// Returns [`AppError::Busy`] if a submission is outstanding, or a storage
    /// error if the remembered username cannot be written.
    #[instrument(skip_all, fields(username = %self.username, remember_me = self.remember_me))]
    pub async fn submit<A, S>(
        &mut self,
        context: SubmitContext<'_, A>,
        preferences: &Preferences<S>,
    ) -> Result<SubmitOutcome, AppError>
    where
        A: AuthApi,
        S: PreferenceStore,
    {
        if !self.validate() {
            debug!("login form invalid");
            return Ok(SubmitOutcome::Invalid);
        }

        let credentials = Credentials {
            username: self.username.clone(),
            password: SecretString::from(self.password.expose_secret().to_string()),
            remember_me: self.remember_me,
        };

        if let Err(error) = run_action(&mut self.button, context.api.login(&credentials)).await {
            return action_failed(error, context.notifier, FAILURE_MESSAGE);
        }

        if credentials.remember_me {
            preferences.remember_username(&credentials.username)?;
        } else {
            preferences.forget_username()?;
        }

        info!("login succeeded");
        context.notifier.success(SUCCESS_MESSAGE);
        Ok(SubmitOutcome::Succeeded {
            redirect: Redirect::new(Route::Dashboard, context.redirect_delay),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::test_support::ScriptedApi;
    use crate::forms::validation::FieldError;
    use crate::preferences::MemoryStore;
    use crate::ui::{NotificationKind, Notifier};
    use std::time::Duration;

    fn context<'a>(api: &'a ScriptedApi, notifier: &'a Notifier) -> SubmitContext<'a, ScriptedApi> {
        SubmitContext {
            api,
            notifier,
            redirect_delay: Duration::from_millis(1500),
        }
    }

    fn filled(username: &str, password: &str, remember_me: bool) -> LoginForm {
        let mut form = LoginForm::new();
        form.input(Field::Username, username);
        form.input(Field::Password, password);
        form.set_remember_me(remember_me);
        form
    }

    #[test]
    fn input_validates_live() {
        let mut form = LoginForm::new();
        form.input(Field::Username, "ab");
        assert_eq!(
            form.errors().message(Field::Username),
            Some(FieldError::UsernameFormat.message())
        );

        form.input(Field::Username, "john123");
        assert!(!form.errors().is_visible(Field::Username));

        form.input(Field::Password, "");
        assert_eq!(
            form.errors().message(Field::Password),
            Some(FieldError::PasswordRequired.message())
        );
    }

    #[tokio::test]
    async fn invalid_form_does_not_call_api() {
        let api = ScriptedApi::succeeding();
        let notifier = Notifier::default();
        let preferences = Preferences::new(MemoryStore::new());
        let mut form = filled("user@name", "", true);

        let outcome = form.submit(context(&api, &notifier), &preferences).await;

        assert_eq!(outcome, Ok(SubmitOutcome::Invalid));
        assert_eq!(api.calls(), 0);
        assert!(form.errors().is_visible(Field::Username));
        assert!(form.errors().is_visible(Field::Password));
        assert!(form.button().is_enabled());
        assert!(notifier.active().is_empty());
        assert_eq!(preferences.remembered_username(), Ok(None));
    }

    #[tokio::test]
    async fn success_with_remember_me_persists_username() {
        let api = ScriptedApi::succeeding();
        let notifier = Notifier::default();
        let preferences = Preferences::new(MemoryStore::new());
        let mut form = filled("john123", "anything", true);

        let outcome = form.submit(context(&api, &notifier), &preferences).await;

        assert_eq!(
            outcome,
            Ok(SubmitOutcome::Succeeded {
                redirect: Redirect::new(Route::Dashboard, Duration::from_millis(1500)),
            })
        );
        assert_eq!(api.calls(), 1);
        assert_eq!(
            preferences.remembered_username(),
            Ok(Some("john123".to_string()))
        );
        let latest = notifier.latest();
        assert_eq!(
            latest.as_ref().map(|notification| notification.kind),
            Some(NotificationKind::Success)
        );
        assert_eq!(
            latest.map(|notification| notification.message),
            Some(SUCCESS_MESSAGE.to_string())
        );
        assert!(form.button().is_enabled());
    }

    #[tokio::test]
    async fn success_without_remember_me_clears_username() {
        let api = ScriptedApi::succeeding();
        let notifier = Notifier::default();
        let preferences = Preferences::new(MemoryStore::new());
        assert_eq!(preferences.remember_username("old_user"), Ok(()));
        let mut form = filled("john123", "password123", false);

        let outcome = form.submit(context(&api, &notifier), &preferences).await;

        assert!(matches!(outcome, Ok(SubmitOutcome::Succeeded { .. })));
        assert_eq!(preferences.remembered_username(), Ok(None));
    }

    #[tokio::test]
    async fn failure_leaves_preferences_untouched() {
        let api = ScriptedApi::failing();
        let notifier = Notifier::default();
        let preferences = Preferences::new(MemoryStore::new());
        assert_eq!(preferences.remember_username("old_user"), Ok(()));
        let mut form = filled("john123", "password123", false);

        let outcome = form.submit(context(&api, &notifier), &preferences).await;

        assert_eq!(outcome, Ok(SubmitOutcome::Failed));
        assert_eq!(
            preferences.remembered_username(),
            Ok(Some("old_user".to_string()))
        );
        assert_eq!(
            notifier.latest().map(|notification| notification.message),
            Some(FAILURE_MESSAGE.to_string())
        );
        assert!(form.button().is_enabled());
        assert!(!form.button().is_loading());
    }

    #[test]
    fn prefill_clears_username_error() {
        let mut form = LoginForm::new();
        form.input(Field::Username, "x");
        form.prefill("john123", true);
        assert_eq!(form.username(), "john123");
        assert!(form.remember_me());
        assert!(!form.errors().has_errors());
    }
}
