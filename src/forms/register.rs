//! Registration page controller. A successful registration redirects to the
//! login page with the new username pre-filled.

use super::validation::{
    validate_confirm_password, validate_email, validate_password, validate_terms,
    validate_username, Field,
};
use super::{action_failed, run_action, SubmitContext, SubmitOutcome};
use crate::client::{AuthApi, Registration};
use crate::errors::AppError;
use crate::routes::{Redirect, Route};
use crate::ui::{FieldErrors, SubmitButton};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument};

pub const SUCCESS_MESSAGE: &str = "Registration successful! Redirecting to login...";
pub const FAILURE_MESSAGE: &str = "Registration failed. Please try again.";

const FIELDS: [Field; 5] = [
    Field::Username,
    Field::Email,
    Field::Password,
    Field::ConfirmPassword,
    Field::AcceptTerms,
];

#[derive(Debug)]
pub struct RegisterForm {
    username: String,
    email: String,
    password: SecretString,
    confirm_password: SecretString,
    accept_terms: bool,
    errors: FieldErrors,
    button: SubmitButton,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: SecretString::default(),
            confirm_password: SecretString::default(),
            accept_terms: false,
            errors: FieldErrors::new(&FIELDS),
            button: SubmitButton::new("Create account", "Creating account..."),
        }
    }

    /// Input event. Editing the password re-checks a confirmation that has
    /// already been typed.
    pub fn input(&mut self, field: Field, value: &str) {
        match field {
            Field::Username => {
                value.clone_into(&mut self.username);
                self.errors.apply(field, validate_username(value));
            }
            Field::Email => {
                value.clone_into(&mut self.email);
                self.errors.apply(field, validate_email(value));
            }
            Field::Password => {
                self.password = SecretString::from(value.to_string());
                self.errors.apply(field, validate_password(value));
                if !self.confirm_password.expose_secret().is_empty() {
                    self.check_confirmation();
                }
            }
            Field::ConfirmPassword => {
                self.confirm_password = SecretString::from(value.to_string());
                self.check_confirmation();
            }
            Field::AcceptTerms => {
                debug!("terms are a checkbox, use set_accept_terms");
            }
        }
    }

    pub fn set_accept_terms(&mut self, accepted: bool) {
        self.accept_terms = accepted;
        if accepted {
            self.errors.clear(Field::AcceptTerms);
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn accept_terms(&self) -> bool {
        self.accept_terms
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub const fn button(&self) -> &SubmitButton {
        &self.button
    }

    fn check_confirmation(&mut self) -> bool {
        self.errors.apply(
            Field::ConfirmPassword,
            validate_confirm_password(
                self.password.expose_secret(),
                self.confirm_password.expose_secret(),
            ),
        )
    }

    fn validate(&mut self) -> bool {
        // every field is checked so all failures show at once
        let results = [
            self.errors
                .apply(Field::Username, validate_username(&self.username)),
            self.errors.apply(Field::Email, validate_email(&self.email)),
            self.errors.apply(
                Field::Password,
                validate_password(self.password.expose_secret()),
            ),
            self.check_confirmation(),
            self.errors
                .apply(Field::AcceptTerms, validate_terms(self.accept_terms)),
        ];
        results.iter().all(|ok| *ok)
    }

    /// Submit event.
    ///
    /// # Errors
    /// Returns [`AppError::Busy`] if a submission is outstanding.
    #[instrument(skip_all, fields(username = %self.username))]
    pub async fn submit<A: AuthApi>(
        &mut self,
        context: SubmitContext<'_, A>,
    ) -> Result<SubmitOutcome, AppError> {
        if !self.validate() {
            debug!("registration form invalid");
            return Ok(SubmitOutcome::Invalid);
        }

        let registration = Registration {
            username: self.username.clone(),
            email: self.email.clone(),
            password: SecretString::from(self.password.expose_secret().to_string()),
            confirm_password: SecretString::from(
                self.confirm_password.expose_secret().to_string(),
            ),
            accept_terms: self.accept_terms,
        };

        if let Err(error) = run_action(&mut self.button, context.api.register(&registration)).await
        {
            return action_failed(error, context.notifier, FAILURE_MESSAGE);
        }

        info!("registration succeeded");
        context.notifier.success(SUCCESS_MESSAGE);
        Ok(SubmitOutcome::Succeeded {
            redirect: Redirect::new(
                Route::login_with_username(registration.username),
                context.redirect_delay,
            ),
        })
    }
}
