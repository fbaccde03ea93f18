//! App shell: the current page, the three forms and the services they share.
//!
//! Errors that escape a form (anything other than a failed auth action) are
//! caught here, logged, and shown as one generic notification. This is a
//! catch-all, not a recovery path; the form is left as it was.
//!
//! A successful submit returns its [`Redirect`] without applying it, so the
//! notification can be shown before [`App::follow`] waits out the delay.

use crate::client::AuthApi;
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::forms::{ForgotPasswordForm, LoginForm, RegisterForm, SubmitContext, SubmitOutcome};
use crate::preferences::{PreferenceStore, Preferences};
use crate::routes::{Redirect, Route};
use crate::ui::Notifier;
use std::error::Error;
use tracing::{error, info};

pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[derive(Debug)]
pub struct App<A, S> {
    api: A,
    preferences: Preferences<S>,
    notifier: Notifier,
    config: AppConfig,
    route: Route,
    login: LoginForm,
    register: RegisterForm,
    forgot_password: ForgotPasswordForm,
}

impl<A: AuthApi, S: PreferenceStore> App<A, S> {
    #[must_use]
    pub fn new(api: A, store: S, config: AppConfig) -> Self {
        Self {
            api,
            preferences: Preferences::new(store),
            notifier: Notifier::new(config.notification_ttl),
            config,
            route: Route::login(),
            login: LoginForm::new(),
            register: RegisterForm::new(),
            forgot_password: ForgotPasswordForm::new(),
        }
    }

    /// Page load: pre-fills the login form from the remembered username.
    pub fn load(&mut self) {
        match self.preferences.remembered_username() {
            Ok(Some(username)) => {
                info!(%username, "restoring remembered username");
                self.login.prefill(&username, true);
            }
            Ok(None) => {}
            Err(err) => self.report_unexpected(&err),
        }
    }

    /// Switches page. A login route carrying a username pre-fills the form;
    /// entering the password reset page shows an empty form again.
    pub fn navigate(&mut self, route: Route) {
        match &route {
            Route::Login {
                username: Some(username),
            } => {
                let remember_me = self.login.remember_me();
                self.login.prefill(username, remember_me);
            }
            Route::ForgotPassword => self.forgot_password.reset(),
            _ => {}
        }
        info!(location = %route, "navigating");
        self.route = route;
    }

    /// Waits out the redirect delay, then navigates.
    pub async fn follow(&mut self, redirect: Redirect) {
        tokio::time::sleep(redirect.after).await;
        self.navigate(redirect.to);
    }

    /// Submits the login form. `None` means an unexpected error was reported
    /// instead.
    pub async fn submit_login(&mut self) -> Option<SubmitOutcome> {
        let context = SubmitContext {
            api: &self.api,
            notifier: &self.notifier,
            redirect_delay: self.config.redirect_delay,
        };
        let result = self.login.submit(context, &self.preferences).await;
        self.settle(result)
    }

    pub async fn submit_register(&mut self) -> Option<SubmitOutcome> {
        let context = SubmitContext {
            api: &self.api,
            notifier: &self.notifier,
            redirect_delay: self.config.redirect_delay,
        };
        let result = self.register.submit(context).await;
        self.settle(result)
    }

    pub async fn submit_forgot_password(&mut self) -> Option<SubmitOutcome> {
        let context = SubmitContext {
            api: &self.api,
            notifier: &self.notifier,
            redirect_delay: self.config.redirect_delay,
        };
        let result = self.forgot_password.submit(context).await;
        self.settle(result)
    }

    fn settle(&self, result: Result<SubmitOutcome, AppError>) -> Option<SubmitOutcome> {
        match result {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                self.report_unexpected(&err);
                None
            }
        }
    }

    /// Global catch-all: log the error, show the generic notification.
    pub fn report_unexpected(&self, err: &dyn Error) {
        error!(error = %err, "unexpected error");
        self.notifier.error(UNEXPECTED_ERROR_MESSAGE);
    }

    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub const fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    #[must_use]
    pub const fn preferences(&self) -> &Preferences<S> {
        &self.preferences
    }

    #[must_use]
    pub const fn login(&self) -> &LoginForm {
        &self.login
    }

    pub fn login_mut(&mut self) -> &mut LoginForm {
        &mut self.login
    }

    #[must_use]
    pub const fn register(&self) -> &RegisterForm {
        &self.register
    }

    pub fn register_mut(&mut self) -> &mut RegisterForm {
        &mut self.register
    }

    #[must_use]
    pub const fn forgot_password(&self) -> &ForgotPasswordForm {
        &self.forgot_password
    }

    pub fn forgot_password_mut(&mut self) -> &mut ForgotPasswordForm {
        &mut self.forgot_password
    }
}
