//! End-to-end page flows through the app shell with a deterministic api:
//! register, land on login with the username pre-filled, sign in with
//! "remember me", then reload and find the username restored.

use authforms::app::App;
use authforms::client::{AuthApi, Credentials, PasswordReset, Registration};
use authforms::config::AppConfig;
use authforms::errors::AppError;
use authforms::forms::validation::Field;
use authforms::forms::{register, SubmitOutcome};
use authforms::preferences::{JsonFileStore, MemoryStore, PreferenceStore};
use authforms::routes::{Redirect, Route};
use authforms::ui::NotificationKind;
use std::time::Duration;

/// Always succeeds after a short delay.
#[derive(Debug, Default)]
struct AcceptingApi;

impl AuthApi for AcceptingApi {
    async fn login(&self, _credentials: &Credentials) -> Result<(), AppError> {
        tokio::time::sleep(Duration::from_millis(100)).await;
        Ok(())
    }

    async fn register(&self, _registration: &Registration) -> Result<(), AppError> {
        tokio::time::sleep(Duration::from_millis(100)).await;
        Ok(())
    }

    async fn request_password_reset(&self, _request: &PasswordReset) -> Result<(), AppError> {
        tokio::time::sleep(Duration::from_millis(100)).await;
        Ok(())
    }
}

fn app<S: PreferenceStore>(store: S) -> App<AcceptingApi, S> {
    App::new(AcceptingApi, store, AppConfig::new())
}

fn redirect_of(outcome: Option<SubmitOutcome>) -> Redirect {
    match outcome {
        Some(SubmitOutcome::Succeeded { redirect }) => redirect,
        other => panic!("expected a successful submit, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn registration_redirects_to_login_with_username() {
    let mut app = app(MemoryStore::new());
    app.navigate(Route::Register);

    let form = app.register_mut();
    form.input(Field::Username, "john123");
    form.input(Field::Email, "user@example.com");
    form.input(Field::Password, "password123");
    form.input(Field::ConfirmPassword, "password123");
    form.set_accept_terms(true);

    let redirect = redirect_of(app.submit_register().await);

    let success = app.notifier().active();
    assert_eq!(success.len(), 1);
    assert_eq!(success[0].kind, NotificationKind::Success);
    assert_eq!(success[0].message, register::SUCCESS_MESSAGE);
    assert_eq!(app.route(), &Route::Register);

    app.follow(redirect).await;
    assert_eq!(app.route(), &Route::login_with_username("john123"));
    assert_eq!(app.login().username(), "john123");
    assert!(!app.register().errors().has_errors());
    assert!(app.register().button().is_enabled());

    // the notification outlives the redirect, then expires
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(app.notifier().active().is_empty());
}

#[tokio::test(start_paused = true)]
async fn remembered_username_survives_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("prefs.json");

    let mut first = app(JsonFileStore::new(&path));
    first.load();
    assert_eq!(first.login().username(), "");

    let form = first.login_mut();
    form.input(Field::Username, "john123");
    form.input(Field::Password, "password123");
    form.set_remember_me(true);
    let redirect = redirect_of(first.submit_login().await);
    first.follow(redirect).await;
    assert_eq!(first.route(), &Route::Dashboard);

    let mut reloaded = app(JsonFileStore::new(&path));
    reloaded.load();
    assert_eq!(reloaded.login().username(), "john123");
    assert!(reloaded.login().remember_me());

    // signing in again without "remember me" forgets the username
    reloaded.login_mut().input(Field::Password, "password123");
    reloaded.login_mut().set_remember_me(false);
    redirect_of(reloaded.submit_login().await);

    let mut third = app(JsonFileStore::new(&path));
    third.load();
    assert_eq!(third.login().username(), "");
}

#[tokio::test(start_paused = true)]
async fn invalid_registration_stays_idle() {
    let mut app = app(MemoryStore::new());
    app.navigate(Route::Register);

    let form = app.register_mut();
    form.input(Field::Username, "john123");
    form.input(Field::Email, "user@example.com");
    form.input(Field::Password, "password123");
    form.input(Field::ConfirmPassword, "password123");

    assert_eq!(app.submit_register().await, Some(SubmitOutcome::Invalid));
    assert_eq!(app.route(), &Route::Register);
    assert!(app.register().errors().is_visible(Field::AcceptTerms));
    assert!(app.notifier().active().is_empty());
}

#[tokio::test(start_paused = true)]
async fn password_reset_shows_confirmation_then_returns_to_login() {
    let mut app = app(MemoryStore::new());
    app.navigate(Route::ForgotPassword);
    app.forgot_password_mut()
        .input(Field::Email, "user@example.com");

    let redirect = redirect_of(app.submit_forgot_password().await);

    assert_eq!(app.forgot_password().sent_to(), Some("user@example.com"));
    app.follow(redirect).await;
    assert_eq!(app.route(), &Route::login());

    app.navigate(Route::ForgotPassword);
    assert!(app.forgot_password().is_form_visible());
}
