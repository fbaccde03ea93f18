use super::{build_app, Rejected};
use crate::cli::render;
use crate::config::AppConfig;
use crate::forms::validation::Field;
use crate::forms::SubmitOutcome;
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use std::io::{self, Write};

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub username: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub accept_terms: bool,
}

/// Handle the register action
pub async fn handle(args: Args) -> Result<()> {
    run(args, &mut io::stdout()).await
}

/// Renders the settled form before waiting out the redirect.
async fn run(args: Args, out: &mut impl Write) -> Result<()> {
    let mut app = build_app(&args.config);

    let form = app.register_mut();
    form.input(Field::Username, &args.username);
    form.input(Field::Email, &args.email);
    form.input(Field::Password, args.password.expose_secret());
    form.input(Field::ConfirmPassword, args.confirm_password.expose_secret());
    form.set_accept_terms(args.accept_terms);

    render::pending(out, app.register().button().loading_label())
        .context("failed to write output")?;

    let outcome = app.submit_register().await;

    render::field_errors(out, app.register().errors()).context("failed to write output")?;
    render::notifications(out, app.notifier()).context("failed to write output")?;

    match outcome {
        Some(SubmitOutcome::Succeeded { redirect }) => {
            app.follow(redirect).await;
            render::route(out, app.route()).context("failed to write output")?;
            Ok(())
        }
        Some(SubmitOutcome::Invalid) => Err(Rejected("registration form is invalid").into()),
        Some(SubmitOutcome::Failed) => Err(Rejected("registration failed").into()),
        None => Err(Rejected("registration aborted by an unexpected error").into()),
    }
}
