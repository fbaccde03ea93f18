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
    pub username: Option<String>,
    pub password: SecretString,
    pub remember_me: bool,
}

/// Handle the login action
pub async fn handle(args: Args) -> Result<()> {
    run(args, &mut io::stdout()).await
}

/// Renders the settled form before waiting out the redirect.
async fn run(args: Args, out: &mut impl Write) -> Result<()> {
    let mut app = build_app(&args.config);

    let form = app.login_mut();
    if let Some(username) = &args.username {
        form.input(Field::Username, username);
    }
    form.input(Field::Password, args.password.expose_secret());
    form.set_remember_me(args.remember_me);

    render::pending(out, app.login().button().loading_label())
        .context("failed to write output")?;

    let outcome = app.submit_login().await;

    render::field_errors(out, app.login().errors()).context("failed to write output")?;
    render::notifications(out, app.notifier()).context("failed to write output")?;

    match outcome {
        Some(SubmitOutcome::Succeeded { redirect }) => {
            app.follow(redirect).await;
            render::route(out, app.route()).context("failed to write output")?;
            Ok(())
        }
        Some(SubmitOutcome::Invalid) => Err(Rejected("login form is invalid").into()),
        Some(SubmitOutcome::Failed) => Err(Rejected("login failed").into()),
        None => Err(Rejected("login aborted by an unexpected error").into()),
    }
}
