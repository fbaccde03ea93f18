use super::{build_app, Rejected};
use crate::cli::render;
use crate::config::AppConfig;
use crate::forms::validation::Field;
use crate::forms::SubmitOutcome;
use anyhow::{Context, Result};
use std::io::{self, Write};

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub email: String,
}

/// Handle the forgot-password action
pub async fn handle(args: Args) -> Result<()> {
    run(args, &mut io::stdout()).await
}

/// Renders the settled form before waiting out the redirect.
async fn run(args: Args, out: &mut impl Write) -> Result<()> {
    let mut app = build_app(&args.config);

    app.forgot_password_mut().input(Field::Email, &args.email);

    render::pending(out, app.forgot_password().button().loading_label())
        .context("failed to write output")?;

    let outcome = app.submit_forgot_password().await;

    render::field_errors(out, app.forgot_password().errors()).context("failed to write output")?;
    render::notifications(out, app.notifier()).context("failed to write output")?;

    match outcome {
        Some(SubmitOutcome::Succeeded { redirect }) => {
            if let Some(email) = app.forgot_password().sent_to() {
                writeln!(out, "Check {email} for a link to reset your password.")
                    .context("failed to write output")?;
            }
            app.follow(redirect).await;
            render::route(out, app.route()).context("failed to write output")?;
            Ok(())
        }
        Some(SubmitOutcome::Invalid) => Err(Rejected("password reset form is invalid").into()),
        Some(SubmitOutcome::Failed) => Err(Rejected("password reset request failed").into()),
        None => Err(Rejected("password reset aborted by an unexpected error").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn confirmation_is_rendered_before_redirect() {
        let config = AppConfig::new()
            .with_failure_rate(0.0)
            .with_notification_ttl_ms(1000)
            .normalize();
        let args = Args {
            config,
            email: "user@example.com".to_string(),
        };
        let mut out = Vec::new();

        let result = run(args, &mut out).await;

        assert!(result.is_ok());
        let output = String::from_utf8(out).unwrap_or_default();
        assert_eq!(
            output,
            "Sending...\n\
             [ok] Password reset link sent to your email\n\
             Check user@example.com for a link to reset your password.\n\
             -> /login\n"
        );
    }
}
