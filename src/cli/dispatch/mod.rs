//! Maps parsed CLI arguments to an [`Action`].
//!
//! Form fields that were not given are passed on as empty values so the
//! form validators, not clap, report them.

use crate::cli::actions::{forgot_password, login, register, Action};
use crate::cli::commands::{forms, settings};
use anyhow::{bail, Result};
use clap::ArgMatches;
use secrecy::SecretString;

fn value(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.get_one::<String>(id).cloned()
}

fn secret(matches: &ArgMatches, id: &str) -> SecretString {
    SecretString::from(value(matches, id).unwrap_or_default())
}

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if no known subcommand was given or a global option is
/// missing.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let Some((name, sub)) = matches.subcommand() else {
        bail!("missing subcommand");
    };
    let config = settings::parse(sub)?;

    let action = match name {
        forms::CMD_LOGIN => Action::Login(login::Args {
            config,
            username: value(sub, forms::ARG_USERNAME),
            password: secret(sub, forms::ARG_PASSWORD),
            remember_me: sub.get_flag(forms::ARG_REMEMBER_ME),
        }),
        forms::CMD_REGISTER => Action::Register(register::Args {
            config,
            username: value(sub, forms::ARG_USERNAME).unwrap_or_default(),
            email: value(sub, forms::ARG_EMAIL).unwrap_or_default(),
            password: secret(sub, forms::ARG_PASSWORD),
            confirm_password: secret(sub, forms::ARG_CONFIRM_PASSWORD),
            accept_terms: sub.get_flag(forms::ARG_ACCEPT_TERMS),
        }),
        forms::CMD_FORGOT_PASSWORD => Action::ForgotPassword(forgot_password::Args {
            config,
            email: value(sub, forms::ARG_EMAIL).unwrap_or_default(),
        }),
        forms::CMD_REMEMBERED => Action::Remembered(config),
        forms::CMD_SELF_CHECK => Action::SelfCheck(config),
        other => bail!("unknown subcommand: {other}"),
    };

    Ok(action)
}
