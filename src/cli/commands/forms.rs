//! One subcommand per page, plus the remembered-username and self-check
//! utilities.

use clap::{Arg, ArgAction, Command};

pub const CMD_LOGIN: &str = "login";
pub const CMD_REGISTER: &str = "register";
pub const CMD_FORGOT_PASSWORD: &str = "forgot-password";
pub const CMD_REMEMBERED: &str = "remembered";
pub const CMD_SELF_CHECK: &str = "self-check";

pub const ARG_USERNAME: &str = "username";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";
pub const ARG_REMEMBER_ME: &str = "remember-me";
pub const ARG_ACCEPT_TERMS: &str = "accept-terms";

fn username() -> Arg {
    Arg::new(ARG_USERNAME)
        .short('u')
        .long("username")
        .help("Username (3-20 letters, digits or underscores)")
}

fn email() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long("email")
        .help("Email address")
}

fn password() -> Arg {
    Arg::new(ARG_PASSWORD)
        .short('p')
        .long("password")
        .help("Password")
        .env("AUTHFORMS_PASSWORD")
        .hide_env_values(true)
}

#[must_use]
pub fn login() -> Command {
    Command::new(CMD_LOGIN)
        .about("Sign in; the username defaults to the remembered one")
        .arg(username())
        .arg(password())
        .arg(
            Arg::new(ARG_REMEMBER_ME)
                .long("remember-me")
                .help("Remember the username after a successful login")
                .action(ArgAction::SetTrue),
        )
}

#[must_use]
pub fn register() -> Command {
    Command::new(CMD_REGISTER)
        .about("Create an account")
        .arg(username())
        .arg(email())
        .arg(password())
        .arg(
            Arg::new(ARG_CONFIRM_PASSWORD)
                .short('c')
                .long("confirm-password")
                .help("Password confirmation")
                .env("AUTHFORMS_CONFIRM_PASSWORD")
                .hide_env_values(true),
        )
        .arg(
            Arg::new(ARG_ACCEPT_TERMS)
                .long("accept-terms")
                .help("Accept the terms and conditions")
                .action(ArgAction::SetTrue),
        )
}

#[must_use]
pub fn forgot_password() -> Command {
    Command::new(CMD_FORGOT_PASSWORD)
        .about("Request a password reset link")
        .arg(email())
}

#[must_use]
pub fn remembered() -> Command {
    Command::new(CMD_REMEMBERED).about("Show the remembered username")
}

#[must_use]
pub fn self_check() -> Command {
    Command::new(CMD_SELF_CHECK).about("Run the validator self-check (local hosts only)")
}
