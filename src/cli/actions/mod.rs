pub mod forgot_password;
pub mod login;
pub mod register;
pub mod remembered;
pub mod self_check;

use crate::app::App;
use crate::client::SimulatedApi;
use crate::config::AppConfig;
use crate::preferences::{JsonFileStore, MemoryStore, PreferenceStore};
use anyhow::Result;
use std::fmt;

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
    Register(register::Args),
    ForgotPassword(forgot_password::Args),
    Remembered(AppConfig),
    SelfCheck(AppConfig),
}

impl Action {
    /// Execute the action
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] when the submission did not succeed (already shown
    /// to the user), or any other error for unexpected failures.
    pub async fn execute(self) -> Result<()> {
        match self {
            Self::Login(args) => login::handle(args).await,
            Self::Register(args) => register::handle(args).await,
            Self::ForgotPassword(args) => forgot_password::handle(args).await,
            Self::Remembered(config) => remembered::handle(&config),
            Self::SelfCheck(config) => self_check::handle(&config),
        }
    }
}

/// A submission that ended without success. The reason has already been
/// rendered, so the binary only sets the exit status.
#[derive(Debug)]
pub struct Rejected(pub &'static str);

impl fmt::Display for Rejected {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.0)
    }
}

impl std::error::Error for Rejected {}

pub(crate) type CliApp = App<SimulatedApi, Box<dyn PreferenceStore>>;

pub(crate) fn store(config: &AppConfig) -> Box<dyn PreferenceStore> {
    match &config.store_path {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    }
}

/// Builds the app shell and runs the page-load step.
pub(crate) fn build_app(config: &AppConfig) -> CliApp {
    let api = SimulatedApi::new(config.latency, config.failure_rate);
    let mut app = App::new(api, store(config), config.clone());
    app.load();
    app
}
