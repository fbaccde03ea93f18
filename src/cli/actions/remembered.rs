use super::store;
use crate::config::AppConfig;
use crate::preferences::Preferences;
use anyhow::{Context, Result};

/// Handle the remembered action
pub fn handle(config: &AppConfig) -> Result<()> {
    let preferences = Preferences::new(store(config));
    let username = preferences
        .remembered_username()
        .context("failed to read the remembered username")?;

    match username {
        Some(username) => println!("{username}"),
        None => println!("no remembered username"),
    }

    Ok(())
}
