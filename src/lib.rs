//! # authforms
//!
//! Headless login, registration and password reset forms.
//!
//! ## Flows
//!
//! - **Login:** username and password are validated locally, the auth action
//!   runs, and on success the remembered username is stored (remember me
//!   checked) or removed before redirecting to the dashboard.
//! - **Registration:** username, email, password, confirmation and terms are
//!   validated; on success the user lands on the login page with the username
//!   pre-filled.
//! - **Password reset:** the email is validated, the form switches to a
//!   "link sent" confirmation and redirects to login.
//!
//! There is no backend. [`client::SimulatedApi`] stands in for the network
//! with a fixed latency and a random failure rate; the forms only depend on
//! the [`client::AuthApi`] trait. The only persisted state is the remembered
//! username, behind [`preferences::PreferenceStore`].

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod forms;
pub mod preferences;
pub mod routes;
pub mod selfcheck;
pub mod ui;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }
}
