//! Global options shared by every subcommand, mapped onto [`AppConfig`].

use crate::config::AppConfig;
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

pub const ARG_STORE: &str = "store";
pub const ARG_HOST: &str = "host";
pub const ARG_FAILURE_RATE: &str = "failure-rate";
pub const ARG_LATENCY_MS: &str = "latency-ms";
pub const ARG_REDIRECT_DELAY_MS: &str = "redirect-delay-ms";
pub const ARG_NOTIFICATION_TTL_MS: &str = "notification-ttl-ms";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_STORE)
                .short('s')
                .long("store")
                .help("JSON file holding the remembered username (in-memory when unset)")
                .env("AUTHFORMS_STORE")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(ARG_HOST)
                .long("host")
                .help("Host the pages are served from; self-check only runs on local hosts")
                .env("AUTHFORMS_HOST")
                .global(true)
                .default_value("localhost"),
        )
        .arg(
            Arg::new(ARG_FAILURE_RATE)
                .long("failure-rate")
                .help("Probability in 0.0..=1.0 that a simulated request fails")
                .env("AUTHFORMS_FAILURE_RATE")
                .global(true)
                .default_value("0.1")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new(ARG_LATENCY_MS)
                .long("latency-ms")
                .help("Simulated request latency in milliseconds")
                .env("AUTHFORMS_LATENCY_MS")
                .global(true)
                .default_value("1500")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(ARG_REDIRECT_DELAY_MS)
                .long("redirect-delay-ms")
                .help("Delay before redirecting after a successful submission")
                .env("AUTHFORMS_REDIRECT_DELAY_MS")
                .global(true)
                .default_value("2000")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(ARG_NOTIFICATION_TTL_MS)
                .long("notification-ttl-ms")
                .help("How long notifications stay visible")
                .env("AUTHFORMS_NOTIFICATION_TTL_MS")
                .global(true)
                .default_value("5000")
                .value_parser(clap::value_parser!(u64)),
        )
}

/// Builds the normalized config from parsed options.
///
/// # Errors
/// Returns an error if an option with a default is missing from `matches`.
pub fn parse(matches: &ArgMatches) -> Result<AppConfig> {
    let host = matches
        .get_one::<String>(ARG_HOST)
        .context("missing required argument: --host")?;
    let failure_rate = matches
        .get_one::<f64>(ARG_FAILURE_RATE)
        .copied()
        .context("missing required argument: --failure-rate")?;
    let latency_ms = matches
        .get_one::<u64>(ARG_LATENCY_MS)
        .copied()
        .context("missing required argument: --latency-ms")?;
    let redirect_delay_ms = matches
        .get_one::<u64>(ARG_REDIRECT_DELAY_MS)
        .copied()
        .context("missing required argument: --redirect-delay-ms")?;
    let notification_ttl_ms = matches
        .get_one::<u64>(ARG_NOTIFICATION_TTL_MS)
        .copied()
        .context("missing required argument: --notification-ttl-ms")?;

    let mut config = AppConfig::new()
        .with_host(host.as_str())
        .with_failure_rate(failure_rate)
        .with_latency_ms(latency_ms)
        .with_redirect_delay_ms(redirect_delay_ms)
        .with_notification_ttl_ms(notification_ttl_ms);

    if let Some(path) = matches.get_one::<PathBuf>(ARG_STORE) {
        config = config.with_store_path(path.clone());
    }

    Ok(config.normalize())
}
