use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;
use clap::ArgMatches;

/// Map verbosity count to tracing level
const fn get_verbosity_level(verbosity: u8) -> Option<tracing::Level> {
    match verbosity {
        0 => None,
        1 => Some(tracing::Level::WARN),
        2 => Some(tracing::Level::INFO),
        3 => Some(tracing::Level::DEBUG),
        _ => Some(tracing::Level::TRACE),
    }
}

/// Global options are read from the subcommand, where clap propagates them
/// regardless of their position on the command line.
fn global_matches(matches: &ArgMatches) -> &ArgMatches {
    matches.subcommand().map_or(matches, |(_, sub)| sub)
}

/// Main entry point for the CLI - builds and returns the Action
///
/// # Errors
///
/// Returns an error if argument parsing, telemetry initialization, or action dispatch fails
pub fn start() -> Result<Action> {
    // 1. Parse command-line arguments
    let matches = commands::new().get_matches();
    let globals = global_matches(&matches);

    // 2. Extract verbosity level and log format
    let verbosity_level = get_verbosity_level(
        globals
            .get_one::<u8>(commands::logging::ARG_VERBOSITY)
            .copied()
            .unwrap_or(0),
    );
    let log_format = globals
        .get_one::<String>(commands::logging::ARG_LOG_FORMAT)
        .map_or_else(telemetry::LogFormat::default, |value| {
            telemetry::LogFormat::from_arg(value)
        });

    // 3. Initialize telemetry
    telemetry::init(verbosity_level, log_format)?;

    // 4. Dispatch to appropriate action
    let action = dispatch::handler(&matches)?;

    // 5. Return the action for execution by the binary
    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(get_verbosity_level(0), None);
        assert_eq!(get_verbosity_level(1), Some(tracing::Level::WARN));
        assert_eq!(get_verbosity_level(2), Some(tracing::Level::INFO));
        assert_eq!(get_verbosity_level(3), Some(tracing::Level::DEBUG));
        assert_eq!(get_verbosity_level(9), Some(tracing::Level::TRACE));
    }

    #[test]
    fn verbosity_after_subcommand_is_seen() {
        temp_env::with_vars([("AUTHFORMS_LOG_LEVEL", None::<&str>)], || {
            let matches =
                commands::new().get_matches_from(vec!["authforms", "remembered", "-vv"]);
            assert_eq!(
                global_matches(&matches)
                    .get_one::<u8>(commands::logging::ARG_VERBOSITY)
                    .copied(),
                Some(2)
            );
        });
    }
}
