use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

fn filter(verbosity_level: Level) -> Result<EnvFilter> {
    // RUST_LOG=
    Ok(EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy()
        .add_directive("tokio=error".parse()?))
}

/// Initialize logging. Logs go to stderr so command output stays clean.
///
/// # Errors
///
/// Returns an error if the filter or subscriber initialization fails
pub fn init(verbosity_level: Option<Level>, format: LogFormat) -> Result<()> {
    let verbosity_level = verbosity_level.unwrap_or(Level::ERROR);
    let filter = filter(verbosity_level)?;

    match format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(false)
                .with_writer(std::io::stderr);
            let subscriber = Registry::default().with(fmt_layer).with(filter);
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Text => {
            let fmt_layer = fmt::layer()
                .with_file(false)
                .with_line_number(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_target(false)
                .with_writer(std::io::stderr)
                .pretty();
            let subscriber = Registry::default().with(fmt_layer).with(filter);
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}
