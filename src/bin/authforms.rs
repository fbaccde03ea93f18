use authforms::{app::UNEXPECTED_ERROR_MESSAGE, cli, cli::actions::Rejected};
use std::process::ExitCode;
use tracing::error;

// Main function
#[tokio::main]
async fn main() -> ExitCode {
    let action = match cli::start() {
        Ok(action) => action,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match action.execute().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.downcast_ref::<Rejected>().is_some() => ExitCode::FAILURE,
        // last-resort catch-all, same message the app shell shows
        Err(err) => {
            error!(error = %format!("{err:#}"), "unexpected error");
            eprintln!("{UNEXPECTED_ERROR_MESSAGE}");
            ExitCode::FAILURE
        }
    }
}
