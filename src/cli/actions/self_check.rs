use super::Rejected;
use crate::config::AppConfig;
use crate::selfcheck;
use anyhow::Result;

/// Handle the self-check action
pub fn handle(config: &AppConfig) -> Result<()> {
    let Some(report) = selfcheck::run_if_dev(&config.host) else {
        println!(
            "self-check skipped: {} is not a development host",
            config.host
        );
        return Ok(());
    };

    for check in &report.checks {
        let status = if check.passed { "pass" } else { "FAIL" };
        println!("{status} {}", check.name);
    }

    if report.passed() {
        println!("{} checks passed", report.checks.len());
        Ok(())
    } else {
        Err(Rejected("self-check failed").into())
    }
}
