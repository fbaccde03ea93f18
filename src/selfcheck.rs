//! Development self-check: asserts the validator examples and the field
//! error visibility toggle. Only runs on local development hosts.

use crate::forms::validation::{
    validate_confirm_password, validate_email, validate_password, validate_username, Field,
    ValidationResult,
};
use crate::ui::FieldErrors;
use tracing::{info, warn};

const DEV_HOSTS: [&str; 4] = ["localhost", "127.0.0.1", "::1", "[::1]"];

/// `true` for loopback hosts and the empty host of a `file://` page.
#[must_use]
pub fn is_dev_host(host: &str) -> bool {
    let host = host.trim();
    host.is_empty() || DEV_HOSTS.iter().any(|dev| host.eq_ignore_ascii_case(dev))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Check {
    pub name: String,
    pub passed: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub checks: Vec<Check>,
}

impl Report {
    fn record(&mut self, name: impl Into<String>, passed: bool) {
        let name = name.into();
        if passed {
            info!(check = %name, "self-check passed");
        } else {
            warn!(check = %name, "self-check failed");
        }
        self.checks.push(Check { name, passed });
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|check| !check.passed)
    }
}

fn expect(
    report: &mut Report,
    validator: &str,
    validate: fn(&str) -> ValidationResult,
    cases: &[(&str, bool)],
) {
    for (value, expected) in cases {
        let passed = validate(value).is_ok() == *expected;
        report.record(format!("{validator}({value:?}) == {expected}"), passed);
    }
}

/// Runs every check regardless of host.
#[must_use]
pub fn run() -> Report {
    let mut report = Report::default();

    expect(
        &mut report,
        "username",
        validate_username,
        &[("john123", true), ("ab", false), ("user@name", false)],
    );
    expect(
        &mut report,
        "email",
        validate_email,
        &[
            ("user@example.com", true),
            ("invalid.email", false),
            ("@domain.com", false),
        ],
    );
    expect(
        &mut report,
        "password",
        validate_password,
        &[
            ("password123", true),
            ("short", false),
            ("onlyletters", false),
            ("12345678", false),
        ],
    );

    report.record(
        "confirm password accepts equal values",
        validate_confirm_password("password123", "password123").is_ok(),
    );
    report.record(
        "confirm password rejects different values",
        validate_confirm_password("password123", "password321").is_err(),
    );

    let mut errors = FieldErrors::new(&[Field::Username]);
    errors.show(Field::Username, "Test error");
    let shown = errors.is_visible(Field::Username)
        && errors.message(Field::Username) == Some("Test error");
    errors.clear(Field::Username);
    let cleared = !errors.is_visible(Field::Username) && errors.message(Field::Username).is_none();
    report.record("field error visibility toggles", shown && cleared);

    report
}

/// Runs the checks only on development hosts.
#[must_use]
pub fn run_if_dev(host: &str) -> Option<Report> {
    if is_dev_host(host) {
        Some(run())
    } else {
        info!(host, "self-check skipped outside development hosts");
        None
    }
}
