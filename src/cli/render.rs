//! Terminal rendering of page state.

use crate::routes::Route;
use crate::ui::{FieldErrors, NotificationKind, Notifier};
use std::io::{self, Write};

const fn marker(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "[ok]",
        NotificationKind::Error => "[error]",
        NotificationKind::Info => "[info]",
    }
}

/// Writes one line per visible field error.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn field_errors(out: &mut impl Write, errors: &FieldErrors) -> io::Result<()> {
    for (field, message) in errors.visible() {
        writeln!(out, "  {field}: {message}")?;
    }
    Ok(())
}

/// Writes the notifications that are currently showing.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn notifications(out: &mut impl Write, notifier: &Notifier) -> io::Result<()> {
    for notification in notifier.active() {
        writeln!(out, "{} {}", marker(notification.kind), notification.message)?;
    }
    Ok(())
}

/// # Errors
/// Returns an error if writing to `out` fails.
pub fn pending(out: &mut impl Write, label: &str) -> io::Result<()> {
    writeln!(out, "{label}")?;
    out.flush()
}

/// # Errors
/// Returns an error if writing to `out` fails.
pub fn route(out: &mut impl Write, route: &Route) -> io::Result<()> {
    writeln!(out, "-> {route}")
}
