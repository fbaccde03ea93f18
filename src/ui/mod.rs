//! Presentation state the form controllers write to: inline field errors,
//! the submit control and the notification container. Renderers (the CLI)
//! read from it; nothing here validates input.

mod field_errors;
mod notifications;
mod submit;

pub use field_errors::FieldErrors;
pub use notifications::{Notification, NotificationKind, Notifier};
pub use submit::{SubmitButton, SubmitState};
