//! Transient notifications. Each call appends one dismissible entry that is
//! removed after the configured TTL; there is no queue and no deduplication.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::debug;
use ulid::Ulid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: Ulid,
    pub kind: NotificationKind,
    pub message: String,
}

/// Shared notification container. Clones share the same entries.
#[derive(Clone, Debug)]
pub struct Notifier {
    entries: Arc<Mutex<Vec<Notification>>>,
    ttl: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}

impl Notifier {
    pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            ttl,
        }
    }

    /// Appends a notification and schedules its removal when a tokio runtime
    /// is available. Outside a runtime it stays until dismissed.
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) -> Ulid {
        let notification = Notification {
            id: Ulid::new(),
            kind,
            message: message.into(),
        };
        let id = notification.id;
        debug!(%id, ?kind, message = %notification.message, "notification shown");
        lock(&self.entries).push(notification);

        if let Ok(handle) = Handle::try_current() {
            let entries = Arc::clone(&self.entries);
            let ttl = self.ttl;
            handle.spawn(async move {
                tokio::time::sleep(ttl).await;
                if remove(&entries, id) {
                    debug!(%id, "notification expired");
                }
            });
        }

        id
    }

    pub fn success(&self, message: impl Into<String>) -> Ulid {
        self.notify(NotificationKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Ulid {
        self.notify(NotificationKind::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Ulid {
        self.notify(NotificationKind::Info, message)
    }

    /// Removes a notification early; `false` if it already expired.
    pub fn dismiss(&self, id: Ulid) -> bool {
        remove(&self.entries, id)
    }

    #[must_use]
    pub fn active(&self) -> Vec<Notification> {
        lock(&self.entries).clone()
    }

    #[must_use]
    pub fn latest(&self) -> Option<Notification> {
        lock(&self.entries).last().cloned()
    }
}

fn lock(entries: &Mutex<Vec<Notification>>) -> MutexGuard<'_, Vec<Notification>> {
    entries.lock().unwrap_or_else(PoisonError::into_inner)
}

fn remove(entries: &Mutex<Vec<Notification>>, id: Ulid) -> bool {
    let mut entries = lock(entries);
    let before = entries.len();
    entries.retain(|notification| notification.id != id);
    entries.len() != before
}
