//! Runtime settings for the app shell. Values come from CLI arguments or
//! `AUTHFORMS_*` environment variables; none of them are secret.

use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub store_path: Option<PathBuf>,
    pub host: String,
    pub latency: Duration,
    pub failure_rate: f64,
    pub redirect_delay: Duration,
    pub notification_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Defaults: in-memory preferences, `localhost`, 1.5s latency with a 10%
    /// failure rate, 2s redirect delay, 5s notifications.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store_path: None,
            host: "localhost".to_string(),
            latency: Duration::from_millis(1500),
            failure_rate: 0.1,
            redirect_delay: Duration::from_secs(2),
            notification_ttl: Duration::from_secs(5),
        }
    }

    #[must_use]
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub fn with_latency_ms(mut self, millis: u64) -> Self {
        self.latency = Duration::from_millis(millis);
        self
    }

    #[must_use]
    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate;
        self
    }

    #[must_use]
    pub fn with_redirect_delay_ms(mut self, millis: u64) -> Self {
        self.redirect_delay = Duration::from_millis(millis);
        self
    }

    #[must_use]
    pub fn with_notification_ttl_ms(mut self, millis: u64) -> Self {
        self.notification_ttl = Duration::from_millis(millis);
        self
    }

    /// Clamps the failure rate into `0.0..=1.0`, gives notifications at least
    /// one second and trims the host.
    #[must_use]
    pub fn normalize(self) -> Self {
        let failure_rate = if self.failure_rate.is_nan() {
            0.0
        } else {
            self.failure_rate.clamp(0.0, 1.0)
        };
        let notification_ttl = self.notification_ttl.max(Duration::from_secs(1));
        let host = self.host.trim().to_lowercase();
        Self {
            failure_rate,
            notification_ttl,
            host,
            ..self
        }
    }
}
