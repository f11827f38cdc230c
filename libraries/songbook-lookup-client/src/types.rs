//! Configuration for the lookup client.

use std::time::Duration;

/// Default time allowed for a whole lookup request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default time allowed to establish a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Configuration for connecting to the lookup service.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Base URL of the service (e.g., "https://lookup.example.com")
    pub base_url: String,
    /// Upper bound on a whole request, including reading the body
    pub timeout: Duration,
    /// Upper bound on establishing the connection
    pub connect_timeout: Duration,
}

impl LookupConfig {
    /// Create a config with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the connect timeout.
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}
