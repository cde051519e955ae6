use std::time::Duration;

/// Timeouts applied around the database and the HTTP server lifecycle
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Waiting for a pooled connection
    pub db_connect: Duration,

    /// Single query, also used as the SQLite busy timeout
    pub db_query: Duration,

    /// In-flight requests get this long to finish after a shutdown signal
    pub graceful_shutdown: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        GLOBAL_TIMEOUT_CONFIG.clone()
    }
}

impl TimeoutConfig {
    /// Get the global timeout configuration
    pub fn global() -> &'static Self {
        &GLOBAL_TIMEOUT_CONFIG
    }
}

static GLOBAL_TIMEOUT_CONFIG: TimeoutConfig = TimeoutConfig {
    db_connect: Duration::from_secs(5),
    db_query: Duration::from_secs(10),
    graceful_shutdown: Duration::from_secs(10),
};
