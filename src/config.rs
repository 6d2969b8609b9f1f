use std::time::Duration;

/// Runtime knobs read from the environment.
/// Every value has the deployment default, so a bare process comes up
/// with sane behavior; BIND_ADDR stays a hosting concern.
#[derive(Debug, Clone)]
pub struct Config {
    /// bound on optimistic-concurrency retries in the action pipeline
    pub max_update_attempts: usize,
    /// budget for a single long-poll request
    pub max_poll_time: Duration,
    /// sleep between store reloads while long-polling
    pub poll_interval: Duration,
    /// new-game may clobber an existing record (local testing only)
    pub allow_overwrites: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_update_attempts: 5,
            max_poll_time: Duration::from_secs(25),
            poll_interval: Duration::from_secs(1),
            allow_overwrites: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            max_update_attempts: var("MAX_UPDATE_ATTEMPTS")
                .unwrap_or(default.max_update_attempts),
            max_poll_time: var("MAX_POLL_TIME")
                .map(Duration::from_secs_f64)
                .unwrap_or(default.max_poll_time),
            poll_interval: var("POLL_INTERVAL")
                .map(Duration::from_secs_f64)
                .unwrap_or(default.poll_interval),
            allow_overwrites: var("ALLOW_OVERWRITES").unwrap_or(default.allow_overwrites),
        }
    }
}

fn var<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
