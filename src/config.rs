use std::path::PathBuf;
use std::time::Duration;

use crate::error::FuzzError;

pub const PLACEHOLDER: &str = "FUZZ";
pub const DEFAULT_DELAY_SECS: f64 = 0.5;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
pub const SERVER_ERROR_COOLDOWN: Duration = Duration::from_secs(2);

/// Immutable input for a single fuzzing run.
#[derive(Debug, Clone)]
pub struct FuzzConfig {
    pub url: String,
    pub cookie: String,
    pub wordlist: PathBuf,
    pub search: String,
    pub delay: Duration,
    pub stop_on_found: bool,
    pub output: Option<PathBuf>,
    pub verbose: bool,
    pub timeout: Duration,
    pub cooldown: Duration,
}

impl FuzzConfig {
    pub fn new(
        url: impl Into<String>,
        cookie: impl Into<String>,
        wordlist: impl Into<PathBuf>,
        search: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            cookie: cookie.into(),
            wordlist: wordlist.into(),
            search: search.into(),
            delay: Duration::from_secs_f64(DEFAULT_DELAY_SECS),
            stop_on_found: false,
            output: None,
            verbose: false,
            timeout: REQUEST_TIMEOUT,
            cooldown: SERVER_ERROR_COOLDOWN,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_stop_on_found(mut self, stop_on_found: bool) -> Self {
        self.stop_on_found = stop_on_found;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn has_placeholder(&self) -> bool {
        self.url.contains(PLACEHOLDER)
    }

    /// Plain textual substitution; the value is not URL-encoded.
    pub fn target_url(&self, value: &str) -> String {
        self.url.replace(PLACEHOLDER, value)
    }

    pub fn delay_from_secs(secs: f64) -> Result<Duration, FuzzError> {
        Duration::try_from_secs_f64(secs).map_err(|_| FuzzError::InvalidDelay(secs))
    }
}
