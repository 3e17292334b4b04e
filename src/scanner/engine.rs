use std::future::Future;
use std::io::Write;

use tokio::time::sleep;
use tracing::debug;

use super::signal::{StopSignal, wait_for_stop};
use crate::analyzer::{BodyMatcher, StatusAnalyzer, StatusClass};
use crate::config::FuzzConfig;
use crate::error::FuzzError;
use crate::http::{HttpClient, RequestFailure};
use crate::models::Wordlist;
use crate::reporter::{ConsoleReporter, MatchWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every wordlist value was processed.
    Completed,
    /// Stop-on-found was set and the first match ended the run.
    StoppedOnMatch,
    /// A signal arrived; the in-flight request was abandoned.
    Interrupted(StopSignal),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub requests: usize,
    pub matches: usize,
    pub skipped: usize,
}

impl Default for RunSummary {
    fn default() -> Self {
        Self {
            outcome: RunOutcome::Completed,
            requests: 0,
            matches: 0,
            skipped: 0,
        }
    }
}

pub struct FuzzRunner {
    config: FuzzConfig,
}

impl FuzzRunner {
    pub fn new(config: FuzzConfig) -> Self {
        Self { config }
    }

    pub async fn run<W: Write>(
        &self,
        reporter: &mut ConsoleReporter<W>,
    ) -> Result<RunSummary, FuzzError> {
        self.run_until(reporter, wait_for_stop()).await
    }

    /// Runs the scan until the wordlist is exhausted, a fatal condition is
    /// hit, or `shutdown` resolves. Configuration is validated before any
    /// request is sent.
    pub async fn run_until<W, F>(
        &self,
        reporter: &mut ConsoleReporter<W>,
        shutdown: F,
    ) -> Result<RunSummary, FuzzError>
    where
        W: Write,
        F: Future<Output = StopSignal>,
    {
        if !self.config.has_placeholder() {
            return Err(FuzzError::MissingPlaceholder);
        }

        let wordlist = Wordlist::load(&self.config.wordlist)?;

        if self.config.search.is_empty() {
            return Err(FuzzError::EmptySearch);
        }

        let client = HttpClient::new(self.config.cookie.clone(), self.config.timeout)?;

        if self.config.verbose {
            reporter.start(&self.config.wordlist, wordlist.len())?;
        }

        let mut writer = self
            .config
            .output
            .as_deref()
            .map(MatchWriter::open)
            .transpose()?;

        let mut summary = RunSummary::default();

        let stopped = tokio::select! {
            result = self.fuzz(&client, &wordlist, reporter, &mut writer, &mut summary) => {
                summary.outcome = result?;
                None
            }
            signal = shutdown => Some(signal),
        };

        match stopped {
            Some(signal) => {
                // The in-flight request is abandoned; dropping the writer closes the file.
                drop(writer);
                summary.outcome = RunOutcome::Interrupted(signal);
                reporter.interrupted(signal)?;
            }
            None => {
                if let Some(w) = writer.take() {
                    w.close().map_err(FuzzError::OutputWrite)?;
                }
                if summary.outcome == RunOutcome::Completed {
                    reporter.complete()?;
                }
            }
        }

        if self.config.verbose {
            reporter.summary(&summary)?;
        }

        debug!(
            outcome = ?summary.outcome,
            requests = summary.requests,
            matches = summary.matches,
            skipped = summary.skipped,
            "run finished"
        );

        Ok(summary)
    }

    async fn fuzz<W: Write>(
        &self,
        client: &HttpClient,
        wordlist: &Wordlist,
        reporter: &mut ConsoleReporter<W>,
        writer: &mut Option<MatchWriter>,
        summary: &mut RunSummary,
    ) -> Result<RunOutcome, FuzzError> {
        let verbose = self.config.verbose;
        let matcher = BodyMatcher::new(&self.config.search);

        for value in wordlist.iter() {
            let url = self.config.target_url(value);

            if verbose {
                reporter.request(&url)?;
            }

            summary.requests += 1;

            match client.get(&url).await {
                Ok(response) => {
                    if verbose {
                        reporter.response(response.status, response.size)?;
                    }

                    match StatusAnalyzer::classify(response.status) {
                        StatusClass::Unauthorized => return Err(FuzzError::Unauthorized),
                        StatusClass::Forbidden => return Err(FuzzError::Forbidden),
                        StatusClass::NotFound => {
                            summary.skipped += 1;
                            if verbose {
                                reporter.not_found(&url)?;
                            }
                        }
                        StatusClass::ServerError => {
                            summary.skipped += 1;
                            reporter.server_error(response.status)?;
                            sleep(self.config.cooldown).await;
                        }
                        StatusClass::Scannable => {
                            for record in matcher.scan(value, &response.body) {
                                summary.matches += 1;
                                reporter.found(&record)?;

                                if let Some(w) = writer.as_mut() {
                                    w.record(&record).map_err(FuzzError::OutputWrite)?;
                                }

                                if self.config.stop_on_found {
                                    reporter.stopping()?;
                                    return Ok(RunOutcome::StoppedOnMatch);
                                }
                            }
                        }
                    }
                }
                Err(RequestFailure::Timeout) => {
                    summary.skipped += 1;
                    reporter.timeout(&url)?;
                }
                Err(RequestFailure::Connection(e)) => {
                    debug!(%url, "connection failed: {}", e);
                    return Err(FuzzError::Connection(e));
                }
                Err(RequestFailure::Other(e)) => return Err(FuzzError::Request(e)),
            }

            sleep(self.config.delay).await;
        }

        Ok(RunOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future;
    use std::time::Duration;

    fn reporter() -> ConsoleReporter<Vec<u8>> {
        ConsoleReporter::new(Vec::new(), false)
    }

    #[tokio::test]
    async fn test_missing_placeholder_fails_before_loading_wordlist() {
        let config = FuzzConfig::new("http://127.0.0.1:1/profile", "c", "/nonexistent", "x");
        let result = FuzzRunner::new(config)
            .run_until(&mut reporter(), future::pending())
            .await;
        assert!(matches!(result, Err(FuzzError::MissingPlaceholder)));
    }

    #[tokio::test]
    async fn test_missing_wordlist() {
        let config = FuzzConfig::new("http://127.0.0.1:1/FUZZ", "c", "/nonexistent", "x");
        let result = FuzzRunner::new(config)
            .run_until(&mut reporter(), future::pending())
            .await;
        assert!(matches!(result, Err(FuzzError::WordlistNotFound(_))));
    }

    #[tokio::test]
    async fn test_empty_search_checked_after_wordlist() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "1\n").unwrap();

        let config = FuzzConfig::new("http://127.0.0.1:1/FUZZ", "c", file.path(), "");
        let result = FuzzRunner::new(config)
            .run_until(&mut reporter(), future::pending())
            .await;
        assert!(matches!(result, Err(FuzzError::EmptySearch)));
    }

    #[tokio::test]
    async fn test_empty_wordlist_completes() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "\n  \n").unwrap();

        let config = FuzzConfig::new("http://127.0.0.1:1/FUZZ", "c", file.path(), "x")
            .with_delay(Duration::ZERO);
        let mut r = reporter();
        let summary = FuzzRunner::new(config)
            .run_until(&mut r, future::pending())
            .await
            .unwrap();

        assert_eq!(summary.outcome, RunOutcome::Completed);
        assert_eq!(summary.requests, 0);
        assert_eq!(
            String::from_utf8(r.into_inner()).unwrap(),
            "[INFO] IDOR fuzzing complete.\n"
        );
    }
}
