use std::time::{Duration, Instant};

use reqwest::Client;
use reqwest::header::COOKIE;
use tracing::debug;

use crate::error::FuzzError;
use crate::models::ResponseOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    Timeout,
    Connection(String),
    Other(String),
}

impl From<reqwest::Error> for RequestFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RequestFailure::Timeout
        } else if e.is_connect() {
            RequestFailure::Connection(e.to_string())
        } else {
            RequestFailure::Other(e.to_string())
        }
    }
}

pub struct HttpClient {
    client: Client,
    cookie: String,
}

impl HttpClient {
    pub fn new(cookie: String, timeout: Duration) -> Result<Self, FuzzError> {
        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(false)
            .build()?;

        debug!(timeout_ms = timeout.as_millis() as u64, "http client ready");

        Ok(Self { client, cookie })
    }

    pub async fn get(&self, url: &str) -> Result<ResponseOutcome, RequestFailure> {
        let start = Instant::now();

        let response = self
            .client
            .get(url)
            .header(COOKIE, &self.cookie)
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let outcome = ResponseOutcome::new(status, &bytes);

        debug!(
            url,
            status,
            size = outcome.size,
            duration_ms = start.elapsed().as_millis() as u64,
            "response received"
        );

        Ok(outcome)
    }
}
