pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod reporter;
pub mod scanner;

pub use analyzer::{BodyMatcher, StatusAnalyzer, StatusClass};
pub use config::FuzzConfig;
pub use error::FuzzError;
pub use http::{HttpClient, RequestFailure};
pub use models::{MatchRecord, ResponseOutcome, Wordlist};
pub use reporter::{ConsoleReporter, MatchWriter};
pub use scanner::{FuzzRunner, RunOutcome, RunSummary, StopSignal};
