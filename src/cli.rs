use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_DELAY_SECS, FuzzConfig};
use crate::error::FuzzError;

#[derive(Parser, Debug)]
#[command(name = "idorfuzz")]
#[command(version, about = "IDOR fuzzer: replaces FUZZ in a URL with wordlist values and greps the responses")]
pub struct Cli {
    /// Target URL with 'FUZZ' placeholder
    #[arg(short, long)]
    pub url: String,

    /// Session cookie for authentication
    #[arg(short, long)]
    pub cookie: String,

    /// Path to wordlist file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub wordlist: PathBuf,

    /// String to search in response
    #[arg(short, long)]
    pub search: String,

    /// Delay between requests in seconds
    #[arg(short, long, default_value_t = DEFAULT_DELAY_SECS, allow_negative_numbers = true)]
    pub delay: f64,

    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,

    /// Output file to save results
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Stop fuzzing when a result is found (also accepted as -ss)
    #[arg(long)]
    pub stop_on_found: bool,
}

/// Rewrites the two-letter `-ss` flag, which clap cannot express as a short
/// option, to `--stop-on-found`. Values after `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg.to_str() == Some("--") {
                passthrough = true;
                arg
            } else if arg.to_str() == Some("-ss") {
                OsString::from("--stop-on-found")
            } else {
                arg
            }
        })
        .collect()
}

impl TryFrom<Cli> for FuzzConfig {
    type Error = FuzzError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let delay = FuzzConfig::delay_from_secs(cli.delay)?;

        let mut config = FuzzConfig::new(cli.url, cli.cookie, cli.wordlist, cli.search)
            .with_delay(delay)
            .with_stop_on_found(cli.stop_on_found)
            .with_verbose(cli.verbose);

        if let Some(output) = cli.output {
            config = config.with_output(output);
        }

        Ok(config)
    }
}
