use std::process::ExitCode;

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use idorfuzz::cli::{Cli, normalize_args};
use idorfuzz::reporter::print_error;
use idorfuzz::{ConsoleReporter, FuzzConfig, FuzzRunner};

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_env("IDORFUZZ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {}", e))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    if let Err(e) = init_tracing() {
        eprintln!("{:#}", e);
    }

    let config = match FuzzConfig::try_from(cli) {
        Ok(config) => config,
        Err(e) => {
            print_error(&e);
            return ExitCode::from(e.exit_code());
        }
    };

    let runner = FuzzRunner::new(config);
    let mut reporter = ConsoleReporter::stdout();

    match runner.run(&mut reporter).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(config_error = e.is_config_error(), "run aborted: {:?}", e);
            print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}
