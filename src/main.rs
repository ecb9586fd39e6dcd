use clap::Parser;
use std::process::ExitCode;

use palletctl::cli::{Cli, Commands};
use palletctl::logging::{LogConfig, console_log_path, init_logging};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // The console owns the terminal, so its logs go to a file
    let log_file = matches!(cli.command, Commands::Console).then(console_log_path);
    let log_config = LogConfig::from_verbosity(cli.verbose).with_log_file(log_file);
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{}", e);
    }

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
