//! Panel CLI binary entrypoint.
//!
//! This is the main entry point for the `btcli` command-line tool.

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bt_api::PanelConfig;
use bt_cli::cli::{Cli, Commands};
use bt_cli::commands::{GoProjectCommand, NodeCommand};
use bt_cli::output::OutputFormat;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run async runtime
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), bt_cli::CliError> {
    let format = OutputFormat::new(cli.format);
    let mut stdout = io::stdout().lock();

    let mut config = PanelConfig::new(&cli.bt_url, &cli.bt_key);
    config.allow_insecure_tls = !cli.verify_tls;
    config.timeout = Duration::from_secs(cli.timeout);

    match cli.command {
        Commands::GoProject { command } => {
            let cmd = GoProjectCommand::new(config);
            cmd.execute(&mut stdout, &format, &command).await?;
        }
        Commands::Node { command } => {
            let cmd = NodeCommand::new(config);
            cmd.execute(&mut stdout, &format, &command).await?;
        }
    }

    Ok(())
}
