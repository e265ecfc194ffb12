//! setup-cfg-fmt - setup.cfg formatter CLI tool
//!
//! Rewrites each given setup.cfg into a canonical layout and exits with
//! status 1 when any file was (or would be) rewritten.

use clap::Parser;
use setup_cfg_fmt::cli::CliArgs;
use setup_cfg_fmt::orchestrator::Orchestrator;
use setup_cfg_fmt::output::create_formatter;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if let Some(warning) = args.deprecation_warning() {
        eprintln!("{}", warning);
    }

    let output_config = args.output_config().with_color(io::stdout().is_terminal());
    let formatter = create_formatter(output_config);

    let result = Orchestrator::new(args).run();

    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    let changed = result.has_changes();
    if let Some(error) = result.error {
        return Err(error.into());
    }

    if changed {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
