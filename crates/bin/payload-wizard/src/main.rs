//! payload-wizard - build a cross-chain transfer payload interactively
//!
//! The finished payload is the only thing written to stdout, so the binary
//! can be used as `PAYLOAD=$(payload-wizard)`.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{error, info};

use payload_wizard::shell::tui::TuiShell;
use payload_wizard::shell::Outcome;
use payload_wizard::WizardConfig;

/// Exit status when the user quits without a payload (SIGINT convention)
const EXIT_ABORTED: u8 = 130;

#[derive(Parser, Debug)]
#[command(name = "payload-wizard")]
#[command(about = "interactive builder for orbiter cross-chain payloads", long_about = None)]
struct Args {
    /// Write logs to this file; the terminal is owned by the UI
    #[arg(long, env = "PAYLOAD_WIZARD_LOG")]
    log_file: Option<PathBuf>,

    /// Treat "r" in address fields literally instead of as random test bytes
    #[arg(long)]
    no_test_values: bool,

    /// Print the payload as indented JSON
    #[arg(long)]
    pretty: bool,
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "payload_wizard=info,payload_schema=info".into());

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
        }
    }
    Ok(())
}

fn run(args: &Args) -> Result<Outcome> {
    let config = WizardConfig {
        test_values: !args.no_test_values,
    };
    info!(?config, "starting payload wizard");

    let mut shell = TuiShell::new(config).context("failed to initialize terminal")?;
    let outcome = shell.run();
    // restore before anything is printed
    shell.cleanup()?;
    outcome
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_tracing(args.log_file.as_ref()) {
        eprintln!("error: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(Outcome::Finished(payload)) => {
            info!(len = payload.as_str().len(), "payload printed");
            if !args.pretty {
                println!("{}", payload);
                return ExitCode::SUCCESS;
            }
            match payload.to_pretty() {
                Ok(pretty) => {
                    println!("{}", pretty);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Ok(Outcome::Aborted) => {
            info!("no payload generated");
            ExitCode::from(EXIT_ABORTED)
        }
        Ok(Outcome::Failed(e)) => {
            error!(error = %e, "wizard failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "wizard failed");
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
