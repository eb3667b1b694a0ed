//! Randpass CLI
//!
//! Prints one random password, or copies it to the clipboard.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use randpass::{app, cli::Cli, clipboard::SystemClipboard};
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the password.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(cli.log_level().into()),
        )
        .init();

    debug!("randpass v{}", randpass::VERSION);

    let stdout = io::stdout();
    match app::run(&cli, &mut stdout.lock(), &mut SystemClipboard) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", app::error_report(&e));
            ExitCode::FAILURE
        }
    }
}
