#![forbid(unsafe_code)]

mod args;
mod commands;

use args::{Parsed, parse_args, usage};
use dao_ops_client::Services;
use dao_ops_core::{OffsetResolver, host_offset_at, host_offsets, parse_local_datetime};
use std::sync::Arc;
use time::PrimitiveDateTime;
use tracing_subscriber::EnvFilter;

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// The host zone lookup refuses to run once a second thread exists, so the
/// offset for the command's deadline is resolved up front.
fn deadline_offsets(command: &args::Command) -> OffsetResolver {
    match command.deadline().and_then(parse_local_datetime) {
        Some(local) => {
            let offset = host_offset_at(local);
            Arc::new(move |_: PrimitiveDateTime| offset)
        }
        None => host_offsets(),
    }
}

fn main() {
    init_logging();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let cli = match parse_args(&args, env_var) {
        Ok(Parsed::Help) => {
            print!("{}", usage());
            return;
        }
        Ok(Parsed::Run(cli)) => cli,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    tracing::debug!(base_url = %cli.config.base_url, "starting");
    let services = Services::http(&cli.config);
    let offsets = deadline_offsets(&cli.command);
    let outcome = commands::run(cli.command, &services, offsets);
    if !outcome.stdout.is_empty() {
        println!("{}", outcome.stdout);
    }
    if let Some(failure) = outcome.failure {
        eprintln!("{}", failure.message());
        std::process::exit(failure.exit_code());
    }
}
