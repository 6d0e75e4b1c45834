//! Twosense CLI binary.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use twosense::cli::{args::*, commands::*};

fn main() {
    let args = TwosenseArgs::parse();
    init_tracing(args.verbosity());

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise the level follows `-q` / `-v`.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
