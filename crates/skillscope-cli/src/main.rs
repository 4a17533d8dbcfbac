use std::io;

use clap::Parser as _;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::command::CommandArgs;

mod command;
mod util;

fn main() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);
    command::run(args)
}

/// Logs go to stderr so that stdout only carries query results.
///
/// `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}
