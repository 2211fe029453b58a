//! HARMONY CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, reduce the
//! provided numbers, and print the styled result. For programmatic use,
//! prefer the library API (`harmony::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
