//! orthodist CLI binary.

use std::process;

use clap::Parser;
use env_logger::Builder;

use orthodist::cli::args::OrthodistArgs;
use orthodist::cli::commands::execute_command;

fn main() {
    let args = OrthodistArgs::parse();

    // RUST_LOG, when set, refines the level chosen on the command line.
    Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = execute_command(args) {
        log::debug!("command failed: {e:?}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
