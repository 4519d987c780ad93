//! The binary entry point for the Stellar viewer.

use clap::Parser;
use stellar_config::CliArgs;

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = stellar_app::run(args) {
        tracing::error!("{e}");
        eprintln!("stellar: {e}");
        std::process::exit(1);
    }
}
