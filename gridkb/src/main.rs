//! gridkb — shortest path across a grid with blocked cells.
//!
//! Run: cargo run -- --rows 8 --cols 8 --random 0.3 --seed 1 -s 0,0 -g 7,7
//! Set `RUST_LOG=debug` (or `trace`) to watch the search.

use std::process::ExitCode;

use clap::Parser;
use gridkb_lib::{Cli, solve};

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match cli.to_config().and_then(|cfg| solve(&cfg)) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    if cli.json {
        println!("{}", outcome.to_json());
    } else {
        println!("{}", outcome.to_text());
    }
    ExitCode::SUCCESS
}
