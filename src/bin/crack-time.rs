//! CLI front-end for `crack_time`: `crack-time estimate <password>` or
//! `crack-time batch <password>...`, human-readable or `--json`.

use clap::Parser;
use crack_time::cli::{self, Cli};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = cli::run(cli) {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
