//! Errand Quote - delivery errand pricing from the command line
//!
//! Prices single and multi-stop deliveries and purchase-on-behalf errands,
//! keeps a local history of issued quotes and exports it to Excel.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use errand_app::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
