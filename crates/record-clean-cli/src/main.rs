//! Record cleaner CLI.

use clap::Parser;
use record_clean_cli::cli::{Cli, log_config_from_cli};
use record_clean_cli::commands::{report_error, run_clean};
use record_clean_cli::logging::init_logging;
use record_clean_cli::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run_clean(&cli) {
        Ok(summary) => {
            print_summary(&summary);
            0
        }
        Err(error) => report_error(&error),
    };
    std::process::exit(exit_code);
}
