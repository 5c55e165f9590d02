use anyhow::Result;
use record_clean::{CleanError, CleanSummary, clean_records};
use tracing::error;

use crate::cli::{Cli, clean_config_from_cli};

pub fn run_clean(cli: &Cli) -> Result<CleanSummary> {
    let config = clean_config_from_cli(cli);
    let summary = clean_records(&config)?;
    Ok(summary)
}

/// Report a failed run on stderr and return the process exit code.
pub fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    if let Some(clean_error) = error.downcast_ref::<CleanError>() {
        error!(kind = ?clean_error.kind(), "clean failed");
        if let Some(hint) = clean_error.suggestion() {
            eprintln!("hint: {hint}");
        }
    }
    1
}
