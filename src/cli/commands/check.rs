//! Check for the expected data asset
//!
//! Resolves the fixed target path against the current working directory and
//! reports whether anything exists there. Both outcomes are normal: the exit
//! code is 0 whether the file is present or not.

use crate::checker::{self, CheckOutcome};
use crate::cli::Output;
use crate::utils::get_current_dir;
use anyhow::{Context, Result};

/// Execute the check command
pub async fn execute(output: &Output) -> Result<()> {
    let current_dir = get_current_dir().context("failed to read current working directory")?;

    let resolved = checker::resolve_target(&current_dir);
    output.verbose(&format!("Resolved target path: {}", resolved.display()));

    let outcome = checker::check(&resolved);
    tracing::debug!(outcome = ?outcome, path = %resolved.display(), "existence check complete");

    // The result line is the program's contract: one unstyled line on stdout,
    // exit 0 for found and missing alike.
    println!("{}", checker::report(outcome, &resolved));

    if outcome == CheckOutcome::Found {
        output.verbose("Asset is present; nothing to do");
    }

    Ok(())
}
