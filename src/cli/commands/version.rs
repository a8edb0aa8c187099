//! Version command implementation
//!
//! Displays version information about pathcheck.

use crate::cli::Output;
use anyhow::Result;

/// Execute the version command
pub async fn execute(output: &Output) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");
    let description = env!("CARGO_PKG_DESCRIPTION");

    output.header("pathcheck Version Information");

    output.status_indicator("VERSION", &format!("{} v{}", name, version), true);
    output.blank_line();

    output.category("About");
    output.key_value("Description:", description, false);
    output.blank_line();

    output.category("Build Information");
    output.key_value("Rust edition:", "2024", false);
    output.key_value("Target:", std::env::consts::ARCH, false);
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
        false,
    );

    output.blank_line();
    output.success("Run 'pathcheck --help' for usage information");

    Ok(())
}
