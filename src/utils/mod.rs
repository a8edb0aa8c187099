//! Utility functions for pathcheck

use anyhow::Result;

/// Get the current working directory
pub fn get_current_dir() -> Result<std::path::PathBuf> {
    std::env::current_dir().map_err(Into::into)
}
