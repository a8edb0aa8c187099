//! Command implementations for the pathcheck CLI
//!
//! Each command is organized into its own module.

pub mod check;
pub mod version;
