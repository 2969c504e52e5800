//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - start: Start the advisor server
//! - compare: Run a comparison offline from a scenario file
//! - config: Configuration display and validation

pub mod compare;
pub mod config;
pub mod start;
