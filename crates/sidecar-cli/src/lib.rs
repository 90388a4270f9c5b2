//! CLI library components for the `sidecar` tool.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
