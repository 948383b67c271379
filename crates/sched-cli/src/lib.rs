//! CLI library components for the schedule ingester.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
