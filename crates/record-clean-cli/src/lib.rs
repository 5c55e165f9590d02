//! CLI library components for the record cleaner.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
