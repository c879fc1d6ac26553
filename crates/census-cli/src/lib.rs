//! Census refinement CLI: argument parsing, logging setup, command entry
//! points, and console summaries.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
