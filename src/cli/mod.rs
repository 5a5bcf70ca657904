//! Command-line interface for todoline.

pub mod args;
pub mod commands;
