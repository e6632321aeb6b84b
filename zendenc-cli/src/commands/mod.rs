//! Subcommand implementations.

pub mod encode;
