//! Subcommand implementations.

pub mod add;
pub mod generate;
pub mod remove;
pub mod update;
pub mod validate;
