//! Operator tooling for the NexEvent credential subsystem.

pub mod cli;
pub mod commands;

pub use cli::Cli;
pub use cli::Command;
pub use commands::run;
pub use commands::Outcome;
