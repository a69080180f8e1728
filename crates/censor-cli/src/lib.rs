//! CLI surface and batch runner for censor.

pub mod cli;
pub mod run;

pub use cli::Cli;
pub use run::run;
