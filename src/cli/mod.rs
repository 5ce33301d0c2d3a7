//! Command Line Interface for the Verbena classifier.

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
