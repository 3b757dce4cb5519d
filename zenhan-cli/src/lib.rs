//! zenhan CLI library
//!
//! This library provides the command-line interface for zenhan width
//! conversion, Shift_JIS checks and field validation.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
