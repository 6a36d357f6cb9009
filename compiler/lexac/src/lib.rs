//! Lexa command-line front end.
//!
//! The `lexa` binary is a thin wrapper over this library: [`args`] parses
//! the command line, [`commands::run`] dispatches, and everything printed
//! is produced by [`render`] or [`guide`] as plain strings first.
//!
//! ```text
//! lexa lex main.c --view both --summary
//! lexa lex --sample --diagnostics
//! lexa guide
//! ```

pub mod args;
pub mod commands;
pub mod error;
pub mod guide;
pub mod input;
pub mod logging;
pub mod render;
pub mod sample;

pub use error::CliError;
