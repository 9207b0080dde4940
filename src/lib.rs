//! singleplexer - Terminal singleplexer
//!
//! A single-pane GUI that behaves like a very small terminal: type a command
//! after the prompt, press Enter, and its stdout, stderr and exit code are
//! appended to the output pane in distinct colours.
//!
//! Commands are split on spaces and launched directly; there is no shell in
//! between, so pipes, redirections and globs are passed through as literal
//! arguments.

pub mod config;
pub mod domain;
pub mod gui;
pub mod runner;

pub use domain::*;
