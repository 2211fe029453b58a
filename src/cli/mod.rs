//! Command Line Interface (CLI) layer for HARMONY.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! styled/JSON printing (`output`), and the orchestration logic (`runner`)
//! that wires user-provided values to the library functionality exposed via
//! `harmony::api`.
//!
//! If you are embedding HARMONY into another application, prefer using
//! the high-level `harmony::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod output;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
