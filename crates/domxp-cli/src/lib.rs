//! domxp command line tool
//!
//! Reads an HTML document from a file or stdin and runs one lookup on it.

pub mod cli;
pub mod config;
pub mod logging;
mod run;

pub use cli::{Cli, Command};
pub use run::{Outcome, run};
