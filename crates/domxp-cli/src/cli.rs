//! Command line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Look up elements in an HTML document
#[derive(Debug, Parser)]
#[command(name = "domxp", version, about)]
pub struct Cli {
    /// JSON file with factory configuration
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless DOMXP_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// HTML file to read (stdin when omitted)
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// First element with the given id
    Id { id: String },

    /// Elements carrying the given class
    Class { name: String },

    /// Elements with the given tag name
    Tag { name: String },

    /// Nodes matched by an XPath expression
    Query { expression: String },

    /// Value of any XPath expression
    Eval { expression: String },

    /// Whether the element with ID has class NAME
    HasClass { id: String, name: String },
}
