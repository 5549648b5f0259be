//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::Format;

/// Read and edit nested JSON/TOML documents with dot-notation keys
#[derive(Parser, Debug)]
#[command(name = "dotpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Document format (default: from file extension, then config)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<Format>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a key (whole document without a key)
    Get {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Dotted key, e.g. server.ports.0
        key: Option<String>,
        /// Printed when the key does not resolve (JSON literal or string)
        #[arg(long)]
        default: Option<String>,
    },

    /// Check that all keys resolve (exit code 1 if not)
    Has {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Set a value, creating intermediate tables
    Set {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        key: String,
        /// JSON literal, or a plain string
        value: String,
        /// Store VALUE as a string even if it parses as JSON
        #[arg(short, long)]
        string: bool,
    },

    /// Set a value only if the key is missing or null
    Add {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        key: String,
        /// JSON literal, or a plain string
        value: String,
        /// Store VALUE as a string even if it parses as JSON
        #[arg(short, long)]
        string: bool,
    },

    /// Remove keys
    Forget {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Print the value at a key and remove it
    Pull {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        key: String,
        /// Printed when the key does not resolve (JSON literal or string)
        #[arg(long)]
        default: Option<String>,
    },

    /// List the keys of a node
    Keys {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        key: Option<String>,
    },

    /// Encode a node as a URL query string
    Query {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        key: Option<String>,
    },

    /// Show the document as a tree
    Tree {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Create config template
    Init {
        /// Create global config instead of ./.dotpath.toml
        #[arg(short, long)]
        global: bool,
    },
}
