//! Command-line argument parsing
//!
//! Supports:
//! - Dumping the tokens of a template as JSON
//! - Painting a template to the terminal
//! - Re-painting a template whenever it changes on disk
//! - Listing themes

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Jinja template highlighter
#[derive(Parser, Debug)]
#[command(name = "jinja-highlight", version, about = "Highlight Jinja2 templates")]
pub struct CliArgs {
    /// Config file to use instead of ~/.config/jinja-highlight/config.yaml
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Print the categorized token ranges of a file as JSON
    Tokens {
        /// Template to tokenize
        path: PathBuf,
        /// Content kind label, overriding detection from the file name
        #[arg(long, value_name = "LABEL")]
        kind: Option<String>,
    },
    /// Print a file with ANSI colors
    Render {
        path: PathBuf,
        #[arg(long, value_name = "LABEL")]
        kind: Option<String>,
        /// Theme id, overriding the configured theme
        #[arg(long, value_name = "ID")]
        theme: Option<String>,
    },
    /// Re-render a file every time it changes
    Watch {
        path: PathBuf,
        #[arg(long, value_name = "ID")]
        theme: Option<String>,
    },
    /// List available themes
    Themes,
}
