//! CLI argument parsing for promptstore

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ps")]
#[command(author, version, about = "Layered prompt template store", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List template paths visible through every layer
    List,

    /// Display a template body as resolved through the layer chain
    Cat {
        /// Store-relative path (e.g. ecommerce/main-prompt.md)
        #[arg(required = true)]
        path: String,
    },

    /// Check whether a template body exists
    Check {
        /// Store-relative path (e.g. ecommerce/main-prompt.md)
        #[arg(required = true)]
        path: String,
    },
}
