//! CLI command definitions and subcommands

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// ScaffGen - project scaffolding with dynamic prompt guidance
#[derive(Parser)]
#[command(
    name = "sg",
    about = "Project scaffolding CLI with dynamic prompt guidance",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate build guidance for a described application
    Generate {
        /// What you want to build, in your own words
        description: String,

        /// Project name (defaults to a name derived from the archetype)
        #[arg(short, long)]
        name: Option<String>,

        /// Override the detected archetype (ecommerce, saas, blog, portfolio, dashboard)
        #[arg(short = 't', long = "project-type")]
        project_type: Option<String>,

        /// Your experience level (beginner, intermediate, expert)
        #[arg(short, long)]
        experience: Option<String>,

        /// Current development phase (planning, development, optimization)
        #[arg(short, long)]
        phase: Option<String>,

        /// Additional feature slugs beyond the detected ones (repeatable)
        #[arg(short = 'f', long = "feature")]
        features: Vec<String>,

        /// Technologies in the stack (repeatable; defaults to the scaffold stack)
        #[arg(long = "tech")]
        tech: Vec<String>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the raw beginning of an archetype's primary template
    Preview {
        /// Archetype to preview
        archetype: String,
    },

    /// List the template catalog and registered variants
    Templates,

    /// Show what would be detected from a description
    Intent {
        /// What you want to build, in your own words
        description: String,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Output format for machine-readable commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
