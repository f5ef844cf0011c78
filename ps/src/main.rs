use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use promptstore::cli::{Cli, Command};
use promptstore::config::Config;
use promptstore::{FileStore, TemplateStore, embedded, list_dir_paths};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("promptstore starting");

    let store = FileStore::new(Some(config.user_dir.clone()), Some(config.repo_dir.clone()));

    match cli.command {
        Command::List => {
            for (layer, dir) in [("user", &config.user_dir), ("repo", &config.repo_dir)] {
                let paths = list_dir_paths(dir);
                if !paths.is_empty() {
                    println!("{} ({})", layer.bold(), dir.display().to_string().dimmed());
                    for path in paths {
                        println!("  {}", path.cyan());
                    }
                }
            }
            println!("{}", "embedded".bold());
            for path in embedded::embedded_paths() {
                println!("  {}", path.cyan());
            }
        }
        Command::Cat { path } => {
            let body = store.read_body(&path)?;
            println!("{}", body);
        }
        Command::Check { path } => {
            if store.exists(&path) {
                println!("{} {}", "✓".green(), path);
            } else {
                println!("{} {}", "✗".red(), path);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
