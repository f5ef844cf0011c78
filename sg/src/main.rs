//! ScaffGen CLI entry point

use std::sync::Arc;

use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use tracing::{debug, info};

use promptstore::FileStore;
use scaffgen::cli::{Cli, Command, OutputFormat};
use scaffgen::config::Config;
use scaffgen::engine::intent;
use scaffgen::{PromptContext, PromptGenerator, SelectionContext};

/// Stack assumed when `--tech` is not given
const DEFAULT_TECH_STACK: [&str; 3] = ["nextjs", "react", "typescript"];

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    let level = if let Some(s) = cli_log_level {
        match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        }
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!("scaffgen starting");

    match cli.command {
        Command::Generate {
            description,
            name,
            project_type,
            experience,
            phase,
            features,
            tech,
            format,
        } => cmd_generate(
            &config,
            &description,
            name,
            project_type,
            experience,
            phase,
            features,
            tech,
            format,
        ),
        Command::Preview { archetype } => cmd_preview(&config, &archetype),
        Command::Templates => cmd_templates(&config),
        Command::Intent { description, format } => cmd_intent(&description, format),
    }
}

fn open_generator(config: &Config) -> PromptGenerator {
    let store = FileStore::new(
        Some(config.user_prompts_dir.clone()),
        Some(config.repo_prompts_dir.clone()),
    );
    PromptGenerator::new(Arc::new(store))
}

#[allow(clippy::too_many_arguments)]
fn cmd_generate(
    config: &Config,
    description: &str,
    name: Option<String>,
    project_type: Option<String>,
    experience: Option<String>,
    phase: Option<String>,
    extra_features: Vec<String>,
    tech: Vec<String>,
    format: OutputFormat,
) -> Result<()> {
    let mut generator = open_generator(config);

    let detected = intent::analyze(description);
    debug!(archetype = %detected.archetype, confidence = detected.confidence, "cmd_generate: intent detected");

    let archetype = project_type
        .map(|t| t.to_lowercase())
        .unwrap_or_else(|| detected.archetype.clone());

    let experience = match experience {
        Some(s) => s.parse().map_err(|e: String| eyre!(e))?,
        None => config.default_experience,
    };
    let phase = match phase {
        Some(s) => s.parse().map_err(|e: String| eyre!(e))?,
        None => config.default_phase,
    };

    let mut features = detected.features.clone();
    for feature in extra_features {
        if !features.contains(&feature) {
            features.push(feature);
        }
    }

    let project_name = name.unwrap_or_else(|| format!("my-{}", archetype));
    let tech_stack: Vec<String> = if tech.is_empty() {
        DEFAULT_TECH_STACK.iter().map(|t| t.to_string()).collect()
    } else {
        tech
    };

    let mut context = PromptContext::new(project_name, &archetype)
        .with_complexity(detected.complexity)
        .with_features(features.clone())
        .with_tech_stack(tech_stack);
    for feature in &features {
        context = context.with_flag(format!("has_{}_feature", feature), true);
    }

    let selection = SelectionContext::new(detected, experience, phase);
    let result = generator.generate(&archetype, &context, &selection);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Text => {
            if result.success {
                println!("{}", result.prompt.unwrap_or_default());
                if let Some(meta) = result.metadata {
                    eprintln!(
                        "{}",
                        format!(
                            "template: {}  confidence: {}  generated: {}",
                            meta.template_id, meta.confidence_score, meta.generated_at
                        )
                        .dimmed()
                    );
                }
            } else {
                eprintln!("{} {}", "✗".red(), result.error.unwrap_or_default());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn cmd_preview(config: &Config, archetype: &str) -> Result<()> {
    let mut generator = open_generator(config);
    match generator.preview(archetype) {
        Some(preview) => {
            println!("{}", preview);
            Ok(())
        }
        None => {
            eprintln!("{} no template found for project type: {}", "✗".red(), archetype);
            std::process::exit(1);
        }
    }
}

fn cmd_templates(config: &Config) -> Result<()> {
    let mut generator = open_generator(config);

    for descriptor in generator.list_templates() {
        println!("{} - {}", descriptor.archetype.bold(), descriptor.description);
        let variables: Vec<String> = descriptor.variables.iter().cloned().collect();
        if !variables.is_empty() {
            println!("  variables: {}", variables.join(", ").dimmed());
        }
        for variant in generator.variants_for(&descriptor.archetype) {
            println!(
                "  {} ({}, {})",
                variant.id.cyan(),
                variant.target_audience,
                variant.focus
            );
        }
    }

    Ok(())
}

fn cmd_intent(description: &str, format: OutputFormat) -> Result<()> {
    let detected = intent::analyze(description);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&detected)?);
        }
        OutputFormat::Text => {
            println!("archetype:  {}", detected.archetype.cyan());
            println!(
                "features:   {}",
                if detected.features.is_empty() {
                    "none".to_string()
                } else {
                    detected.features.join(", ")
                }
            );
            println!("complexity: {}", detected.complexity);
            println!("confidence: {}", detected.confidence);
            println!("reasoning:  {}", detected.reasoning.dimmed());
        }
    }

    Ok(())
}
