//! ScaffGen - project scaffolding CLI with dynamic prompt guidance
//!
//! ScaffGen turns a one-line application description into tailored
//! build guidance: it detects the likely project archetype and feature
//! set, picks the best-matching guidance template variant, and renders
//! it through a small template language against a typed context.
//!
//! # Core Concepts
//!
//! - **Archetype**: a recognized project category (ecommerce, saas,
//!   blog, portfolio, dashboard) driving template selection
//! - **Variant**: one of several guidance bodies per archetype,
//!   differing by audience and focus
//! - **Context**: the named values substituted into a body at render
//!   time; unknown keys pass through, missing keys render empty
//! - **Confidence**: a 0-100 heuristic for how much context backs the
//!   chosen archetype
//!
//! # Modules
//!
//! - [`engine`] - the prompt generation pipeline
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod engine;

// Re-export commonly used types
pub use config::Config;
pub use engine::context::{
    Complexity, ContextValue, DevelopmentPhase, ExperienceLevel, FeedbackUsage, PromptContext, PromptMetadata,
    ProjectIntent, RenderResult, SelectionContext, TemplateFeedback, TemplateFocus,
};
pub use engine::error::EngineError;
pub use engine::generator::{PREVIEW_LIMIT, PromptGenerator};
pub use engine::intent::analyze;
pub use engine::registry::{ARCHETYPES, TemplateDescriptor, TemplateRegistry, primary_body_path};
pub use engine::score::confidence_score;
pub use engine::selector::{TemplateVariant, VariantSelector, WEIGHT_MAX, WEIGHT_MIN};
pub use engine::template::{render, scan_variables};
