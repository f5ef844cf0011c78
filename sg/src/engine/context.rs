//! Typed context and result model for prompt generation
//!
//! The renderer resolves names against a `PromptContext`: a typed record
//! for the required keys plus an ordered passthrough list for everything
//! else. Unknown keys are never an error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A value a template name can resolve to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    Str(String),
    Bool(bool),
    List(Vec<String>),
}

impl ContextValue {
    /// Stringify for `{{name}}` substitution
    pub fn stringify(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Bool(b) => b.to_string(),
            Self::List(items) => items.join(", "),
        }
    }

    /// Truthiness for `#if` / `#unless` conditions
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::List(items) => !items.is_empty(),
        }
    }
}

impl From<&str> for ContextValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for ContextValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for ContextValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Project complexity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    #[default]
    Moderate,
    Complex,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Moderate => write!(f, "moderate"),
            Self::Complex => write!(f, "complex"),
        }
    }
}

impl FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "moderate" => Ok(Self::Moderate),
            "complex" => Ok(Self::Complex),
            other => Err(format!("unknown complexity level: {}", other)),
        }
    }
}

/// Caller experience level, matched against variant audiences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Expert,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Expert => write!(f, "expert"),
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "expert" => Ok(Self::Expert),
            other => Err(format!("unknown experience level: {}", other)),
        }
    }
}

/// Where the caller is in the project lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentPhase {
    Planning,
    #[default]
    Development,
    Optimization,
}

impl fmt::Display for DevelopmentPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planning => write!(f, "planning"),
            Self::Development => write!(f, "development"),
            Self::Optimization => write!(f, "optimization"),
        }
    }
}

impl FromStr for DevelopmentPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planning" => Ok(Self::Planning),
            "development" => Ok(Self::Development),
            "optimization" => Ok(Self::Optimization),
            other => Err(format!("unknown development phase: {}", other)),
        }
    }
}

/// Guidance focus a template variant concentrates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateFocus {
    Implementation,
    Architecture,
    BestPractices,
    Troubleshooting,
}

impl fmt::Display for TemplateFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Implementation => write!(f, "implementation"),
            Self::Architecture => write!(f, "architecture"),
            Self::BestPractices => write!(f, "best-practices"),
            Self::Troubleshooting => write!(f, "troubleshooting"),
        }
    }
}

/// Named values substituted into a template body during rendering
///
/// Fresh per request; the engine never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptContext {
    pub project_name: String,
    pub project_type: String,
    pub complexity_level: Complexity,
    pub detected_features: Vec<String>,
    pub tech_stack: Vec<String>,
    pub tool_version: String,
    pub current_date: String,
    /// Open extension list: unknown keys pass through to the renderer
    /// untouched, in insertion order. Boolean feature flags live here.
    #[serde(default)]
    pub extra: Vec<(String, ContextValue)>,
}

impl PromptContext {
    /// Create a context with required fields defaulted where possible
    pub fn new(project_name: impl Into<String>, project_type: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            project_type: project_type.into(),
            complexity_level: Complexity::default(),
            detected_features: Vec::new(),
            tech_stack: Vec::new(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            current_date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            extra: Vec::new(),
        }
    }

    /// Builder method to set complexity
    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity_level = complexity;
        self
    }

    /// Builder method to set detected features
    pub fn with_features(mut self, features: Vec<String>) -> Self {
        self.detected_features = features;
        self
    }

    /// Builder method to set the tech stack
    pub fn with_tech_stack(mut self, stack: Vec<String>) -> Self {
        self.tech_stack = stack;
        self
    }

    /// Builder method to pin the current date (for reproducible output)
    pub fn with_current_date(mut self, date: impl Into<String>) -> Self {
        self.current_date = date.into();
        self
    }

    /// Builder method to set a boolean feature flag
    pub fn with_flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.extra.push((name.into(), ContextValue::Bool(value)));
        self
    }

    /// Builder method to set an arbitrary passthrough value
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }

    /// Resolve a name: required keys first, then the extension list
    pub fn get(&self, name: &str) -> Option<ContextValue> {
        match name {
            "project_name" => Some(ContextValue::Str(self.project_name.clone())),
            "project_type" => Some(ContextValue::Str(self.project_type.clone())),
            "complexity_level" => Some(ContextValue::Str(self.complexity_level.to_string())),
            "detected_features" => Some(ContextValue::List(self.detected_features.clone())),
            "tech_stack" => Some(ContextValue::List(self.tech_stack.clone())),
            "tool_version" => Some(ContextValue::Str(self.tool_version.clone())),
            "current_date" => Some(ContextValue::Str(self.current_date.clone())),
            _ => self.extra.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone()),
        }
    }
}

/// What the analyzer believes the user is building
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectIntent {
    /// Detected archetype (lowercase catalog key)
    pub archetype: String,
    /// Detected feature slugs
    pub features: Vec<String>,
    /// Estimated complexity
    pub complexity: Complexity,
    /// 0-100 heuristic confidence in the detection
    pub confidence: u8,
    /// Human-readable summary of the matched signals
    pub reasoning: String,
}

/// Everything the selector needs to pick one variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionContext {
    pub intent: ProjectIntent,
    pub experience: ExperienceLevel,
    pub phase: DevelopmentPhase,
    /// Feedback to apply before selecting, if any
    #[serde(default)]
    pub feedback: Option<Vec<TemplateFeedback>>,
}

impl SelectionContext {
    pub fn new(intent: ProjectIntent, experience: ExperienceLevel, phase: DevelopmentPhase) -> Self {
        Self {
            intent,
            experience,
            phase,
            feedback: None,
        }
    }
}

/// How a rendered prompt worked out for the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackUsage {
    Helpful,
    PartiallyHelpful,
    NotHelpful,
}

/// One item of user feedback on a variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateFeedback {
    pub variant_id: String,
    /// Rating in [1, 5]
    pub rating: u8,
    pub usage: FeedbackUsage,
}

/// Metadata accompanying a successful render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptMetadata {
    /// Canonical lowercase archetype
    pub archetype: String,
    /// Features echoed from the request context
    pub detected_features: Vec<String>,
    /// 0-100 heuristic score
    pub confidence_score: u8,
    /// Id of the winning variant
    pub template_id: String,
    /// RFC 3339 generation timestamp
    pub generated_at: String,
}

/// Outcome of a generate call: a prompt or an error, never both
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PromptMetadata>,
}

impl RenderResult {
    /// Build a successful result
    pub fn success(prompt: String, metadata: PromptMetadata) -> Self {
        Self {
            success: true,
            prompt: Some(prompt),
            error: None,
            metadata: Some(metadata),
        }
    }

    /// Build a failed result from any displayable error
    pub fn failure(error: impl fmt::Display) -> Self {
        Self {
            success: false,
            prompt: None,
            error: Some(error.to_string()),
            metadata: None,
        }
    }
}
