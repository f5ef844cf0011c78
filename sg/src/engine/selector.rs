//! Template variant selection
//!
//! Single-decision resolution: given an archetype and a selection
//! context, pick exactly one variant. Feedback adjusts per-variant
//! weights, which persist for the selector's lifetime but do not enter
//! the selection ordering.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::engine::context::{
    DevelopmentPhase, ExperienceLevel, FeedbackUsage, SelectionContext, TemplateFeedback, TemplateFocus,
};
use crate::engine::registry::primary_body_path;

/// Weight bounds for feedback adjustment
pub const WEIGHT_MIN: f64 = 0.1;
pub const WEIGHT_MAX: f64 = 2.0;

const WEIGHT_STEP: f64 = 0.1;
const DEFAULT_WEIGHT: f64 = 1.0;

/// One alternative guidance body for an archetype
#[derive(Debug, Clone, Serialize)]
pub struct TemplateVariant {
    pub id: String,
    pub name: String,
    pub description: String,
    pub target_audience: ExperienceLevel,
    pub focus: TemplateFocus,
    /// Store-relative path of the variant body
    pub body_path: String,
    /// Feedback-adjusted weight in [0.1, 2.0]
    pub weight: f64,
}

impl TemplateVariant {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        target_audience: ExperienceLevel,
        focus: TemplateFocus,
        body_path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            target_audience,
            focus,
            body_path: body_path.into(),
            weight: DEFAULT_WEIGHT,
        }
    }

    /// Synthesized default for archetypes with no registered variants
    fn default_for(archetype: &str) -> Self {
        Self::new(
            format!("{}-default", archetype),
            format!("{} default guidance", archetype),
            "Default guidance over the archetype's primary body",
            ExperienceLevel::Intermediate,
            TemplateFocus::Implementation,
            primary_body_path(archetype),
        )
    }
}

/// Focus preference order for a development phase
fn focus_priority(phase: DevelopmentPhase) -> [TemplateFocus; 4] {
    match phase {
        DevelopmentPhase::Planning => [
            TemplateFocus::Architecture,
            TemplateFocus::Implementation,
            TemplateFocus::BestPractices,
            TemplateFocus::Troubleshooting,
        ],
        DevelopmentPhase::Development => [
            TemplateFocus::Implementation,
            TemplateFocus::BestPractices,
            TemplateFocus::Troubleshooting,
            TemplateFocus::Architecture,
        ],
        DevelopmentPhase::Optimization => [
            TemplateFocus::BestPractices,
            TemplateFocus::Troubleshooting,
            TemplateFocus::Architecture,
            TemplateFocus::Implementation,
        ],
    }
}

/// Owns the variant table and its feedback-adjusted weights
pub struct VariantSelector {
    /// Variants per lowercase archetype, in registration order
    variants: HashMap<String, Vec<TemplateVariant>>,
}

impl VariantSelector {
    /// Create an empty selector
    pub fn new() -> Self {
        Self {
            variants: HashMap::new(),
        }
    }

    /// Create a selector seeded with the built-in variant catalog
    pub fn with_builtin_catalog() -> Self {
        let mut selector = Self::new();
        for (archetype, variant) in builtin_catalog() {
            selector.register(archetype, variant);
        }
        selector
    }

    /// Register a variant under an archetype
    pub fn register(&mut self, archetype: impl Into<String>, variant: TemplateVariant) {
        let key = archetype.into().to_lowercase();
        debug!(%key, variant_id = %variant.id, "VariantSelector::register: called");
        self.variants.entry(key).or_default().push(variant);
    }

    /// Registered variants for an archetype, in registration order
    pub fn variants_for(&self, archetype: &str) -> &[TemplateVariant] {
        self.variants
            .get(&archetype.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Pick the best variant for the caller
    ///
    /// Zero candidates synthesize a default over the primary body; a
    /// single candidate wins unconditionally. Otherwise: audience
    /// filter, intermediate retry for beginner/expert, full-set
    /// fallback, then the phase-keyed focus priority walk, then the
    /// filtered set's first element. Deterministic throughout.
    pub fn select_optimal(&self, archetype: &str, selection: &SelectionContext) -> TemplateVariant {
        let key = archetype.to_lowercase();
        let candidates = self.variants_for(&key);
        debug!(
            %key,
            candidate_count = candidates.len(),
            experience = %selection.experience,
            phase = %selection.phase,
            "VariantSelector::select_optimal: called"
        );

        match candidates {
            [] => TemplateVariant::default_for(&key),
            [only] => only.clone(),
            _ => {
                let mut filtered: Vec<&TemplateVariant> = candidates
                    .iter()
                    .filter(|v| v.target_audience == selection.experience)
                    .collect();

                if filtered.is_empty() && selection.experience != ExperienceLevel::Intermediate {
                    debug!("VariantSelector::select_optimal: retrying audience filter at intermediate");
                    filtered = candidates
                        .iter()
                        .filter(|v| v.target_audience == ExperienceLevel::Intermediate)
                        .collect();
                }
                if filtered.is_empty() {
                    debug!("VariantSelector::select_optimal: falling back to the full candidate set");
                    filtered = candidates.iter().collect();
                }

                for focus in focus_priority(selection.phase) {
                    if let Some(variant) = filtered.iter().find(|v| v.focus == focus) {
                        debug!(variant_id = %variant.id, ?focus, "VariantSelector::select_optimal: focus match");
                        return (*variant).clone();
                    }
                }

                filtered[0].clone()
            }
        }
    }

    /// Apply feedback to variant weights
    ///
    /// Every variant with a matching id, across archetypes, moves by
    /// ±0.1 within [0.1, 2.0]. Weight does not affect selection order;
    /// it persists only for this selector's lifetime.
    pub fn update_weights(&mut self, feedback: &[TemplateFeedback]) {
        for item in feedback {
            let delta = if item.usage == FeedbackUsage::Helpful && item.rating >= 4 {
                WEIGHT_STEP
            } else if item.usage == FeedbackUsage::NotHelpful || item.rating <= 2 {
                -WEIGHT_STEP
            } else {
                continue;
            };

            for variants in self.variants.values_mut() {
                for variant in variants.iter_mut().filter(|v| v.id == item.variant_id) {
                    let updated = (variant.weight + delta).clamp(WEIGHT_MIN, WEIGHT_MAX);
                    debug!(variant_id = %variant.id, from = variant.weight, to = updated, "update_weights: adjusted");
                    variant.weight = updated;
                }
            }
        }
    }

    /// Restore the built-in catalog and default weights
    pub fn reset(&mut self) {
        debug!("VariantSelector::reset: called");
        *self = Self::with_builtin_catalog();
    }
}

impl Default for VariantSelector {
    fn default() -> Self {
        Self::with_builtin_catalog()
    }
}

/// The built-in variant catalog
fn builtin_catalog() -> Vec<(&'static str, TemplateVariant)> {
    vec![
        (
            "ecommerce",
            TemplateVariant::new(
                "ecommerce-starter-walkthrough",
                "First e-commerce build",
                "Step-by-step storefront walkthrough for newcomers",
                ExperienceLevel::Beginner,
                TemplateFocus::Implementation,
                "ecommerce/starter-walkthrough.md",
            ),
        ),
        (
            "ecommerce",
            TemplateVariant::new(
                "ecommerce-storefront-build",
                "Storefront implementation guide",
                "Build-order guidance for a working storefront",
                ExperienceLevel::Intermediate,
                TemplateFocus::Implementation,
                "ecommerce/storefront-build.md",
            ),
        ),
        (
            "ecommerce",
            TemplateVariant::new(
                "ecommerce-platform-architecture",
                "Commerce platform architecture",
                "Boundary and data-flow decisions for commerce at scale",
                ExperienceLevel::Expert,
                TemplateFocus::Architecture,
                "ecommerce/platform-architecture.md",
            ),
        ),
        (
            "saas",
            TemplateVariant::new(
                "saas-product-build",
                "SaaS implementation guide",
                "Walking-skeleton build order for a multi-tenant product",
                ExperienceLevel::Intermediate,
                TemplateFocus::Implementation,
                "saas/product-build.md",
            ),
        ),
        (
            "saas",
            TemplateVariant::new(
                "saas-tenancy-architecture",
                "Multi-tenant architecture",
                "Tenancy model and seam design for SaaS platforms",
                ExperienceLevel::Intermediate,
                TemplateFocus::Architecture,
                "saas/tenancy-architecture.md",
            ),
        ),
        (
            "blog",
            TemplateVariant::new(
                "blog-writing-platform",
                "Writing platform guide",
                "Content-model-first build order for a blog",
                ExperienceLevel::Intermediate,
                TemplateFocus::Implementation,
                "blog/writing-platform.md",
            ),
        ),
    ]
}
