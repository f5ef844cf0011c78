//! Prompt generation facade
//!
//! Orchestrates registry lookup, variant selection, the single store
//! read, rendering, and scoring into one `RenderResult`. Every failure
//! mode is converted to a failed result here; callers never see an
//! `EngineError` escape.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use promptstore::TemplateStore;

use crate::engine::context::{PromptContext, PromptMetadata, RenderResult, SelectionContext, TemplateFeedback};
use crate::engine::error::EngineError;
use crate::engine::registry::{TemplateDescriptor, TemplateRegistry};
use crate::engine::score::confidence_score;
use crate::engine::selector::{TemplateVariant, VariantSelector};
use crate::engine::template;

/// Maximum characters of raw body returned by `preview`
pub const PREVIEW_LIMIT: usize = 200;

const PREVIEW_ELLIPSIS: &str = "...";

/// The engine's public face: one owned instance per caller
///
/// Owns the descriptor cache and the weight table, so fresh instances
/// give full isolation and there is no ambient state to reset between
/// tests.
pub struct PromptGenerator {
    store: Arc<dyn TemplateStore>,
    registry: TemplateRegistry,
    selector: VariantSelector,
}

impl PromptGenerator {
    /// Create a generator over the given store handle
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        Self {
            registry: TemplateRegistry::new(store.clone()),
            selector: VariantSelector::with_builtin_catalog(),
            store,
        }
    }

    /// Generate a prompt for an archetype
    ///
    /// Unknown archetype fails immediately; the renderer is never
    /// invoked. Otherwise: select the best variant, read its body once,
    /// render against the context, and attach metadata.
    pub fn generate(
        &mut self,
        archetype: &str,
        context: &PromptContext,
        selection: &SelectionContext,
    ) -> RenderResult {
        debug!(%archetype, "PromptGenerator::generate: called");

        let Some(descriptor) = self.registry.lookup(archetype) else {
            debug!(%archetype, "PromptGenerator::generate: no descriptor");
            return RenderResult::failure(EngineError::NotFound(archetype.to_string()));
        };

        if let Some(feedback) = &selection.feedback {
            self.selector.update_weights(feedback);
        }

        let variant = self.selector.select_optimal(&descriptor.archetype, selection);

        match self.render_body(&variant.body_path, context) {
            Ok(prompt) => {
                let metadata = PromptMetadata {
                    archetype: descriptor.archetype.clone(),
                    detected_features: context.detected_features.clone(),
                    confidence_score: confidence_score(context),
                    template_id: variant.id.clone(),
                    generated_at: Utc::now().to_rfc3339(),
                };
                info!(
                    archetype = %descriptor.archetype,
                    template_id = %variant.id,
                    confidence = metadata.confidence_score,
                    "PromptGenerator::generate: rendered prompt"
                );
                RenderResult::success(prompt, metadata)
            }
            Err(err) => {
                debug!(%err, "PromptGenerator::generate: render failed");
                RenderResult::failure(err)
            }
        }
    }

    fn render_body(&self, path: &str, context: &PromptContext) -> Result<String, EngineError> {
        let body = self.store.read_body(path)?;
        template::render(&body, context)
    }

    /// Raw unrendered primary body, truncated for display
    ///
    /// At most 200 characters of body plus a literal `...` when
    /// truncated; `None` when the archetype is unknown or unreadable.
    pub fn preview(&mut self, archetype: &str) -> Option<String> {
        debug!(%archetype, "PromptGenerator::preview: called");
        let descriptor = self.registry.lookup(archetype)?;
        let body = self.store.read_body(&descriptor.body_path).ok()?;
        Some(truncate_preview(&body))
    }

    /// One descriptor per catalog archetype
    pub fn list_templates(&mut self) -> Vec<TemplateDescriptor> {
        self.registry.list_all()
    }

    /// Registered variants for an archetype, in registration order
    pub fn variants_for(&self, archetype: &str) -> &[TemplateVariant] {
        self.selector.variants_for(archetype)
    }

    /// Register an additional variant
    pub fn register_variant(&mut self, archetype: impl Into<String>, variant: TemplateVariant) {
        self.selector.register(archetype, variant);
    }

    /// Apply feedback to the weight table
    pub fn update_weights(&mut self, feedback: &[TemplateFeedback]) {
        self.selector.update_weights(feedback);
    }

    /// Drop cached descriptors and restore default weights
    pub fn reset(&mut self) {
        self.registry.reset();
        self.selector.reset();
    }
}

fn truncate_preview(body: &str) -> String {
    if body.chars().count() <= PREVIEW_LIMIT {
        body.to_string()
    } else {
        let mut preview: String = body.chars().take(PREVIEW_LIMIT).collect();
        preview.push_str(PREVIEW_ELLIPSIS);
        preview
    }
}
