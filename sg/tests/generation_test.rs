//! Integration tests for the prompt generation pipeline
//!
//! These run the whole engine over the embedded template set, the way
//! the CLI does when no override directories exist.

use std::sync::Arc;

use promptstore::{FileStore, MemoryStore};
use scaffgen::{
    Complexity, DevelopmentPhase, ExperienceLevel, PromptContext, PromptGenerator, ProjectIntent, SelectionContext,
    TemplateRegistry, confidence_score,
};

fn embedded_generator() -> PromptGenerator {
    PromptGenerator::new(Arc::new(FileStore::embedded_only()))
}

fn selection_for(archetype: &str, experience: ExperienceLevel, phase: DevelopmentPhase) -> SelectionContext {
    SelectionContext::new(
        ProjectIntent {
            archetype: archetype.to_string(),
            features: vec![],
            complexity: Complexity::Moderate,
            confidence: 50,
            reasoning: String::new(),
        },
        experience,
        phase,
    )
}

fn ecommerce_context() -> PromptContext {
    PromptContext::new("storefront", "ecommerce")
        .with_features(vec!["auth".to_string(), "payment".to_string()])
        .with_tech_stack(vec!["nextjs".to_string(), "stripe".to_string()])
        .with_flag("has_auth_feature", true)
        .with_flag("has_payment_feature", true)
}

// =============================================================================
// Registry Tests
// =============================================================================

#[test]
fn test_lookup_case_insensitive_resolves_same_descriptor() {
    let mut registry = TemplateRegistry::new(Arc::new(FileStore::embedded_only()));
    for archetype in ["ecommerce", "saas", "blog", "portfolio", "dashboard"] {
        let lower = registry.lookup(archetype).expect("lowercase lookup failed");
        let upper = registry.lookup(&archetype.to_uppercase()).expect("uppercase lookup failed");
        assert_eq!(lower.id, upper.id);
        assert_eq!(lower.body_path, upper.body_path);
    }
}

#[test]
fn test_list_all_returns_exactly_five() {
    let mut registry = TemplateRegistry::new(Arc::new(FileStore::embedded_only()));
    assert_eq!(registry.list_all().len(), 5);
    // Repeat to confirm the cache does not change the shape
    assert_eq!(registry.list_all().len(), 5);
}

// =============================================================================
// Generation Tests
// =============================================================================

#[test]
fn test_generate_joins_features_without_trailing_separator() {
    let mut generator = embedded_generator();
    let result = generator.generate(
        "ecommerce",
        &ecommerce_context(),
        &selection_for("ecommerce", ExperienceLevel::Intermediate, DevelopmentPhase::Development),
    );

    assert!(result.success, "unexpected failure: {:?}", result.error);
    let prompt = result.prompt.unwrap();
    assert!(prompt.contains("auth, payment"), "missing joined feature list");
    assert!(!prompt.contains("auth, payment,"), "trailing separator leaked");
}

#[test]
fn test_payment_block_follows_the_flag() {
    let marker = "Order state transitions only on webhook events";
    let mut generator = embedded_generator();
    let selection = selection_for("ecommerce", ExperienceLevel::Intermediate, DevelopmentPhase::Development);

    let with_payment = generator.generate("ecommerce", &ecommerce_context(), &selection);
    assert!(with_payment.prompt.unwrap().contains(marker));

    let ctx_without = PromptContext::new("storefront", "ecommerce")
        .with_features(vec!["auth".to_string()])
        .with_flag("has_payment_feature", false);
    let without_payment = generator.generate("ecommerce", &ctx_without, &selection);
    assert!(!without_payment.prompt.unwrap().contains(marker));

    let ctx_absent = PromptContext::new("storefront", "ecommerce").with_features(vec!["auth".to_string()]);
    let flag_absent = generator.generate("ecommerce", &ctx_absent, &selection);
    assert!(!flag_absent.prompt.unwrap().contains(marker));
}

#[test]
fn test_generate_unknown_archetype_fails() {
    let mut generator = embedded_generator();
    let result = generator.generate(
        "unknown-archetype",
        &PromptContext::new("p", "unknown-archetype"),
        &selection_for("unknown-archetype", ExperienceLevel::Intermediate, DevelopmentPhase::Development),
    );

    assert!(!result.success);
    assert!(result.error.unwrap().contains("no template found"));
    assert!(result.prompt.is_none());
    assert!(result.metadata.is_none());
}

#[test]
fn test_every_archetype_renders_without_leftover_directives() {
    let mut generator = embedded_generator();
    for archetype in ["ecommerce", "saas", "blog", "portfolio", "dashboard"] {
        let ctx = PromptContext::new("demo", archetype)
            .with_features(vec!["auth".to_string()])
            .with_tech_stack(vec!["nextjs".to_string(), "react".to_string()])
            .with_flag("has_auth_feature", true);
        let result = generator.generate(
            archetype,
            &ctx,
            &selection_for(archetype, ExperienceLevel::Intermediate, DevelopmentPhase::Development),
        );
        assert!(result.success, "{} failed: {:?}", archetype, result.error);
        let prompt = result.prompt.unwrap();
        assert!(!prompt.contains("{{"), "{} left unrendered directives", archetype);
        assert!(prompt.contains("demo"), "{} missing project name", archetype);
    }
}

#[test]
fn test_generate_is_idempotent_except_timestamp() {
    let mut generator = embedded_generator();
    let ctx = ecommerce_context().with_current_date("2026-08-07".to_string());
    let selection = selection_for("ecommerce", ExperienceLevel::Expert, DevelopmentPhase::Planning);

    let first = generator.generate("ecommerce", &ctx, &selection);
    let second = generator.generate("ecommerce", &ctx, &selection);

    assert_eq!(first.prompt, second.prompt);
    let (m1, m2) = (first.metadata.unwrap(), second.metadata.unwrap());
    assert_eq!(m1.archetype, m2.archetype);
    assert_eq!(m1.template_id, m2.template_id);
    assert_eq!(m1.confidence_score, m2.confidence_score);
}

// =============================================================================
// Selection Tests
// =============================================================================

#[test]
fn test_single_variant_archetype_ignores_caller_inputs() {
    let mut generator = embedded_generator();
    for experience in [ExperienceLevel::Beginner, ExperienceLevel::Intermediate, ExperienceLevel::Expert] {
        for phase in [
            DevelopmentPhase::Planning,
            DevelopmentPhase::Development,
            DevelopmentPhase::Optimization,
        ] {
            let result = generator.generate(
                "blog",
                &PromptContext::new("journal", "blog"),
                &selection_for("blog", experience, phase),
            );
            assert_eq!(result.metadata.unwrap().template_id, "blog-writing-platform");
        }
    }
}

#[test]
fn test_expert_planning_gets_architecture_variant() {
    let mut generator = embedded_generator();
    let result = generator.generate(
        "ecommerce",
        &ecommerce_context(),
        &selection_for("ecommerce", ExperienceLevel::Expert, DevelopmentPhase::Planning),
    );
    assert_eq!(result.metadata.unwrap().template_id, "ecommerce-platform-architecture");
}

// =============================================================================
// Scoring Tests
// =============================================================================

#[test]
fn test_confidence_monotone_in_features_and_bounded() {
    let mut previous = 0;
    for count in 0..=4 {
        let features = (0..count).map(|i| format!("f{}", i)).collect();
        let ctx = PromptContext::new("p", "saas").with_features(features);
        let score = confidence_score(&ctx);
        assert!(score >= previous);
        assert!(score <= 100);
        previous = score;
    }
}

// =============================================================================
// Preview Tests
// =============================================================================

#[test]
fn test_preview_truncates_with_ellipsis() {
    let mut generator = embedded_generator();
    let preview = generator.preview("ecommerce").expect("preview failed");
    assert!(preview.chars().count() <= 203);
    assert!(preview.ends_with("..."));
    // Raw body: directives are not rendered in previews
    assert!(preview.contains("{{"));
}

#[test]
fn test_preview_unknown_archetype_is_none() {
    let mut generator = embedded_generator();
    assert!(generator.preview("unknown-archetype").is_none());
}

// =============================================================================
// Store Layering Tests
// =============================================================================

#[test]
fn test_base_body_serves_generic_guidance() {
    // "base" is not in the catalog, but its body exists, so it resolves
    // like any override-provided archetype and renders the generic
    // guidance through the synthesized default variant.
    let mut generator = embedded_generator();
    let result = generator.generate(
        "base",
        &PromptContext::new("anything", "webapp").with_tech_stack(vec!["nextjs".to_string()]),
        &selection_for("base", ExperienceLevel::Intermediate, DevelopmentPhase::Development),
    );

    assert!(result.success, "unexpected failure: {:?}", result.error);
    assert!(result.prompt.unwrap().contains("anything"));
    assert_eq!(result.metadata.unwrap().template_id, "base-default");
}

#[test]
fn test_generate_over_memory_store_override() {
    let store = MemoryStore::new().with_body("portfolio/main-prompt.md", "custom body for {{project_name}}");
    let mut generator = PromptGenerator::new(Arc::new(store));

    let result = generator.generate(
        "portfolio",
        &PromptContext::new("me", "portfolio"),
        &selection_for("portfolio", ExperienceLevel::Intermediate, DevelopmentPhase::Development),
    );

    assert!(result.success);
    assert_eq!(result.prompt.as_deref(), Some("custom body for me"));
}
