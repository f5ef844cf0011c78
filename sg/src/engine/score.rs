//! Confidence scoring heuristic
//!
//! A 0-100 UX signal for how much context backs the chosen archetype
//! and feature set. Richer context scores higher; the exact
//! coefficients matter less than the bounds and monotonicity.

use tracing::debug;

use crate::engine::context::{Complexity, PromptContext};

/// Technologies the scorer recognizes as specific stack signal
const RECOGNIZED_TECH: &[&str] = &[
    "nextjs",
    "next.js",
    "react",
    "typescript",
    "javascript",
    "node",
    "tailwind",
    "postgres",
    "postgresql",
    "prisma",
    "stripe",
    "graphql",
    "redis",
    "docker",
    "vercel",
];

const FEATURE_STEP: u32 = 8;
const FEATURE_CAP: u32 = 32;
const MULTI_TECH_BONUS: u32 = 10;

/// Score the context's richness on a 0-100 scale
///
/// Base by complexity (more complex projects carry more collected
/// signal), plus a saturating per-feature increment, plus a bonus when
/// the stack names more than one recognized technology.
pub fn confidence_score(ctx: &PromptContext) -> u8 {
    let base: u32 = match ctx.complexity_level {
        Complexity::Simple => 40,
        Complexity::Moderate => 50,
        Complexity::Complex => 60,
    };

    let feature_bonus = (ctx.detected_features.len() as u32 * FEATURE_STEP).min(FEATURE_CAP);

    let recognized = ctx
        .tech_stack
        .iter()
        .filter(|tech| RECOGNIZED_TECH.contains(&tech.to_lowercase().as_str()))
        .count();
    let tech_bonus = if recognized > 1 { MULTI_TECH_BONUS } else { 0 };

    let score = (base + feature_bonus + tech_bonus).min(100);
    debug!(base, feature_bonus, tech_bonus, score, "confidence_score: computed");
    score as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_with_features(count: usize) -> PromptContext {
        let features = (0..count).map(|i| format!("feature-{}", i)).collect();
        PromptContext::new("p", "saas").with_features(features)
    }

    #[test]
    fn test_monotonic_in_feature_count() {
        let mut previous = 0;
        for count in 0..=4 {
            let score = confidence_score(&ctx_with_features(count));
            assert!(score >= previous, "score dropped at {} features", count);
            assert!(score <= 100);
            previous = score;
        }
    }

    #[test]
    fn test_base_ordering_by_complexity() {
        let simple = confidence_score(&PromptContext::new("p", "saas").with_complexity(Complexity::Simple));
        let moderate = confidence_score(&PromptContext::new("p", "saas").with_complexity(Complexity::Moderate));
        let complex = confidence_score(&PromptContext::new("p", "saas").with_complexity(Complexity::Complex));
        assert!(simple < moderate);
        assert!(moderate < complex);
    }

    #[test]
    fn test_multi_tech_bonus_requires_recognized_stack() {
        let none = confidence_score(&PromptContext::new("p", "saas"));
        let one = confidence_score(
            &PromptContext::new("p", "saas").with_tech_stack(vec!["react".to_string()]),
        );
        let two = confidence_score(
            &PromptContext::new("p", "saas").with_tech_stack(vec!["react".to_string(), "typescript".to_string()]),
        );
        let unrecognized = confidence_score(
            &PromptContext::new("p", "saas").with_tech_stack(vec!["cobol".to_string(), "fortran".to_string()]),
        );
        assert_eq!(none, one);
        assert_eq!(two, one + 10);
        assert_eq!(unrecognized, none);
    }

    #[test]
    fn test_never_exceeds_100() {
        let ctx = ctx_with_features(10)
            .with_complexity(Complexity::Complex)
            .with_tech_stack(vec!["react".to_string(), "stripe".to_string(), "postgres".to_string()]);
        assert_eq!(confidence_score(&ctx), 100);
    }
}
