//! Project intent analysis
//!
//! Turns a free-text application description into a `ProjectIntent`:
//! the likely archetype, the feature set to scaffold, an estimated
//! complexity, and a confidence score. Purely lexical; the tables below
//! are the whole model.

use tracing::debug;

use crate::engine::context::{Complexity, ProjectIntent};

/// Archetype detection keywords, in catalog order (ties keep the first)
const ARCHETYPE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "ecommerce",
        &[
            "shop",
            "store",
            "storefront",
            "ecommerce",
            "e-commerce",
            "cart",
            "checkout",
            "sell",
            "marketplace",
            "catalog",
        ],
    ),
    (
        "saas",
        &["saas", "subscription", "tenant", "b2b", "workspace", "team", "crm", "product"],
    ),
    (
        "blog",
        &["blog", "article", "newsletter", "publication", "writing", "posts"],
    ),
    (
        "portfolio",
        &["portfolio", "showcase", "resume", "freelance", "case study", "personal site"],
    ),
    (
        "dashboard",
        &["dashboard", "analytics", "admin panel", "metrics", "monitoring", "charts", "reporting"],
    ),
];

/// Feature detection keywords, keyed by feature slug
const FEATURE_KEYWORDS: &[(&str, &[&str])] = &[
    ("auth", &["auth", "login", "sign in", "sign up", "account", "members"]),
    ("payment", &["payment", "stripe", "billing", "checkout", "subscription"]),
    ("search", &["search", "filtering", "faceted"]),
    ("analytics", &["analytics", "metrics", "tracking", "stats"]),
    ("realtime", &["realtime", "real-time", "live updates", "websocket", "chat"]),
    ("cms", &["cms", "content management", "markdown", "editor"]),
];

/// Fallback archetype when the description carries no recognizable signal
const FALLBACK_ARCHETYPE: &str = "saas";

/// Analyze a description into a project intent
pub fn analyze(description: &str) -> ProjectIntent {
    let text = description.to_lowercase();
    debug!(description_len = description.len(), "analyze: called");

    let mut archetype = FALLBACK_ARCHETYPE;
    let mut archetype_hits = 0usize;
    for (candidate, keywords) in ARCHETYPE_KEYWORDS {
        let hits = keywords.iter().filter(|keyword| text.contains(*keyword)).count();
        if hits > archetype_hits {
            archetype = candidate;
            archetype_hits = hits;
        }
    }

    let features: Vec<String> = FEATURE_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| text.contains(*keyword)))
        .map(|(slug, _)| slug.to_string())
        .collect();

    let complexity = match features.len() {
        0..=1 => Complexity::Simple,
        2..=3 => Complexity::Moderate,
        _ => Complexity::Complex,
    };

    let confidence = score_signals(archetype_hits, features.len());

    let reasoning = if archetype_hits == 0 {
        format!(
            "no archetype signal in description; defaulting to {} ({} feature(s) detected)",
            archetype,
            features.len()
        )
    } else {
        format!(
            "{} keyword(s) matched {}; detected features: {}",
            archetype_hits,
            archetype,
            if features.is_empty() {
                "none".to_string()
            } else {
                features.join(", ")
            }
        )
    };
    debug!(%archetype, archetype_hits, feature_count = features.len(), confidence, "analyze: resolved");

    ProjectIntent {
        archetype: archetype.to_string(),
        features,
        complexity,
        confidence,
        reasoning,
    }
}

/// Confidence from signal counts, monotone in both inputs
fn score_signals(archetype_hits: usize, feature_count: usize) -> u8 {
    let base: u32 = 25;
    let archetype_bonus = (archetype_hits as u32 * 15).min(45);
    let feature_bonus = (feature_count as u32 * 8).min(24);
    (base + archetype_bonus + feature_bonus).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_store_description() {
        let intent = analyze("An online store selling handmade goods with Stripe checkout");
        assert_eq!(intent.archetype, "ecommerce");
        assert!(intent.features.contains(&"payment".to_string()));
    }

    #[test]
    fn test_dashboard_description() {
        let intent = analyze("Internal admin panel with charts and live updates");
        assert_eq!(intent.archetype, "dashboard");
        assert!(intent.features.contains(&"realtime".to_string()));
    }

    #[test]
    fn test_signal_free_description_falls_back() {
        let intent = analyze("something nice");
        assert_eq!(intent.archetype, FALLBACK_ARCHETYPE);
        assert!(intent.reasoning.contains("no archetype signal"));
    }

    #[test]
    fn test_confidence_monotone_in_signals() {
        assert!(score_signals(0, 0) < score_signals(1, 0));
        assert!(score_signals(1, 0) < score_signals(1, 2));
        assert!(score_signals(2, 2) <= score_signals(3, 4));
        assert!(score_signals(100, 100) <= 100);
    }

    #[test]
    fn test_complexity_tracks_feature_count() {
        let simple = analyze("a blog");
        assert_eq!(simple.complexity, Complexity::Simple);

        let moderate = analyze("a blog with search and member login");
        assert_eq!(moderate.complexity, Complexity::Moderate);

        let complex = analyze("a store with checkout, login, search, analytics and live chat");
        assert_eq!(complex.complexity, Complexity::Complex);
    }
}
