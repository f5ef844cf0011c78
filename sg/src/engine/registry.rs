//! Template registry
//!
//! Catalogs one primary template per archetype, backed by the store
//! collaborator. Descriptors are built lazily and cached for the
//! registry's lifetime; the declared-variable set is scanned once per
//! body.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use promptstore::{PRIMARY_BODY, TemplateStore};

use crate::engine::template::scan_variables;

/// The fixed archetype catalog
pub const ARCHETYPES: [&str; 5] = ["ecommerce", "saas", "blog", "portfolio", "dashboard"];

/// Conventional store path of an archetype's primary body
pub fn primary_body_path(archetype: &str) -> String {
    format!("{}/{}", archetype, PRIMARY_BODY)
}

/// Metadata for one archetype's primary template
#[derive(Debug, Clone, Serialize)]
pub struct TemplateDescriptor {
    pub id: String,
    /// Lowercase catalog key
    pub archetype: String,
    /// Store-relative path of the primary body
    pub body_path: String,
    /// Distinct variable names the body references
    pub variables: BTreeSet<String>,
    pub description: String,
}

/// Store-backed descriptor catalog with a per-instance cache
pub struct TemplateRegistry {
    store: Arc<dyn TemplateStore>,
    cache: HashMap<String, TemplateDescriptor>,
}

impl TemplateRegistry {
    /// Create a registry over the given store handle
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        Self {
            store,
            cache: HashMap::new(),
        }
    }

    /// Look up an archetype's descriptor, case-insensitively
    ///
    /// Returns `None` when the store has no body at the conventional
    /// path. Archetypes outside the fixed catalog still resolve when an
    /// override layer provides their body.
    pub fn lookup(&mut self, archetype: &str) -> Option<TemplateDescriptor> {
        let key = archetype.trim().to_lowercase();
        debug!(%archetype, %key, "TemplateRegistry::lookup: called");

        if !self.store.exists(&primary_body_path(&key)) {
            debug!(%key, "TemplateRegistry::lookup: no primary body");
            return None;
        }

        if let Some(descriptor) = self.cache.get(&key) {
            return Some(descriptor.clone());
        }

        let descriptor = self.build(&key);
        self.cache.insert(key, descriptor.clone());
        Some(descriptor)
    }

    /// List one descriptor per catalog archetype
    ///
    /// Always exactly the fixed catalog, independent of how many
    /// variants an archetype has registered.
    pub fn list_all(&mut self) -> Vec<TemplateDescriptor> {
        debug!("TemplateRegistry::list_all: called");
        ARCHETYPES
            .iter()
            .map(|archetype| match self.cache.get(*archetype) {
                Some(descriptor) => descriptor.clone(),
                None => {
                    let descriptor = self.build(archetype);
                    self.cache.insert(archetype.to_string(), descriptor.clone());
                    descriptor
                }
            })
            .collect()
    }

    /// Drop the descriptor cache (test isolation, override reloads)
    pub fn reset(&mut self) {
        debug!(cached = self.cache.len(), "TemplateRegistry::reset: called");
        self.cache.clear();
    }

    fn build(&self, archetype: &str) -> TemplateDescriptor {
        let body_path = primary_body_path(archetype);
        let variables = self
            .store
            .read_body(&body_path)
            .map(|body| scan_variables(&body))
            .unwrap_or_default();
        debug!(%archetype, variable_count = variables.len(), "TemplateRegistry::build: scanned body");

        TemplateDescriptor {
            id: format!("{}-main", archetype),
            archetype: archetype.to_string(),
            body_path,
            variables,
            description: describe(archetype).to_string(),
        }
    }
}

/// Catalog description for an archetype
fn describe(archetype: &str) -> &'static str {
    match archetype {
        "ecommerce" => "Online store with catalog, cart, and checkout guidance",
        "saas" => "Multi-tenant product with auth, billing, and workspace guidance",
        "blog" => "Content-first publication with static generation guidance",
        "portfolio" => "Personal showcase site with case-study guidance",
        "dashboard" => "Data dashboard with widget and live-data guidance",
        _ => "User-provided template",
    }
}
