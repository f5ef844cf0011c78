//! Core template store implementation
//!
//! Resolves store-relative template paths (e.g. `ecommerce/main-prompt.md`)
//! through a layered chain: user override directory, repo directory,
//! embedded defaults.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::embedded;

/// Errors from template store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("template body not found: {0}")]
    NotFound(String),

    #[error("failed to read template {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read access to template bodies, addressed by store-relative path
pub trait TemplateStore: Send + Sync {
    /// Read the full body at the given path
    fn read_body(&self, path: &str) -> Result<String, StoreError>;

    /// Whether a body exists at the given path
    fn exists(&self, path: &str) -> bool;
}

/// File-backed store with user overrides and embedded fallback
///
/// Resolution order for a path:
/// 1. User override: `{user_dir}/{path}`
/// 2. Repo default: `{repo_dir}/{path}`
/// 3. Embedded body compiled into the binary
pub struct FileStore {
    /// User override directory (e.g. `~/.config/scaffgen/prompts/`)
    user_dir: Option<PathBuf>,
    /// Repo default directory (e.g. `./prompts/`)
    repo_dir: Option<PathBuf>,
}

impl FileStore {
    /// Create a store over the given directories
    ///
    /// Directories that do not exist are skipped during resolution.
    pub fn new(user_dir: Option<PathBuf>, repo_dir: Option<PathBuf>) -> Self {
        let user_dir = user_dir.filter(|d| d.exists());
        let repo_dir = repo_dir.filter(|d| d.exists());
        debug!(?user_dir, ?repo_dir, "FileStore::new: resolved directories");
        Self { user_dir, repo_dir }
    }

    /// Create a store that only serves embedded bodies (for testing)
    pub fn embedded_only() -> Self {
        debug!("FileStore::embedded_only: called");
        Self {
            user_dir: None,
            repo_dir: None,
        }
    }

    /// Locate the path on disk, if any layer has it
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        for dir in [self.user_dir.as_ref(), self.repo_dir.as_ref()].into_iter().flatten() {
            let candidate = dir.join(path);
            if candidate.is_file() {
                debug!(?candidate, "FileStore::resolve: found on disk");
                return Some(candidate);
            }
        }
        None
    }
}

impl TemplateStore for FileStore {
    fn read_body(&self, path: &str) -> Result<String, StoreError> {
        debug!(%path, "FileStore::read_body: called");
        if let Some(file) = self.resolve(path) {
            return fs::read_to_string(&file).map_err(|source| StoreError::Io {
                path: file.display().to_string(),
                source,
            });
        }

        if let Some(body) = embedded::get_embedded(path) {
            debug!(%path, "FileStore::read_body: serving embedded body");
            return Ok(body.to_string());
        }

        debug!(%path, "FileStore::read_body: not found in any layer");
        Err(StoreError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_some() || embedded::get_embedded(path).is_some()
    }
}

/// In-memory store for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    bodies: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a body, replacing any existing one at the same path
    pub fn insert(&mut self, path: impl Into<String>, body: impl Into<String>) {
        self.bodies.insert(path.into(), body.into());
    }

    /// Builder-style insert
    pub fn with_body(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(path, body);
        self
    }
}

impl TemplateStore for MemoryStore {
    fn read_body(&self, path: &str) -> Result<String, StoreError> {
        self.bodies
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.bodies.contains_key(path)
    }
}

/// List the store-relative paths visible through a directory layer
///
/// Walks `{dir}/{archetype}/{file}.md` two levels deep, the shape the
/// engine addresses. Used by the `ps` CLI; resolution itself never
/// enumerates.
pub fn list_dir_paths(dir: &Path) -> Vec<String> {
    let mut paths = Vec::new();
    let Ok(entries) = fs::read_dir(dir) else {
        return paths;
    };
    for entry in entries.flatten() {
        let sub = entry.path();
        if !sub.is_dir() {
            continue;
        }
        let Some(archetype) = sub.file_name().and_then(|n| n.to_str()).map(String::from) else {
            continue;
        };
        let Ok(files) = fs::read_dir(&sub) else {
            continue;
        };
        for file in files.flatten() {
            let path = file.path();
            if path.extension().map(|e| e == "md").unwrap_or(false)
                && let Some(name) = path.file_name().and_then(|n| n.to_str())
            {
                paths.push(format!("{}/{}", archetype, name));
            }
        }
    }
    paths.sort();
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_only_serves_catalog() {
        let store = FileStore::embedded_only();
        assert!(store.exists("ecommerce/main-prompt.md"));
        let body = store.read_body("ecommerce/main-prompt.md").unwrap();
        assert!(body.contains("{{project_name}}"));
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let store = FileStore::embedded_only();
        assert!(!store.exists("gaming/main-prompt.md"));
        let err = store.read_body("gaming/main-prompt.md").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert!(err.to_string().contains("gaming/main-prompt.md"));
    }

    #[test]
    fn test_repo_dir_overrides_embedded() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("ecommerce")).unwrap();
        fs::write(temp.path().join("ecommerce/main-prompt.md"), "repo body").unwrap();

        let store = FileStore::new(None, Some(temp.path().to_path_buf()));
        assert_eq!(store.read_body("ecommerce/main-prompt.md").unwrap(), "repo body");
        // Paths the repo dir lacks still fall through to embedded
        assert!(store.read_body("saas/main-prompt.md").unwrap().contains("SaaS"));
    }

    #[test]
    fn test_user_dir_overrides_repo_dir() {
        let user = TempDir::new().unwrap();
        let repo = TempDir::new().unwrap();
        for (dir, body) in [(&user, "user body"), (&repo, "repo body")] {
            fs::create_dir_all(dir.path().join("blog")).unwrap();
            fs::write(dir.path().join("blog/main-prompt.md"), body).unwrap();
        }

        let store = FileStore::new(Some(user.path().to_path_buf()), Some(repo.path().to_path_buf()));
        assert_eq!(store.read_body("blog/main-prompt.md").unwrap(), "user body");
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new().with_body("x/y.md", "hello");
        assert!(store.exists("x/y.md"));
        assert_eq!(store.read_body("x/y.md").unwrap(), "hello");
        assert!(!store.exists("x/z.md"));
    }

    #[test]
    fn test_list_dir_paths() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("saas")).unwrap();
        fs::write(temp.path().join("saas/main-prompt.md"), "body").unwrap();
        fs::write(temp.path().join("saas/notes.txt"), "skip me").unwrap();

        let paths = list_dir_paths(temp.path());
        assert_eq!(paths, vec!["saas/main-prompt.md".to_string()]);
    }
}
