//! Configuration for promptstore

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// User override directory for template bodies
    #[serde(default = "default_user_dir")]
    pub user_dir: PathBuf,

    /// Repo default directory for template bodies
    #[serde(default = "default_repo_dir")]
    pub repo_dir: PathBuf,
}

fn default_user_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scaffgen")
        .join("prompts")
}

fn default_repo_dir() -> PathBuf {
    PathBuf::from("prompts")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_dir: default_user_dir(),
            repo_dir: default_repo_dir(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("scaffgen").join("promptstore.yml")),
            Some(PathBuf::from("promptstore.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
