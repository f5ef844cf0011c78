//! Configuration types and loading

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::engine::context::{DevelopmentPhase, ExperienceLevel};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// User override directory for template bodies
    #[serde(default = "default_user_prompts_dir")]
    pub user_prompts_dir: PathBuf,

    /// Repo default directory for template bodies
    #[serde(default = "default_repo_prompts_dir")]
    pub repo_prompts_dir: PathBuf,

    /// Experience level assumed when not given on the command line
    #[serde(default)]
    pub default_experience: ExperienceLevel,

    /// Development phase assumed when not given on the command line
    #[serde(default)]
    pub default_phase: DevelopmentPhase,
}

fn default_user_prompts_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scaffgen")
        .join("prompts")
}

fn default_repo_prompts_dir() -> PathBuf {
    PathBuf::from("prompts")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_prompts_dir: default_user_prompts_dir(),
            repo_prompts_dir: default_repo_prompts_dir(),
            default_experience: ExperienceLevel::default(),
            default_phase: DevelopmentPhase::default(),
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
            dirs::config_dir().map(|p| p.join("scaffgen").join("config.yml")),
            Some(PathBuf::from("scaffgen.yml")),
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.repo_prompts_dir, PathBuf::from("prompts"));
        assert_eq!(config.default_experience, ExperienceLevel::Intermediate);
        assert_eq!(config.default_phase, DevelopmentPhase::Development);
    }

    #[test]
    fn test_load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        std::fs::write(&path, "repo_prompts_dir: custom-prompts\ndefault_experience: expert\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.repo_prompts_dir, PathBuf::from("custom-prompts"));
        assert_eq!(config.default_experience, ExperienceLevel::Expert);
        // Unspecified keys keep their defaults
        assert_eq!(config.default_phase, DevelopmentPhase::Development);
    }

    #[test]
    fn test_save_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        let config = Config::default();
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.user_prompts_dir, config.user_prompts_dir);
    }
}
