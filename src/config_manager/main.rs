use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config_manager::system::{ServerConfig, SessionConfig};
use crate::config_manager::translator::{InferenceConfig, ModelSelection, TranslatorConfig};

/// Main configuration for the application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub translator: TranslatorConfig,

    #[serde(default)]
    pub inference: InferenceConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Load configuration from a YAML or JSON file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        use crate::config_manager::utils::{parse_config, read_config_text};
        let path = path.as_ref();
        let content = read_config_text(path)?;
        let config = parse_config(&content, path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the first config found among the candidate paths, or defaults
    pub fn load_first(candidates: &[PathBuf]) -> anyhow::Result<Self> {
        for path in candidates {
            if !path.exists() {
                debug!("No config at {}", path.display());
                continue;
            }
            let config = Self::load(path)?;
            info!("Loaded configuration from: {}", path.display());
            return Ok(config);
        }

        warn!("No config file found (tried {:?}), using defaults", candidates);
        Ok(Self::default())
    }

    /// Paths searched at startup, most specific first
    pub fn candidate_paths() -> Vec<PathBuf> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));

        let mut paths: Vec<PathBuf> = std::env::var("CONFIG_PATH")
            .ok()
            .map(PathBuf::from)
            .into_iter()
            .collect();
        paths.push(PathBuf::from("conf.yaml"));
        paths.push(PathBuf::from("conf.json"));
        if let Some(dir) = exe_dir {
            paths.push(dir.join("conf.yaml"));
            paths.push(dir.join("conf.json"));
        }
        paths
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.translator.beam_count == 0 {
            anyhow::bail!("translator.beam_count must be at least 1");
        }
        let empty_model = match &self.translator.models {
            ModelSelection::Multilingual { model_id } => model_id.trim().is_empty(),
            ModelSelection::Directional { to_english, to_hindi } => {
                to_english.trim().is_empty() || to_hindi.trim().is_empty()
            }
        };
        if empty_model {
            anyhow::bail!("translator.models must name a model for every direction");
        }
        if self.session.sweep_interval_secs == 0 {
            anyhow::bail!("session.sweep_interval_secs must be greater than 0");
        }
        Ok(())
    }
}
