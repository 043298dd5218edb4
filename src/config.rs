use crate::core::CuratorError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CuratorConfig {
    pub repo_url: String,
    #[serde(default = "default_record_history")]
    pub record_history: bool,
}

fn default_record_history() -> bool {
    true
}

// Default configuration if file is missing
impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            repo_url: "https://github.com/curator-shop/catalog.git".to_string(),
            record_history: default_record_history(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(root: &Path) -> Self {
        Self {
            path: root.join("config.toml"),
        }
    }

    // Load config or create default if missing
    pub async fn load(&self) -> Result<CuratorConfig, CuratorError> {
        if !self.path.exists() {
            let default_config = CuratorConfig::default();
            self.save(&default_config).await?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&self.path).await?;
        toml::from_str(&content).map_err(CuratorError::ParseError)
    }

    pub async fn save(&self, config: &CuratorConfig) -> Result<(), CuratorError> {
        let content = toml::to_string_pretty(config)?;
        fs::write(&self.path, content).await?;
        Ok(())
    }
}
