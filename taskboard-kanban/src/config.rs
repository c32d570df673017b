//! Board configuration, layered with Figment.
//!
//! Precedence (lowest to highest): built-in defaults, `taskboard.toml`,
//! `taskboard.yaml`, then `TASKBOARD_*` environment variables.

use crate::context::BOARD_DIR_NAME;
use crate::error::Result;
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// Settings for locating and initializing a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanbanConfig {
    /// Name of the board directory, searched upward from the working directory
    pub board_dir: String,
    /// Actor recorded in the activity log
    pub actor: Option<String>,
    /// Default tracing filter for front-ends
    pub log_level: String,
    /// Ordinary columns created by `init` between `Now` and `Completed`
    pub default_columns: Vec<String>,
}

impl Default for KanbanConfig {
    fn default() -> Self {
        Self {
            board_dir: BOARD_DIR_NAME.to_string(),
            actor: None,
            log_level: "info".to_string(),
            default_columns: vec!["To Do".to_string(), "Doing".to_string()],
        }
    }
}

impl KanbanConfig {
    /// Build the layered figment for a project directory
    pub fn figment(project_dir: impl AsRef<Path>) -> Figment {
        let dir = project_dir.as_ref();
        Figment::from(Serialized::defaults(KanbanConfig::default()))
            .merge(Toml::file(dir.join("taskboard.toml")))
            .merge(Yaml::file(dir.join("taskboard.yaml")))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load configuration for a project directory
    pub fn load(project_dir: impl AsRef<Path>) -> Result<Self> {
        let config: KanbanConfig = Self::figment(project_dir).extract()?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Board directory path for a project directory
    pub fn board_path(&self, project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(&self.board_dir)
    }
}
