use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub edit: EditConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// SQLite database file; `~` is expanded
    #[serde(default = "default_store_path")]
    pub path: PathBuf,

    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("~/.local/share/imageshelf/library.sqlite")
}

fn default_pool_size() -> u32 {
    4
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            pool_size: default_pool_size(),
        }
    }
}

impl StoreConfig {
    /// The database path with a leading `~` expanded.
    pub fn resolved_path(&self) -> PathBuf {
        let raw = self.path.to_string_lossy();
        PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EditConfig {
    /// Scheme and host of the generation service (or of a local proxy in front of it)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub environment: Environment,
}

fn default_base_url() -> String {
    "https://dashscope.aliyuncs.com".to_string()
}

fn default_model() -> String {
    "qwen-image-edit".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            environment: Environment::default(),
        }
    }
}

/// Deployment context the library runs in.
///
/// Remote edits are only allowed in development: deployed builds have no
/// proxy in front of the generation service and cross-origin calls fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Default for Environment {
    /// Follows the build profile: debug builds are development builds.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}
