// File: src/config.rs
// Purpose: Configuration parsing from typed-routes.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TypedRoutesError};

/// Config file looked up in the project root
pub const CONFIG_FILE: &str = "typed-routes.toml";

/// Typed-routes configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TypedRoutesConfig {
    #[serde(default)]
    pub routes: RoutesConfig,

    #[serde(default)]
    pub watch: WatchConfig,
}

/// Where routes are read from and where declarations go
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Router directory, relative to the project root (default: "app")
    #[serde(default = "default_router_dir")]
    pub router_dir: PathBuf,

    /// Directory receiving router.d.ts (default: ".expo/types")
    #[serde(default = "default_types_dir")]
    pub types_dir: PathBuf,

    /// Base declaration template; the built-in one is used when unset
    #[serde(default)]
    pub template: Option<PathBuf>,
}

/// Watch-mode configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Quiet period before a batch of changes is applied
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

// Default values
fn default_router_dir() -> PathBuf {
    PathBuf::from("app")
}

fn default_types_dir() -> PathBuf {
    PathBuf::from(".expo/types")
}

fn default_debounce_ms() -> u64 {
    100
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            router_dir: default_router_dir(),
            types_dir: default_types_dir(),
            template: None,
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl TypedRoutesConfig {
    /// Parses a config from TOML text
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| TypedRoutesError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Loads a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| TypedRoutesError::io(path, e))?;
        Self::from_toml(&content, path)
    }

    /// Loads `typed-routes.toml` from the project root, or defaults if absent
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE);
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Absolute router directory for a project root
    pub fn router_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.routes.router_dir)
    }

    /// Absolute types directory for a project root
    pub fn types_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.routes.types_dir)
    }

    /// Absolute template path, if one is configured
    pub fn template_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.routes
            .template
            .as_ref()
            .map(|template| project_root.join(template))
    }
}
