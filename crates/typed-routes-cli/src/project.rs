//! Resolved project layout: config file merged with command-line flags

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use typed_routes::{writer, TypedRoutes, TypedRoutesConfig};

use crate::ProjectArgs;

/// Everything a command needs to know about the project
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub router_dir: PathBuf,
    pub types_dir: PathBuf,
    pub template: Option<String>,
    pub debounce: Duration,
}

impl Project {
    pub fn resolve(args: &ProjectArgs) -> Result<Self> {
        let root = fs::canonicalize(&args.project_root).with_context(|| {
            format!("Project root not found: {}", args.project_root.display())
        })?;

        let config = TypedRoutesConfig::load(&root).context("Failed to load typed-routes.toml")?;
        Self::from_config(root, &config, args)
    }

    fn from_config(root: PathBuf, config: &TypedRoutesConfig, args: &ProjectArgs) -> Result<Self> {
        let router_dir = match &args.router_dir {
            Some(dir) => root.join(dir),
            None => config.router_dir(&root),
        };

        let types_dir = match &args.types_dir {
            Some(dir) => root.join(dir),
            None => config.types_dir(&root),
        };

        let template = match config.template_path(&root) {
            Some(path) => Some(
                writer::load_template(&path)
                    .with_context(|| format!("Failed to read template {}", path.display()))?,
            ),
            None => None,
        };

        Ok(Self {
            root,
            router_dir,
            types_dir,
            template,
            debounce: Duration::from_millis(config.watch.debounce_ms),
        })
    }

    /// Empty registry rooted at the router directory
    pub fn registry(&self) -> Result<TypedRoutes> {
        let router_dir = path_str(&self.router_dir)?;
        Ok(TypedRoutes::new(router_dir))
    }
}

/// Route paths are handled as UTF-8 strings
pub fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .with_context(|| format!("Path is not valid UTF-8: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(router_dir: Option<&str>, types_dir: Option<&str>) -> ProjectArgs {
        ProjectArgs {
            project_root: PathBuf::from("."),
            router_dir: router_dir.map(PathBuf::from),
            types_dir: types_dir.map(PathBuf::from),
        }
    }

    #[test]
    fn test_defaults_from_config() {
        let project = Project::from_config(
            PathBuf::from("/proj"),
            &TypedRoutesConfig::default(),
            &args(None, None),
        )
        .unwrap();

        assert_eq!(project.router_dir, PathBuf::from("/proj/app"));
        assert_eq!(project.types_dir, PathBuf::from("/proj/.expo/types"));
        assert_eq!(project.template, None);
        assert_eq!(project.debounce, Duration::from_millis(100));
    }

    #[test]
    fn test_flags_override_config() {
        let project = Project::from_config(
            PathBuf::from("/proj"),
            &TypedRoutesConfig::default(),
            &args(Some("src/app"), Some("types")),
        )
        .unwrap();

        assert_eq!(project.router_dir, PathBuf::from("/proj/src/app"));
        assert_eq!(project.types_dir, PathBuf::from("/proj/types"));
    }

    #[test]
    fn test_missing_template_is_an_error() {
        let mut config = TypedRoutesConfig::default();
        config.routes.template = Some(PathBuf::from("missing.d.ts"));

        let err = Project::from_config(PathBuf::from("/definitely/not/here"), &config, &args(None, None))
            .unwrap_err();
        assert!(err.to_string().contains("missing.d.ts"));
    }

    #[test]
    fn test_resolve_reads_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(
            dir.path().join("typed-routes.toml"),
            "[routes]\nrouter_dir = \"routes\"\n\n[watch]\ndebounce_ms = 50\n",
        )
        .unwrap();

        let project = Project::resolve(&ProjectArgs {
            project_root: dir.path().to_path_buf(),
            router_dir: None,
            types_dir: None,
        })
        .unwrap();

        assert!(project.router_dir.ends_with("routes"));
        assert_eq!(project.debounce, Duration::from_millis(50));
    }
}
