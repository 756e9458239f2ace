//! Project layout configuration for nestgen
//!
//! Hosts can override where modules live and where the composition root
//! sits via a `nestgen.toml` file in the project root.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Layout configuration loaded from `nestgen.toml`
///
/// All fields default to the conventional NestJS layout, so the file is
/// optional and may set any subset of keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directory (relative to the project root) holding feature modules
    pub modules_root: PathBuf,
    /// Composition-root file (relative to the project root)
    pub app_module: PathBuf,
    /// Extension of generated source files
    pub extension: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig {
            modules_root: PathBuf::from("src/modules"),
            app_module: PathBuf::from("src/app.module.ts"),
            extension: "ts".to_string(),
        }
    }
}

/// Load the project config from a TOML file
///
/// # Returns
///
/// Returns `Ok(Some(config))` if the file exists and parses successfully,
/// `Ok(None)` if the file doesn't exist (not an error),
/// `Err` if the file exists but fails to parse.
pub fn load_project_config(config_path: &Path) -> anyhow::Result<Option<ProjectConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read project config: {}", config_path.display()))?;

    let config: ProjectConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse project config: {}", config_path.display()))?;

    Ok(Some(config))
}

/// Resolve the project config
///
/// Priority:
/// 1. Explicitly provided path (via CLI), which must exist and parse
/// 2. `nestgen.toml` auto-detected in the project root
/// 3. Defaults
pub fn resolve_project_config(
    explicit_path: Option<&Path>,
    project_root: &Path,
) -> anyhow::Result<ProjectConfig> {
    if let Some(path) = explicit_path {
        return load_project_config(path)?
            .with_context(|| format!("Project config not found: {}", path.display()));
    }
    Ok(load_project_config(&project_root.join("nestgen.toml"))?.unwrap_or_default())
}
