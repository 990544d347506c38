use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Root configuration structure for scaffold-kit.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScaffoldConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via scaffold-kit.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Defaults {
    #[serde(default = "default_metadata")]
    pub metadata: MetadataDefaults,

    #[serde(default = "default_environment")]
    pub environment: EnvironmentDefaults,

    #[serde(default = "default_pyproject")]
    pub pyproject: PyprojectDefaults,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            metadata: default_metadata(),
            environment: default_environment(),
            pyproject: default_pyproject(),
        }
    }
}

/// Package metadata used when the caller does not supply a value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetadataDefaults {
    #[serde(default = "default_author_name")]
    pub author_name: String,

    #[serde(default = "default_author_email")]
    pub author_email: String,

    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default = "default_description")]
    pub description: String,
}

/// Contents of the generated conda environment file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvironmentDefaults {
    #[serde(default = "default_python_version")]
    pub python_version: String,

    /// Packaging and testing tools
    #[serde(default = "default_tooling")]
    pub tooling: Vec<String>,

    /// Project-specific dependencies, meant to be replaced
    #[serde(default = "default_env_dependencies")]
    pub dependencies: Vec<String>,
}

/// Values for the generated pyproject.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PyprojectDefaults {
    #[serde(default = "default_requires_python")]
    pub requires_python: String,

    #[serde(default = "default_pyproject_dependencies")]
    pub dependencies: Vec<String>,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_metadata() -> MetadataDefaults {
    MetadataDefaults {
        author_name: default_author_name(),
        author_email: default_author_email(),
        version: default_version(),
        description: default_description(),
    }
}

fn default_author_name() -> String {
    "Author Full Name".to_string()
}

fn default_author_email() -> String {
    "authors_email@goes_here.ie".to_string()
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_description() -> String {
    "A simple Python project".to_string()
}

fn default_environment() -> EnvironmentDefaults {
    EnvironmentDefaults {
        python_version: default_python_version(),
        tooling: default_tooling(),
        dependencies: default_env_dependencies(),
    }
}

fn default_python_version() -> String {
    "3.12".to_string()
}

fn default_tooling() -> Vec<String> {
    vec![
        "pytest".to_string(),
        "setuptools".to_string(),
        "blackd".to_string(),
        "isort".to_string(),
    ]
}

fn default_env_dependencies() -> Vec<String> {
    vec![
        "numpy".to_string(),
        "matplotlib".to_string(),
        "pandas".to_string(),
    ]
}

fn default_pyproject() -> PyprojectDefaults {
    PyprojectDefaults {
        requires_python: default_requires_python(),
        dependencies: default_pyproject_dependencies(),
    }
}

fn default_requires_python() -> String {
    ">=3.10".to_string()
}

fn default_pyproject_dependencies() -> Vec<String> {
    vec!["numpy>=1.21.2".to_string()]
}

// =============================================================================
// Loading functions
// =============================================================================

/// Where the config was read from.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub exists: bool,
}

/// Resolve the config file location: the explicit override, else the global file.
pub fn resolve_path(override_path: Option<&str>) -> crate::Result<PathBuf> {
    match override_path {
        Some(path) => Ok(paths::expand(path)),
        None => paths::config_json(),
    }
}

/// Load the config, merging the file over built-in defaults.
///
/// A missing global file yields built-in defaults. A missing explicit file,
/// an unreadable file or malformed JSON is an error.
pub fn load_config(override_path: Option<&str>) -> crate::Result<(ScaffoldConfig, ConfigSource)> {
    let path = resolve_path(override_path)?;

    if !path.exists() {
        if override_path.is_some() {
            return Err(crate::Error::config_invalid_value(
                "config",
                Some(path.display().to_string()),
                "Config file does not exist",
            ));
        }
        return Ok((
            ScaffoldConfig::default(),
            ConfigSource {
                path,
                exists: false,
            },
        ));
    }

    let config = load_config_from_file(&path)?;
    log_status!("config", "Loaded {}", path.display());

    Ok((config, ConfigSource { path, exists: true }))
}

/// Parse a config file at an explicit path.
pub fn load_config_from_file(path: &Path) -> crate::Result<ScaffoldConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        crate::Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    parse_config(&content, &path.display().to_string())
}

/// Parse config JSON; `origin` names the source in error details.
pub fn parse_config(content: &str, origin: &str) -> crate::Result<ScaffoldConfig> {
    serde_json::from_str(content).map_err(|e| crate::Error::config_invalid_json(origin, e))
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}
