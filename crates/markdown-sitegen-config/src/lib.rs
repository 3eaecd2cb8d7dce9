use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in a project root.
pub const CONFIG_FILE_NAME: &str = "sitegen.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site layout as written in `sitegen.toml`.
///
/// Every field is optional in the file; missing ones take the defaults.
/// Relative paths are relative to the project root, see [`Config::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    pub skip_invalid_pages: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template_path: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            skip_invalid_pages: false,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.expand_paths();

        Ok(Some(config))
    }

    /// Loads `sitegen.toml` from the project root, if there is one.
    pub fn load(project_root: &Path) -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path(project_root))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE_NAME)
    }

    /// Returns a copy with every relative path joined onto `project_root`.
    pub fn resolve(&self, project_root: &Path) -> Self {
        Self {
            content_dir: project_root.join(&self.content_dir),
            static_dir: project_root.join(&self.static_dir),
            template_path: project_root.join(&self.template_path),
            output_dir: project_root.join(&self.output_dir),
            skip_invalid_pages: self.skip_invalid_pages,
        }
    }

    fn expand_paths(&mut self) {
        for path in [
            &mut self.content_dir,
            &mut self.static_dir,
            &mut self.template_path,
            &mut self.output_dir,
        ] {
            if let Some(expanded) = Self::expand_path(path) {
                *path = expanded;
            }
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
