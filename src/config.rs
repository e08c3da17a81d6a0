//! Configuration handling for astkit
//!
//! Settings come from an optional `astkit.toml`:
//!
//! ```toml
//! [render]
//! python_version = "3.12"
//! indent_width = 4
//! ```
//!
//! The dialect is resolved in this order: `--python-version` flag, the
//! `ASTKIT_PYTHON_VERSION` environment variable, the config file, and
//! finally the permissive dialect.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use astkit_ast::{PythonVersion, RenderOptions, VERSION_ENV_VAR};

use crate::error::AstkitError;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "astkit.toml";

/// astkit configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Rendering settings
    #[serde(default)]
    pub render: RenderConfig,
}

/// Rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Dialect to render, `"permissive"` or `"<major>.<minor>"`
    #[serde(default)]
    pub python_version: Option<PythonVersion>,

    /// Spaces per block level
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

fn default_indent_width() -> usize {
    astkit_ast::render::DEFAULT_INDENT_WIDTH
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            python_version: None,
            indent_width: default_indent_width(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, AstkitError> {
        let content = fs::read_to_string(path).map_err(|e| AstkitError::from_io(path, e))?;
        let config: Config = toml::from_str(&content).map_err(|source| AstkitError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        if config.render.indent_width == 0 {
            return Err(AstkitError::invalid_args(format!(
                "{}: indent_width must be at least 1",
                path.display()
            )));
        }
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `astkit.toml` from `dir`, or defaults when there is none.
    pub fn load_from_dir(dir: &Path) -> Result<Self, AstkitError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load an explicit config path, or fall back to the working directory.
    pub fn discover(explicit: Option<&PathBuf>) -> Result<Self, AstkitError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let cwd = std::env::current_dir().map_err(AstkitError::Io)?;
                Self::load_from_dir(&cwd)
            }
        }
    }

    /// Render options using the environment for the dialect fallback.
    pub fn render_options(
        &self,
        cli_version: Option<PythonVersion>,
    ) -> Result<RenderOptions, AstkitError> {
        let env_version = std::env::var(VERSION_ENV_VAR).ok();
        self.render_options_with(cli_version, env_version.as_deref())
    }

    /// Render options with an explicit environment value.
    ///
    /// An environment value that does not parse is an error here, unlike
    /// [`PythonVersion::detect`], so a typo never silently widens the dialect.
    pub fn render_options_with(
        &self,
        cli_version: Option<PythonVersion>,
        env_version: Option<&str>,
    ) -> Result<RenderOptions, AstkitError> {
        let version = match (cli_version, env_version) {
            (Some(version), _) => version,
            (None, Some(value)) if !value.trim().is_empty() => value.parse()?,
            _ => self.render.python_version.unwrap_or_default(),
        };
        Ok(RenderOptions::new(version).with_indent_width(self.render.indent_width))
    }
}
