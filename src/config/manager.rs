use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dir::Dir;

/// Name under which `xdg-dirs` looks up its own configuration directory.
pub const APP_NAME: &str = "xdg-dirs";

/// How resolved paths are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One role per line, human readable
    #[default]
    Plain,
    /// A JSON object
    Json,
    /// A TOML document
    Toml,
}

/// Default settings in the `[defaults]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Default application name.
    pub app: Option<String>,
    /// Default output format.
    pub format: Option<OutputFormat>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/xdg-dirs/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Settings after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub app: String,
    pub format: OutputFormat,
}

/// Options for resolving settings.
///
/// Contains CLI overrides (including values clap read from the environment)
/// that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub app: Option<String>,
    pub format: Option<OutputFormat>,
}

/// Resolves settings by merging CLI options with config file settings.
///
/// Priority: CLI option (or `XDG_DIRS_APP`) > config file > built-in default.
/// The application name has no built-in default.
pub fn resolve_settings(options: &ResolveOptions, config_file: &ConfigFile) -> Result<Settings> {
    let app = options
        .app
        .as_ref()
        .or(config_file.defaults.app.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required setting: 'app'\n\n\
                 Please provide it via:\n  \
                 - CLI option: xdg-dirs --app <name>\n  \
                 - Environment: XDG_DIRS_APP=<name>\n  \
                 - Config file: ~/.config/xdg-dirs/config.toml"
            )
        })?;

    Ok(Settings {
        app,
        format: resolve_format(options, config_file),
    })
}

/// Resolves the output format alone, for commands that need no application.
pub fn resolve_format(options: &ResolveOptions, config_file: &ConfigFile) -> OutputFormat {
    options
        .format
        .or(config_file.defaults.format)
        .unwrap_or_default()
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/xdg-dirs/config.toml`
    /// or `~/.config/xdg-dirs/config.toml`. When neither resolves to an
    /// absolute path the manager has no file and always yields the defaults.
    pub fn new() -> Self {
        let dir = crate::config(APP_NAME);
        let config_path = dir
            .as_path()
            .is_absolute()
            .then(|| PathBuf::from(dir.append("config.toml").into_string()));
        Self { config_path }
    }

    /// Creates a manager reading from an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let path = self
            .config_path
            .as_deref()
            .context("Config directory could not be resolved")?;

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config_file: ConfigFile = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config_file)
    }

    /// Loads the file, or returns the defaults if there is no file.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        match &self.config_path {
            Some(path) if Dir::new(path.to_string_lossy()).exists() => self.load(),
            _ => Ok(ConfigFile::default()),
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
