//! Configuration file management for the `xdg-dirs` binary.

mod manager;

pub use manager::{
    APP_NAME, ConfigFile, ConfigManager, Defaults, OutputFormat, ResolveOptions, Settings,
    resolve_format, resolve_settings,
};
