//! # xdg-dirs - XDG base directories for applications
//!
//! Resolves the configuration, cache, data, state and runtime directories of
//! a named application following the
//! [XDG Base Directory Specification](https://specifications.freedesktop.org/basedir-spec/basedir-spec-latest.html),
//! plus the `XDG_CONFIG_DIRS` / `XDG_DATA_DIRS` search paths.
//!
//! Resolution never fails: when a directory cannot be determined (no
//! `XDG_RUNTIME_DIR`, no home directory) the result is an empty [`Dir`] or an
//! empty list, and the caller picks its own fallback.
//!
//! ## Quick Start
//!
//! ```no_run
//! let config = xdg_dirs::config("myapp");
//! if !config.exists() {
//!     config.create()?;
//! }
//! let settings = config.append("settings.toml");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! ## Defaults
//!
//! | role          | variable          | default                           |
//! |---------------|-------------------|-----------------------------------|
//! | `config`      | `XDG_CONFIG_HOME` | `~/.config/<app>`                 |
//! | `cache`       | `XDG_CACHE_HOME`  | `~/.cache/<app>`                  |
//! | `data`        | `XDG_DATA_HOME`   | `~/.local/share/<app>`            |
//! | `state`       | `XDG_STATE_HOME`  | `~/.local/state/<app>`            |
//! | `runtime`     | `XDG_RUNTIME_DIR` | none                              |
//! | `config-dirs` | `XDG_CONFIG_DIRS` | `/etc/xdg/<app>`                  |
//! | `data-dirs`   | `XDG_DATA_DIRS`   | `/usr/local/share/<app>`, `/usr/share/<app>` |

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file for the `xdg-dirs` binary.
pub mod config;

/// The `Dir` path value.
pub mod dir;

/// Environment access used by the resolver.
pub mod env;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG directory resolution.
pub mod paths;

/// The closed set of directory roles.
pub mod role;

/// Terminal styling.
pub mod ui;

pub use dir::{Dir, LIST_SEPARATOR};
pub use env::{Env, MapEnv, ProcessEnv};
pub use paths::{Report, Resolved, Xdg};
pub use role::{HomeRole, Role, SearchRole, UnknownRole};

/// `$XDG_CONFIG_HOME/<name>`, or `~/.config/<name>`.
pub fn config(name: &str) -> Dir {
    Xdg::new(name).config()
}

/// `$XDG_CACHE_HOME/<name>`, or `~/.cache/<name>`.
pub fn cache(name: &str) -> Dir {
    Xdg::new(name).cache()
}

/// `$XDG_DATA_HOME/<name>`, or `~/.local/share/<name>`.
pub fn data(name: &str) -> Dir {
    Xdg::new(name).data()
}

/// `$XDG_STATE_HOME/<name>`, or `~/.local/state/<name>`.
pub fn state(name: &str) -> Dir {
    Xdg::new(name).state()
}

/// `$XDG_RUNTIME_DIR/<name>`, or empty when the variable is unset.
pub fn runtime(name: &str) -> Dir {
    Xdg::new(name).runtime()
}

/// Every `$XDG_CONFIG_DIRS` entry joined with `<name>`.
pub fn config_dirs(name: &str) -> Vec<Dir> {
    Xdg::new(name).config_dirs()
}

/// Every `$XDG_DATA_DIRS` entry joined with `<name>`.
pub fn data_dirs(name: &str) -> Vec<Dir> {
    Xdg::new(name).data_dirs()
}
