//! Environment access for directory resolution.
//!
//! Resolution only ever reads two things from the host: environment
//! variables and the home directory. Both go through [`Env`] so a resolver
//! can run against the live process or against a fixed snapshot.

use std::collections::HashMap;

/// Read-only view of the variables and home directory used for resolution.
pub trait Env {
    /// Returns the value of `key`, or `None` if it is not set.
    ///
    /// A variable that is set to the empty string returns `Some("")`.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns the user's home directory, or `None` if it cannot be determined.
    fn home_dir(&self) -> Option<String>;
}

impl<E: Env + ?Sized> Env for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn home_dir(&self) -> Option<String> {
        (**self).home_dir()
    }
}

/// The live process environment.
///
/// Values are read on every call; nothing is cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }

    /// On unix this is `$HOME`; an unset or empty `HOME` means no home
    /// directory. Other hosts use the platform lookup.
    #[cfg(unix)]
    fn home_dir(&self) -> Option<String> {
        self.var("HOME").filter(|home| !home.is_empty())
    }

    #[cfg(not(unix))]
    fn home_dir(&self) -> Option<String> {
        dirs::home_dir().map(|home| home.to_string_lossy().into_owned())
    }
}

/// An in-memory environment snapshot.
///
/// ```
/// use xdg_dirs::{MapEnv, Xdg};
///
/// let env = MapEnv::new()
///     .with_home("/home/t")
///     .with_var("XDG_CACHE_HOME", "/var/cache/t");
/// let xdg = Xdg::with_env("demo", env);
/// assert_eq!(xdg.cache().as_str(), "/var/cache/t/demo");
/// assert_eq!(xdg.config().as_str(), "/home/t/.config/demo");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
    home: Option<String>,
}

impl MapEnv {
    /// Creates an empty snapshot with no variables and no home directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Sets the home directory.
    #[must_use]
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = Some(home.into());
        self
    }
}

impl Env for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn home_dir(&self) -> Option<String> {
        self.home.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_map_env_distinguishes_empty_from_unset() {
        let env = MapEnv::new().with_var("XDG_DATA_DIRS", "");
        assert_eq!(env.var("XDG_DATA_DIRS"), Some(String::new()));
        assert_eq!(env.var("XDG_CONFIG_DIRS"), None);
        assert_eq!(env.home_dir(), None);
    }

    #[test]
    #[serial]
    fn test_process_env_reads_current_value() {
        let original = std::env::var_os("XDG_STATE_HOME");

        unsafe { std::env::set_var("XDG_STATE_HOME", "/tmp/state") };
        assert_eq!(ProcessEnv.var("XDG_STATE_HOME").as_deref(), Some("/tmp/state"));

        unsafe { std::env::set_var("XDG_STATE_HOME", "") };
        assert_eq!(ProcessEnv.var("XDG_STATE_HOME").as_deref(), Some(""));

        unsafe { std::env::remove_var("XDG_STATE_HOME") };
        assert_eq!(ProcessEnv.var("XDG_STATE_HOME"), None);

        // Restore
        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_STATE_HOME", val) };
        }
    }

    #[test]
    #[serial]
    fn test_process_env_home_follows_home_var() {
        let original = std::env::var_os("HOME");
        unsafe { std::env::set_var("HOME", "/home/t") };

        assert_eq!(ProcessEnv.home_dir().as_deref(), Some("/home/t"));

        // Restore
        match original {
            Some(val) => unsafe { std::env::set_var("HOME", val) },
            None => unsafe { std::env::remove_var("HOME") },
        }
    }

    #[test]
    #[serial]
    #[cfg(unix)]
    fn test_process_env_without_home() {
        let original_home = std::env::var_os("HOME");
        let original_config = std::env::var_os("XDG_CONFIG_HOME");
        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };

        unsafe { std::env::remove_var("HOME") };
        assert_eq!(ProcessEnv.home_dir(), None);
        assert_eq!(crate::config("app"), "");

        unsafe { std::env::set_var("HOME", "") };
        assert_eq!(ProcessEnv.home_dir(), None);
        assert_eq!(crate::config("app"), "");

        // Restore
        match original_home {
            Some(val) => unsafe { std::env::set_var("HOME", val) },
            None => unsafe { std::env::remove_var("HOME") },
        }
        if let Some(val) = original_config {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        }
    }
}
