//! XDG base directory resolution for a named application.
//!
//! Resolution order for the single-path roles:
//! 1. `$XDG_<ROLE>` joined with the application name, if the variable is set
//!    (an empty value still counts as set)
//! 2. nothing, for the runtime directory
//! 3. `~/<default base>/<app>` otherwise, or nothing when the home directory
//!    cannot be determined
//!
//! Search-path roles split their variable on [`LIST_SEPARATOR`] and append
//! the application name to every entry. "Nothing" is an empty [`Dir`] or an
//! empty list; resolution never fails.

use serde::Serialize;

use crate::dir::{Dir, LIST_SEPARATOR, join};
use crate::env::{Env, ProcessEnv};
use crate::role::{HomeRole, Role, SearchRole};

/// Resolves directories for one application.
///
/// Holds no state besides the application name and the environment handle;
/// every call reads the environment again.
#[derive(Debug, Clone)]
pub struct Xdg<E = ProcessEnv> {
    name: String,
    env: E,
}

impl Xdg<ProcessEnv> {
    /// Creates a resolver for `name` over the process environment.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_env(name, ProcessEnv)
    }
}

impl<E: Env> Xdg<E> {
    /// Creates a resolver for `name` over a custom environment.
    pub fn with_env(name: impl Into<String>, env: E) -> Self {
        Self {
            name: name.into(),
            env,
        }
    }

    /// The application name appended to every resolved path.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> Dir {
        self.home(HomeRole::Config)
    }

    pub fn cache(&self) -> Dir {
        self.home(HomeRole::Cache)
    }

    pub fn data(&self) -> Dir {
        self.home(HomeRole::Data)
    }

    pub fn state(&self) -> Dir {
        self.home(HomeRole::State)
    }

    pub fn config_dirs(&self) -> Vec<Dir> {
        self.search_dirs(SearchRole::Config)
    }

    pub fn data_dirs(&self) -> Vec<Dir> {
        self.search_dirs(SearchRole::Data)
    }

    /// Resolves a home-based role.
    pub fn home(&self, role: HomeRole) -> Dir {
        if let Some(dir) = self.env_override(role.into()) {
            return dir;
        }
        self.env.home_dir().map_or_else(Dir::default, |home| {
            Dir::new(join(&[&home, role.default_base(), &self.name]))
        })
    }

    /// Resolves `XDG_RUNTIME_DIR`.
    ///
    /// There is no default: when the variable is unset the result is empty,
    /// whatever the home directory.
    pub fn runtime(&self) -> Dir {
        self.env_override(Role::Runtime).unwrap_or_default()
    }

    /// Resolves a search-path role, in the variable's order.
    pub fn search_dirs(&self, role: SearchRole) -> Vec<Dir> {
        let value = self
            .env
            .var(Role::from(role).env_var())
            .unwrap_or_else(|| role.default_dirs().to_string());
        if value.is_empty() {
            return Vec::new();
        }
        value
            .split(LIST_SEPARATOR)
            .map(|entry| Dir::new(join(&[entry, &self.name])))
            .collect()
    }

    /// Resolves any role.
    pub fn resolve(&self, role: Role) -> Resolved {
        match role {
            Role::Config => Resolved::Single(self.config()),
            Role::Cache => Resolved::Single(self.cache()),
            Role::Data => Resolved::Single(self.data()),
            Role::State => Resolved::Single(self.state()),
            Role::Runtime => Resolved::Single(self.runtime()),
            Role::ConfigDirs => Resolved::Many(self.config_dirs()),
            Role::DataDirs => Resolved::Many(self.data_dirs()),
        }
    }

    /// `~/.<app>`, the traditional pre-XDG dot directory.
    ///
    /// Empty when the home directory cannot be determined.
    pub fn dot_dir(&self) -> Dir {
        self.env.home_dir().map_or_else(Dir::default, |home| {
            Dir::new(join(&[&home, &format!(".{}", self.name)]))
        })
    }

    /// The user directory for `role` followed by its system search dirs.
    ///
    /// This is the lookup order for reading files: the user's own config or
    /// data directory wins over the system ones. An unresolvable user
    /// directory is skipped.
    pub fn search_path(&self, role: SearchRole) -> Vec<Dir> {
        let user = self.home(role.home());
        let mut dirs = Vec::new();
        if !user.is_empty() {
            dirs.push(user);
        }
        dirs.extend(self.search_dirs(role));
        dirs
    }

    /// Returns the first `dir/relative` along [`Xdg::search_path`] that exists.
    pub fn find(&self, role: SearchRole, relative: &str) -> Option<Dir> {
        self.search_path(role)
            .into_iter()
            .map(|dir| dir.append(relative))
            .find(Dir::exists)
    }

    /// Resolves every role at once.
    pub fn report(&self) -> Report {
        Report {
            app: self.name.clone(),
            config: self.config(),
            cache: self.cache(),
            data: self.data(),
            state: self.state(),
            runtime: self.runtime(),
            config_dirs: self.config_dirs(),
            data_dirs: self.data_dirs(),
        }
    }

    fn env_override(&self, role: Role) -> Option<Dir> {
        self.env
            .var(role.env_var())
            .map(|value| Dir::new(join(&[&value, &self.name])))
    }
}

/// The result of resolving an arbitrary [`Role`].
///
/// Serializes as a plain string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Resolved {
    Single(Dir),
    Many(Vec<Dir>),
}

impl Resolved {
    /// All resolved directories; an empty single result yields nothing.
    pub fn dirs(&self) -> Vec<&Dir> {
        match self {
            Self::Single(dir) if dir.is_empty() => Vec::new(),
            Self::Single(dir) => vec![dir],
            Self::Many(dirs) => dirs.iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dirs().is_empty()
    }
}

/// Every role resolved for one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Report {
    pub app: String,
    pub config: Dir,
    pub cache: Dir,
    pub data: Dir,
    pub state: Dir,
    pub runtime: Dir,
    pub config_dirs: Vec<Dir>,
    pub data_dirs: Vec<Dir>,
}

impl Report {
    /// Role/value pairs in [`Role::ALL`] order.
    pub fn entries(&self) -> Vec<(Role, Resolved)> {
        vec![
            (Role::Config, Resolved::Single(self.config.clone())),
            (Role::Cache, Resolved::Single(self.cache.clone())),
            (Role::Data, Resolved::Single(self.data.clone())),
            (Role::State, Resolved::Single(self.state.clone())),
            (Role::Runtime, Resolved::Single(self.runtime.clone())),
            (Role::ConfigDirs, Resolved::Many(self.config_dirs.clone())),
            (Role::DataDirs, Resolved::Many(self.data_dirs.clone())),
        ]
    }
}

#[cfg(all(test, unix))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::env::MapEnv;
    use std::fs;
    use tempfile::TempDir;

    const NAME: &str = "go-xdg-test";

    fn xdg(env: MapEnv) -> Xdg<MapEnv> {
        Xdg::with_env(NAME, env)
    }

    fn strs(dirs: &[Dir]) -> Vec<&str> {
        dirs.iter().map(Dir::as_str).collect()
    }

    #[test]
    fn test_defaults_under_home() {
        let xdg = xdg(MapEnv::new().with_home("/home/t"));

        assert_eq!(xdg.config(), "/home/t/.config/go-xdg-test");
        assert_eq!(xdg.cache(), "/home/t/.cache/go-xdg-test");
        assert_eq!(xdg.data(), "/home/t/.local/share/go-xdg-test");
        assert_eq!(xdg.state(), "/home/t/.local/state/go-xdg-test");
        assert_eq!(xdg.runtime(), "");
        assert_eq!(
            strs(&xdg.data_dirs()),
            vec!["/usr/local/share/go-xdg-test", "/usr/share/go-xdg-test"]
        );
        assert_eq!(strs(&xdg.config_dirs()), vec!["/etc/xdg/go-xdg-test"]);
    }

    #[test]
    fn test_env_overrides() {
        let xdg = xdg(MapEnv::new()
            .with_home("/home/t")
            .with_var("XDG_CONFIG_HOME", "/h/t/.conf")
            .with_var("XDG_CACHE_HOME", "/h/t/.local/cache")
            .with_var("XDG_DATA_HOME", "/h/t/.local/share/dat")
            .with_var("XDG_STATE_HOME", "/h/t/.local/share/state")
            .with_var("XDG_RUNTIME_DIR", "/h/t/.local/share/run")
            .with_var("XDG_DATA_DIRS", "/h/t/.local/share/datas:/xdg-data")
            .with_var("XDG_CONFIG_DIRS", "/h/t/.conf"));

        assert_eq!(xdg.config(), "/h/t/.conf/go-xdg-test");
        assert_eq!(xdg.cache(), "/h/t/.local/cache/go-xdg-test");
        assert_eq!(xdg.data(), "/h/t/.local/share/dat/go-xdg-test");
        assert_eq!(xdg.state(), "/h/t/.local/share/state/go-xdg-test");
        assert_eq!(xdg.runtime(), "/h/t/.local/share/run/go-xdg-test");
        assert_eq!(
            strs(&xdg.data_dirs()),
            vec!["/h/t/.local/share/datas/go-xdg-test", "/xdg-data/go-xdg-test"]
        );
        assert_eq!(strs(&xdg.config_dirs()), vec!["/h/t/.conf/go-xdg-test"]);
    }

    #[test]
    fn test_empty_var_is_still_an_override() {
        let xdg = xdg(MapEnv::new()
            .with_home("/home/t")
            .with_var("XDG_CONFIG_HOME", "")
            .with_var("XDG_RUNTIME_DIR", ""));

        assert_eq!(xdg.config(), NAME);
        assert_eq!(xdg.runtime(), NAME);
    }

    #[test]
    fn test_no_home() {
        let xdg = xdg(MapEnv::new());

        assert_eq!(xdg.config(), "");
        assert_eq!(xdg.cache(), "");
        assert_eq!(xdg.data(), "");
        assert_eq!(xdg.state(), "");
        assert_eq!(xdg.dot_dir(), "");
        // search dirs do not depend on home
        assert_eq!(strs(&xdg.config_dirs()), vec!["/etc/xdg/go-xdg-test"]);
    }

    #[test]
    fn test_no_home_with_override() {
        let xdg = xdg(MapEnv::new().with_var("XDG_DATA_HOME", "/srv/data"));
        assert_eq!(xdg.data(), "/srv/data/go-xdg-test");
    }

    #[test]
    fn test_runtime_ignores_home() {
        let xdg = xdg(MapEnv::new().with_home("/home/t"));
        assert!(xdg.runtime().is_empty());
        assert!(xdg.resolve(Role::Runtime).is_empty());
    }

    #[test]
    fn test_empty_search_var_yields_nothing() {
        let xdg = xdg(MapEnv::new()
            .with_var("XDG_DATA_DIRS", "")
            .with_var("XDG_CONFIG_DIRS", ""));

        assert!(xdg.data_dirs().is_empty());
        assert!(xdg.config_dirs().is_empty());
    }

    #[test]
    fn test_search_var_keeps_empty_entries() {
        let xdg = xdg(MapEnv::new().with_var("XDG_DATA_DIRS", "/a::/b"));
        assert_eq!(
            strs(&xdg.data_dirs()),
            vec!["/a/go-xdg-test", "go-xdg-test", "/b/go-xdg-test"]
        );
    }

    #[test]
    fn test_dot_dir() {
        let xdg = xdg(MapEnv::new().with_home("/home/t"));
        assert_eq!(xdg.dot_dir(), "/home/t/.go-xdg-test");
    }

    #[test]
    fn test_resolve_dispatch() {
        let xdg = xdg(MapEnv::new().with_home("/home/t"));

        assert_eq!(xdg.resolve(Role::State), Resolved::Single(xdg.state()));
        assert_eq!(xdg.resolve(Role::DataDirs), Resolved::Many(xdg.data_dirs()));
        assert_eq!(xdg.resolve(Role::ConfigDirs).dirs().len(), 1);
    }

    #[test]
    fn test_search_path_puts_user_dir_first() {
        let xdg = xdg(MapEnv::new()
            .with_home("/home/t")
            .with_var("XDG_CONFIG_DIRS", "/etc/one:/etc/two"));

        assert_eq!(
            strs(&xdg.search_path(SearchRole::Config)),
            vec![
                "/home/t/.config/go-xdg-test",
                "/etc/one/go-xdg-test",
                "/etc/two/go-xdg-test"
            ]
        );
    }

    #[test]
    fn test_search_path_skips_unresolvable_user_dir() {
        let xdg = xdg(MapEnv::new());
        assert_eq!(
            strs(&xdg.search_path(SearchRole::Data)),
            vec!["/usr/local/share/go-xdg-test", "/usr/share/go-xdg-test"]
        );
    }

    #[test]
    fn test_find_prefers_earlier_entries() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_str().unwrap();
        let user = format!("{root}/user");
        let system = format!("{root}/system");

        for base in [&user, &system] {
            let dir = Dir::new(base.as_str()).append(NAME);
            dir.create().unwrap();
            fs::write(dir.append("shared.toml").as_path(), "x").unwrap();
        }
        fs::write(
            Dir::new(system.as_str()).append(NAME).append("only-system.toml").as_path(),
            "x",
        )
        .unwrap();

        let xdg = xdg(MapEnv::new()
            .with_var("XDG_CONFIG_HOME", user.as_str())
            .with_var("XDG_CONFIG_DIRS", system.as_str()));

        assert_eq!(
            xdg.find(SearchRole::Config, "shared.toml").unwrap(),
            Dir::new(format!("{user}/{NAME}/shared.toml"))
        );
        assert_eq!(
            xdg.find(SearchRole::Config, "only-system.toml").unwrap(),
            Dir::new(format!("{system}/{NAME}/only-system.toml"))
        );
        assert!(xdg.find(SearchRole::Config, "missing.toml").is_none());
    }

    #[test]
    fn test_report_serializes_all_roles() {
        let report = xdg(MapEnv::new().with_home("/home/t")).report();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["app"], "go-xdg-test");
        assert_eq!(json["config"], "/home/t/.config/go-xdg-test");
        assert_eq!(json["runtime"], "");
        assert_eq!(json["config-dirs"][0], "/etc/xdg/go-xdg-test");
        assert!(json.get("config_dirs").is_none());
        assert_eq!(report.entries().len(), Role::ALL.len());
    }

    #[test]
    fn test_reads_env_on_every_call() {
        use std::cell::RefCell;

        struct Changing(RefCell<Vec<&'static str>>);

        impl Env for Changing {
            fn var(&self, _key: &str) -> Option<String> {
                self.0.borrow_mut().pop().map(str::to_string)
            }
            fn home_dir(&self) -> Option<String> {
                None
            }
        }

        let xdg = Xdg::with_env(NAME, Changing(RefCell::new(vec!["/second", "/first"])));
        assert_eq!(xdg.cache(), "/first/go-xdg-test");
        assert_eq!(xdg.cache(), "/second/go-xdg-test");
    }
}
