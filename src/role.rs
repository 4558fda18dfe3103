//! The closed set of XDG directory roles.
//!
//! Every role maps to exactly one environment variable. Home-based roles
//! also carry a default base directory beneath `$HOME`, and search-path
//! roles carry a default list of system directories.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One of the seven directory purposes defined by the XDG base directory spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// User configuration (`XDG_CONFIG_HOME`).
    Config,
    /// Non-essential cached data (`XDG_CACHE_HOME`).
    Cache,
    /// User data files (`XDG_DATA_HOME`).
    Data,
    /// Persistent state such as history and logs (`XDG_STATE_HOME`).
    State,
    /// Runtime files such as sockets (`XDG_RUNTIME_DIR`).
    Runtime,
    /// Preference-ordered configuration search path (`XDG_CONFIG_DIRS`).
    ConfigDirs,
    /// Preference-ordered data search path (`XDG_DATA_DIRS`).
    DataDirs,
}

impl Role {
    /// All roles, single-path roles first.
    pub const ALL: [Self; 7] = [
        Self::Config,
        Self::Cache,
        Self::Data,
        Self::State,
        Self::Runtime,
        Self::ConfigDirs,
        Self::DataDirs,
    ];

    /// The environment variable that overrides this role.
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Config => "XDG_CONFIG_HOME",
            Self::Cache => "XDG_CACHE_HOME",
            Self::Data => "XDG_DATA_HOME",
            Self::State => "XDG_STATE_HOME",
            Self::Runtime => "XDG_RUNTIME_DIR",
            Self::ConfigDirs => "XDG_CONFIG_DIRS",
            Self::DataDirs => "XDG_DATA_DIRS",
        }
    }

    /// Kebab-case name used on the command line and in serialized output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Cache => "cache",
            Self::Data => "data",
            Self::State => "state",
            Self::Runtime => "runtime",
            Self::ConfigDirs => "config-dirs",
            Self::DataDirs => "data-dirs",
        }
    }

    /// Returns `true` for roles that resolve to an ordered list of directories.
    pub const fn is_search_path(self) -> bool {
        matches!(self, Self::ConfigDirs | Self::DataDirs)
    }

    /// The home-based role, if this is one.
    pub const fn home_role(self) -> Option<HomeRole> {
        match self {
            Self::Config => Some(HomeRole::Config),
            Self::Cache => Some(HomeRole::Cache),
            Self::Data => Some(HomeRole::Data),
            Self::State => Some(HomeRole::State),
            Self::Runtime | Self::ConfigDirs | Self::DataDirs => None,
        }
    }

    /// The search path a role reads from: `config`/`config-dirs` map to the
    /// config search path, `data`/`data-dirs` to the data search path.
    pub const fn search_role(self) -> Option<SearchRole> {
        match self {
            Self::Config | Self::ConfigDirs => Some(SearchRole::Config),
            Self::Data | Self::DataDirs => Some(SearchRole::Data),
            Self::Cache | Self::State | Self::Runtime => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown role name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Single-path roles whose default lives beneath the home directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeRole {
    Config,
    Cache,
    Data,
    State,
}

impl HomeRole {
    /// Default base directory, relative to `$HOME`.
    pub const fn default_base(self) -> &'static str {
        match self {
            Self::Config => ".config",
            Self::Cache => ".cache",
            Self::Data => ".local/share",
            Self::State => ".local/state",
        }
    }
}

impl From<HomeRole> for Role {
    fn from(role: HomeRole) -> Self {
        match role {
            HomeRole::Config => Self::Config,
            HomeRole::Cache => Self::Cache,
            HomeRole::Data => Self::Data,
            HomeRole::State => Self::State,
        }
    }
}

/// Roles that resolve to a colon-separated list of system directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchRole {
    Config,
    Data,
}

impl SearchRole {
    /// Default value used when the variable is unset, in list-separator form.
    pub const fn default_dirs(self) -> &'static str {
        match self {
            Self::Config => "/etc/xdg",
            Self::Data => "/usr/local/share/:/usr/share/",
        }
    }

    /// The single-path role holding the user's own directory for this search path.
    pub const fn home(self) -> HomeRole {
        match self {
            Self::Config => HomeRole::Config,
            Self::Data => HomeRole::Data,
        }
    }
}

impl From<SearchRole> for Role {
    fn from(role: SearchRole) -> Self {
        match role {
            SearchRole::Config => Self::ConfigDirs,
            SearchRole::Data => Self::DataDirs,
        }
    }
}
