//! Roles listing command handler.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;

use crate::config::OutputFormat;
use crate::role::Role;
use crate::ui::Style;

/// One row of the roles listing.
#[derive(Debug, Serialize)]
pub struct RoleInfo {
    pub role: Role,
    pub env_var: &'static str,
    pub default: String,
}

#[derive(Serialize)]
struct RoleList {
    roles: Vec<RoleInfo>,
}

/// Describes the default of `role` with `<app>` as the application placeholder.
pub fn default_description(role: Role) -> String {
    if let Some(home) = role.home_role() {
        return format!("~/{}/<app>", home.default_base());
    }
    match role.search_role() {
        Some(search) => search
            .default_dirs()
            .split(crate::LIST_SEPARATOR)
            .map(|dir| format!("{}/<app>", dir.trim_end_matches('/')))
            .collect::<Vec<_>>()
            .join(", "),
        _ => "(none)".to_string(),
    }
}

/// Lists every role with its environment variable and default.
pub fn print_roles(format: OutputFormat) -> Result<()> {
    print!("{}", render_roles(format)?);
    Ok(())
}

pub fn render_roles(format: OutputFormat) -> Result<String> {
    let list = RoleList {
        roles: Role::ALL
            .into_iter()
            .map(|role| RoleInfo {
                role,
                env_var: role.env_var(),
                default: default_description(role),
            })
            .collect(),
    };

    match format {
        OutputFormat::Plain => {
            let mut out = String::new();
            for info in &list.roles {
                let _ = writeln!(
                    out,
                    "  {} {} {}",
                    Style::label(format!("{:<12}", info.role.name())),
                    Style::secondary(format!("{:<16}", info.env_var)),
                    info.default
                );
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&list).context("Failed to serialize roles")?;
            Ok(json + "\n")
        }
        OutputFormat::Toml => toml::to_string(&list).context("Failed to serialize roles"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_descriptions() {
        assert_eq!(default_description(Role::State), "~/.local/state/<app>");
        assert_eq!(default_description(Role::Runtime), "(none)");
        assert_eq!(
            default_description(Role::DataDirs),
            "/usr/local/share/<app>, /usr/share/<app>"
        );
        assert_eq!(default_description(Role::ConfigDirs), "/etc/xdg/<app>");
    }

    #[test]
    fn test_render_roles_json() {
        let text = render_roles(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["roles"].as_array().unwrap().len(), 7);
        assert_eq!(value["roles"][4]["role"], "runtime");
        assert_eq!(value["roles"][4]["env_var"], "XDG_RUNTIME_DIR");
    }

    #[test]
    fn test_render_roles_toml() {
        let text = render_roles(OutputFormat::Toml).unwrap();
        assert!(text.contains("[[roles]]"));
        assert!(text.contains("env_var = \"XDG_CONFIG_DIRS\""));
    }
}
