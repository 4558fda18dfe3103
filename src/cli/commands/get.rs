//! Get command handler.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fmt::Write;

use super::CommandError;
use crate::config::{OutputFormat, Settings};
use crate::paths::{Resolved, Xdg};
use crate::role::Role;

/// Prints the directory (or directories) for one role.
///
/// Plain output is the bare paths, one per line, so it can be used in shell
/// substitutions.
pub fn run_get(settings: &Settings, role: Role) -> Result<()> {
    let resolved = Xdg::new(settings.app.as_str()).resolve(role);
    if resolved.is_empty() {
        return Err(CommandError::Unavailable(unresolved_reason(role)).into());
    }
    print!("{}", render_resolved(role, &resolved, settings.format)?);
    Ok(())
}

/// Renders one role's directories in the requested format.
pub fn render_resolved(role: Role, resolved: &Resolved, format: OutputFormat) -> Result<String> {
    let keyed = BTreeMap::from([(role.name(), resolved)]);
    match format {
        OutputFormat::Plain => {
            let mut out = String::new();
            for dir in resolved.dirs() {
                let _ = writeln!(out, "{dir}");
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&keyed).context("Failed to serialize role")?;
            Ok(json + "\n")
        }
        OutputFormat::Toml => toml::to_string(&keyed).context("Failed to serialize role"),
    }
}

/// Explains why `role` resolved to nothing.
pub fn unresolved_reason(role: Role) -> String {
    let var = role.env_var();
    match role {
        Role::Runtime => format!("{var} is not set; the runtime directory has no default"),
        Role::ConfigDirs | Role::DataDirs => format!("{var} is set but empty"),
        Role::Config | Role::Cache | Role::Data | Role::State => {
            format!("{var} is not set and the home directory could not be determined")
        }
    }
}
