//! Find command handler.

use anyhow::Result;

use super::CommandError;
use crate::paths::Xdg;
use crate::role::Role;

/// Prints the first existing `<dir>/<file>` along the role's search path.
///
/// The user directory is searched before the system directories.
pub fn run_find(app: &str, role: Role, file: &str) -> Result<()> {
    let search = role.search_role().ok_or_else(|| {
        CommandError::Usage(format!(
            "'{role}' has no search path; use config, config-dirs, data or data-dirs"
        ))
    })?;

    let found = Xdg::new(app).find(search, file).ok_or_else(|| {
        CommandError::Unavailable(format!("'{file}' not found in the {role} search path"))
    })?;

    println!("{found}");
    Ok(())
}
