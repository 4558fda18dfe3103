//! Create command handler.

use anyhow::{Context, Result};

use super::CommandError;
use super::get::unresolved_reason;
use crate::paths::{Resolved, Xdg};
use crate::role::Role;
use crate::status;
use crate::ui::Style;

/// Creates the directory for a single-path role and prints its path.
pub fn run_create(app: &str, role: Role) -> Result<()> {
    let dir = match Xdg::new(app).resolve(role) {
        Resolved::Many(_) => {
            return Err(CommandError::Usage(format!(
                "'{role}' is a search path; create one of its directories with 'xdg-dirs get {role}' instead"
            ))
            .into());
        }
        Resolved::Single(dir) if dir.is_empty() => {
            return Err(CommandError::Unavailable(unresolved_reason(role)).into());
        }
        Resolved::Single(dir) => dir,
    };

    if dir.as_path().is_dir() {
        status!("{} {dir}", Style::secondary("Already exists:"));
    } else {
        dir.create()
            .with_context(|| format!("Failed to create directory: {dir}"))?;
        status!("{} {dir}", Style::success("Created:"));
    }

    println!("{dir}");
    Ok(())
}
