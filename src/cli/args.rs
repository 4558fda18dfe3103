use clap::{Parser, Subcommand};

use crate::config::OutputFormat;
use crate::role::Role;

#[derive(Parser, Debug)]
#[command(name = "xdg-dirs")]
#[command(about = "Resolve XDG base directories for an application")]
#[command(version)]
pub struct Args {
    /// Application name appended to every directory
    #[arg(short = 'a', long, env = "XDG_DIRS_APP", global = true)]
    pub app: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress warnings about unresolvable directories
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every directory for the application (default)
    Show,
    /// Print the directory (or directories) for one role
    Get {
        /// Role to resolve
        #[arg(value_enum)]
        role: Role,
    },
    /// Create the directory for a single-path role
    Create {
        /// Role whose directory to create
        #[arg(value_enum)]
        role: Role,
    },
    /// Find a file along the config or data search path
    Find {
        /// `config` or `data` (the `-dirs` forms are accepted too)
        #[arg(value_enum)]
        role: Role,

        /// File path relative to each directory
        file: String,
    },
    /// List roles and the environment variables that override them
    Roles,
}
