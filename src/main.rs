use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;

use xdg_dirs::cli::commands::{CommandError, create, find, get, roles, show};
use xdg_dirs::cli::{Args, Command};
use xdg_dirs::config::{ConfigManager, ResolveOptions, resolve_format, resolve_settings};
use xdg_dirs::output::{self, OutputConfig};
use xdg_dirs::ui::Style;
use xdg_dirs::{status, warn};

fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });

    if let Err(err) = run(args) {
        let code = exit_code(&err);
        if code == exitcode::UNAVAILABLE {
            status!("{} {err}", Style::warning("Warning:"));
        } else {
            warn!("{} {err:#}", Style::error("Error:"));
        }
        process::exit(code);
    }
}

fn run(args: Args) -> Result<()> {
    let config = ConfigManager::new().load_or_default()?;
    let options = ResolveOptions {
        app: args.app,
        format: args.format,
    };

    match args.command.unwrap_or(Command::Show) {
        Command::Roles => roles::print_roles(resolve_format(&options, &config)),
        Command::Show => show::run_show(&resolve_settings(&options, &config)?),
        Command::Get { role } => get::run_get(&resolve_settings(&options, &config)?, role),
        Command::Create { role } => {
            create::run_create(&resolve_settings(&options, &config)?.app, role)
        }
        Command::Find { role, file } => {
            find::run_find(&resolve_settings(&options, &config)?.app, role, &file)
        }
    }
}

fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    match err.downcast_ref::<CommandError>() {
        Some(CommandError::Unavailable(_)) => exitcode::UNAVAILABLE,
        Some(CommandError::Usage(_)) => exitcode::USAGE,
        None if err.downcast_ref::<io::Error>().is_some() => exitcode::IOERR,
        None => exitcode::CONFIG,
    }
}
