//! eventcal CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use eventcal_cli::cli::{Cli, Command, ConfigAction, EmailKind};
use eventcal_cli::commands;
use eventcal_cli::config::AppConfig;
use eventcal_cli::error::CliResult;
use eventcal_cli::logging;
use eventcal_mail::MailComposer;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.debug, cli.log_format) {
        eprintln!("warning: {}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    match cli.command {
        Command::Ics {
            input,
            output,
            base64,
        } => commands::ics::run(&config.calendar, &input, output.as_deref(), base64),
        Command::Email { kind } => {
            let composer = MailComposer::new(config.mail, config.calendar);
            match kind {
                EmailKind::Confirmation { input } => {
                    commands::email::confirmation(&composer, &input)
                }
                EmailKind::Reminder { input } => commands::email::reminder(&composer, &input),
            }
        }
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(&config, cli.config.as_deref()),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(cli.config.as_deref()),
        },
    }
}
