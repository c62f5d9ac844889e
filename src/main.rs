//! `dotfile-manager` binary entry point.
use std::process::ExitCode;

use dotfile_manager::cli::{self, ParsedCommand};
use dotfile_manager::commands;
use dotfile_manager::logging::{self, Logger};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();

    let args = match cli::parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if args.command == ParsedCommand::Version {
        #[allow(clippy::print_stdout)]
        {
            println!("dotfile-manager {}", cli::VERSION);
        }
        return ExitCode::SUCCESS;
    }

    logging::init_subscriber(args.verbose, args.command.name());
    let log = Logger::new(args.command.name());

    let result = match &args.command {
        ParsedCommand::Run { config, dry_run } => commands::run::run(config, *dry_run, &log),
        ParsedCommand::Validate { config } => commands::validate::run(config, &log),
        ParsedCommand::Unknown { name } => Err(anyhow::anyhow!("unknown subcommand '{name}'")),
        ParsedCommand::Version => Ok(()),
    };

    log.print_log_location();
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
