//! Command-line interface definitions and argument parsing.
use std::ffi::OsString;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;

/// Version string shown by `--version`, the `version` subcommand, and the log
/// header: the build-time `DOTFILE_MANAGER_VERSION`, else the package version.
pub const VERSION: &str = match option_env!("DOTFILE_MANAGER_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Top-level CLI entry point for the dotfile manager.
#[derive(Parser, Debug)]
#[command(
    name = "dotfile-manager",
    about = "Copy dotfiles into place as described by a YAML config",
    version = VERSION
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the config, then copy every entry into place
    Run(RunOpts),
    /// Check that the config is well formed without copying anything
    Validate(ConfigOpts),
    /// Print version information
    Version,
    /// Any other subcommand name; reported as an error.
    #[command(external_subcommand)]
    External(Vec<String>),
}

/// Options selecting the configuration file.
#[derive(Parser, Debug, Clone)]
pub struct ConfigOpts {
    /// Path to the YAML config (`~` is expanded)
    #[arg(
        short,
        long,
        env = "DOTFILE_MANAGER_CONFIG",
        default_value = DEFAULT_CONFIG_PATH
    )]
    pub config: String,
}

/// Options for the `run` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct RunOpts {
    /// Config file selection.
    #[command(flatten)]
    pub config: ConfigOpts,

    /// Preview the copies without writing anything
    #[arg(short = 'd', long)]
    pub dry_run: bool,
}

/// What the user asked for, with all clap specifics stripped away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// Load, validate, and execute the config at `config`.
    Run {
        /// Unresolved config path.
        config: String,
        /// Only report what would be copied.
        dry_run: bool,
    },
    /// Load and validate the config at `config`.
    Validate {
        /// Unresolved config path.
        config: String,
    },
    /// Print the version.
    Version,
    /// An unrecognised subcommand.
    Unknown {
        /// The subcommand as typed.
        name: String,
    },
}

impl ParsedCommand {
    /// Short name used for the per-command log file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Run { .. } => "run",
            Self::Validate { .. } => "validate",
            Self::Version => "version",
            Self::Unknown { .. } => "unknown",
        }
    }
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    /// `--verbose` was given.
    pub verbose: bool,
    /// The selected command.
    pub command: ParsedCommand,
}

impl From<Cli> for ParsedArgs {
    fn from(cli: Cli) -> Self {
        let command = match cli.command {
            Command::Run(opts) => ParsedCommand::Run {
                config: opts.config.config,
                dry_run: opts.dry_run,
            },
            Command::Validate(opts) => ParsedCommand::Validate {
                config: opts.config,
            },
            Command::Version => ParsedCommand::Version,
            Command::External(args) => ParsedCommand::Unknown {
                name: args.into_iter().next().unwrap_or_default(),
            },
        };
        Self {
            verbose: cli.verbose,
            command,
        }
    }
}

/// Parse `argv` (including the program name) into a [`ParsedArgs`].
///
/// # Errors
///
/// Returns the [`clap::Error`] for malformed arguments, and for `--help` /
/// `--version` (whose [`clap::Error::use_stderr`] is `false`).
pub fn parse_args<I, T>(argv: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(argv).map(ParsedArgs::from)
}
