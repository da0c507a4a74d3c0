//! `scribe`: create article stubs with front matter.
//!
//! `main` parses arguments and installs logging, then [`run`] loads the
//! configuration and hands off to a command. Every failure after parsing is
//! a [`CliError`] and leaves through [`report`].
//!
//! ## Exit codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success                                   |
//! |  1   | Filesystem, entropy or other system error |
//! |  2   | User / input error                        |
//! |  4   | Configuration error                       |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, NewArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too, on stdout with status 0.
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    let verbose = cli.global.verbose > 0;
    match run(cli) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => report(&e, verbose),
    }
}

/// Load configuration and run the requested command, `new` by default.
#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<()> {
    let Cli { global, command } = cli;
    debug!(?command, config = ?global.config, "Dispatching");

    let config = AppConfig::load(global.config.as_deref())?;
    let output = OutputManager::new(&global, &config);

    match command.unwrap_or_else(|| Commands::New(NewArgs::default())) {
        Commands::New(args) => commands::new::execute(args, config, output),
        Commands::Init(args) => commands::init::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// Log `err`, print it with suggestions on stderr, and map it to an exit code.
fn report(err: &CliError, verbose: bool) -> ExitCode {
    err.log();

    let msg = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
