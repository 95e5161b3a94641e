use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use fastdb_core::{BuildError, Verb};
use fastdb_sqlite::Database;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod handlers;
mod help;
mod table;

const MISSING_DB: &str = "a database file must be given first: --db <file>";

#[derive(Debug, Parser)]
#[command(name = "fastdb")]
#[command(about = "Flag-oriented command line for SQLite databases")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Database file to open (created if missing).
    #[arg(long, value_name = "FILE")]
    db: Option<PathBuf>,
    /// Command followed by its arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() {
    init_tracing();

    let code = match run(std::env::args_os()) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {err}");
            help::print_help();
            1
        }
    };
    std::process::exit(code);
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init()
        .ok();
}

/// Parses the command line, opens the database, dispatches the verb and
/// closes the database again, on the error path too.
fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(usage_error)?;
    let path = cli.db.ok_or_else(|| MISSING_DB.to_string())?;

    let db = Database::open(&path).map_err(|e| e.to_string())?;
    let outcome = dispatch(&db, &cli.command);
    let closed = db.close();

    outcome?;
    closed.map_err(|e| format!("failed to close database: {e}"))
}

/// Only `--db` is a flag, so any token after the file lands in `command`.
/// The one clap failure that is not a missing database is a second `--db`
/// standing where the verb belongs.
fn usage_error(err: clap::Error) -> String {
    debug!(error = %err, "argument parsing failed");
    match err.kind() {
        ErrorKind::ArgumentConflict => BuildError::UnknownCommand("--db".to_string()).to_string(),
        _ => MISSING_DB.to_string(),
    }
}

fn dispatch(db: &Database, command: &[String]) -> Result<(), String> {
    let Some((verb, args)) = command.split_first() else {
        help::print_help();
        return Ok(());
    };
    let verb: Verb = verb.parse().map_err(|e: BuildError| e.to_string())?;

    let stdout = io::stdout();
    handlers::run_command(db, verb, args, &mut stdout.lock())
}
