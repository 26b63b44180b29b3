//! Subcommand implementations.
//!
//! Each command writes its result to the given writer and returns the process
//! exit code. `execute` turns failures into `EXIT_ERROR`.

mod generate;
mod track;
mod validate;

use std::io::Write;
use std::path::PathBuf;

use shpcode::config::apply_env_overrides;
use shpcode::{load_config, Config, Database};
use tracing::debug;

use crate::cli::{Cli, Commands};

pub use generate::generate;
pub use track::track;
pub use validate::validate;

pub const EXIT_OK: u8 = 0;
/// `validate` saw at least one malformed code.
pub const EXIT_INVALID: u8 = 1;
/// `track`: the code is well-formed but unknown.
pub const EXIT_NOT_FOUND: u8 = 1;
/// `track`: the query is blank or not a tracking code.
pub const EXIT_BAD_QUERY: u8 = 2;
/// Config, store or I/O failure.
pub const EXIT_ERROR: u8 = 3;

/// Config after file, environment and flag overrides.
pub fn resolve_config(
    config_path: Option<&PathBuf>,
    database: Option<PathBuf>,
) -> anyhow::Result<Config> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    let mut config = apply_env_overrides(config);
    if let Some(path) = database {
        config.database_path = Some(path);
    }
    Ok(config)
}

pub fn open_database(config: &Config) -> shpcode::Result<Database> {
    let path = config.resolved_database_path()?;
    Ok(Database::open(&path)?)
}

pub fn run(cli: Cli, out: &mut dyn Write) -> anyhow::Result<u8> {
    let config = resolve_config(cli.config.as_ref(), cli.database)?;

    match cli.command {
        Commands::Generate(args) => {
            let db = open_database(&config)?;
            generate(&args, &config, &db, out)
        }
        Commands::Track(args) => {
            let db = open_database(&config)?;
            track(&args, &config, &db, out)
        }
        Commands::Validate(args) => validate(&args, out),
    }
}

/// Runs the command and maps any failure to `EXIT_ERROR`, reporting it once on `err`.
pub fn execute(cli: Cli, out: &mut dyn Write, err: &mut dyn Write) -> u8 {
    match run(cli, out) {
        Ok(code) => code,
        Err(e) => {
            debug!(error = ?e, "Command failed");
            let _ = writeln!(err, "Error: {}", e);
            EXIT_ERROR
        }
    }
}
