mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use log::info;
use shpcode::telemetry::{init_logging, level_for_verbosity};

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(level_for_verbosity(cli.verbose), cli.log_json) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    info!("shpcode v{}", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let code = commands::execute(cli, &mut stdout.lock(), &mut stderr.lock());
    ExitCode::from(code)
}
