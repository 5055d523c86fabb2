use std::process::ExitCode;

use clap::Parser;
use etoile_setup::command;
use etoile_setup::runtime::{self, LogLevel, DEFAULT_LOG_LEVEL};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// trace, debug, info, warn, error or off. RUST_LOG overrides
    #[arg(long = "log-level", default_value = DEFAULT_LOG_LEVEL)]
    log_level: LogLevel,

    #[command(flatten)]
    setup: command::SetupCMD,
}

fn main() -> ExitCode {
    let mut cli = Cli::parse();
    runtime::setup_global_logger(cli.log_level);

    if let Err(e) = cli.setup.try_execute() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    return ExitCode::SUCCESS;
}
