//! track-reveal: reveal a racing track point by point
//!
//! ## Usage
//!
//! ```bash
//! track-reveal play                         # Watch in the terminal
//! track-reveal record -o track.gif          # Record until the line settles
//! track-reveal snapshot --frame 2401        # PNG of the finished outline
//! track-reveal inspect --frame 300 --format json
//! track-reveal config > reveal.yaml         # Dump the effective settings
//! ```

use clap::Parser;
use std::process::ExitCode;
use track_reveal_cli::{handlers, logging, Cli, CliConfig, CliResult, Commands, Verbosity};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli);
    logging::init(config.verbosity);

    match cli.command {
        Commands::Config(args) => handlers::execute_config(&config, &args),
        Commands::Play(args) => handlers::execute_play(&config.reveal_config()?, &args),
        Commands::Record(args) => handlers::execute_record(&config.reveal_config()?, &args),
        Commands::Snapshot(args) => handlers::execute_snapshot(&config.reveal_config()?, &args),
        Commands::Inspect(args) => handlers::execute_inspect(&config.reveal_config()?, &args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_config_path(cli.config.clone())
}
