// logsift/src/main.rs
//! Logsift entry point.
//!
//! Parses the CLI, initializes logging, and dispatches subcommands. Every
//! fatal condition is caught here and reported as a single error line; the
//! process never surfaces a raw panic or stack trace for an analysis
//! failure.

use clap::Parser;
use log::LevelFilter;

use logsift::cli::{Cli, Commands, ProbeCommand};
use logsift::commands::{analyze, probe};
use logsift::logger;
use logsift::ui::output_format::error_msg;

fn main() {
    let args = Cli::parse();

    let level = if args.debug {
        Some(LevelFilter::Debug)
    } else if args.quiet {
        Some(LevelFilter::Off)
    } else {
        None
    };
    logger::init_logger(level);

    let outcome = match &args.command {
        Commands::Analyze(cmd) => analyze::run_analyze(&cmd.input_file).map(|_| ()),
        Commands::Probe(ProbeCommand::Connectivity) => probe::run_connectivity_probe(),
        Commands::Probe(ProbeCommand::Chat(cmd)) => probe::run_chat_probe(cmd),
    };

    if let Err(e) = outcome {
        error_msg(format!("{e:#}"));
        std::process::exit(1);
    }
}
