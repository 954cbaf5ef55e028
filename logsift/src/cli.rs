// logsift/src/cli.rs
//! This file defines the command-line interface (CLI) for the logsift
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "logsift",
    author = "Logsift Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyze logcat captures for error patterns",
    long_about = "Logsift is a command-line utility for analyzing logcat JSON captures. It isolates error-severity records, aggregates them by tag and by originating process, and flags critical errors by message content, producing a ranked human-readable report on standard output.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the 'logsift' crates to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `logsift` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyzes a logcat capture file and prints the error report.
    #[command(about = "Analyzes a logcat capture file and prints the error report.")]
    Analyze(AnalyzeCommand),

    /// Network diagnostics for the AI gateway consumed by the capturing app.
    #[command(subcommand, about = "Runs connectivity diagnostics against the AI gateway.")]
    Probe(ProbeCommand),
}

/// Arguments for the `analyze` command.
#[derive(Parser, Debug)]
pub struct AnalyzeCommand {
    /// Path to the logcat JSON capture file.
    #[arg(value_name = "FILE", help = "Path to the logcat JSON capture file.")]
    pub input_file: PathBuf,
}

/// Subcommands for the `probe` command.
#[derive(Subcommand, Debug)]
pub enum ProbeCommand {
    /// Checks reachability of a fixed set of well-known endpoints.
    #[command(about = "Checks reachability of well-known endpoints.")]
    Connectivity,

    /// Sends a minimal one-shot chat completion to the configured gateway.
    #[command(about = "Sends a one-shot chat completion to the configured gateway.")]
    Chat(ChatProbeCommand),
}

/// Arguments for the `probe chat` command.
#[derive(Parser, Debug)]
pub struct ChatProbeCommand {
    /// Base URL of the chat-completion gateway.
    #[arg(
        long = "base-url",
        value_name = "URL",
        env = "LOGSIFT_BASE_URL",
        default_value = "https://ark.cn-beijing.volces.com/api/v3/",
        help = "Base URL of the chat-completion gateway."
    )]
    pub base_url: String,

    /// Bearer credential for the gateway.
    #[arg(
        long = "api-key",
        value_name = "KEY",
        env = "LOGSIFT_API_KEY",
        help = "Bearer credential; the Authorization header is omitted when unset."
    )]
    pub api_key: Option<String>,

    /// Model identifier sent in the request payload.
    #[arg(
        long = "model",
        value_name = "MODEL",
        env = "LOGSIFT_MODEL",
        default_value = "gpt-4o",
        help = "Model identifier sent in the request payload."
    )]
    pub model: String,
}
