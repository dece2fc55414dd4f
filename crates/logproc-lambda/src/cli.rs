//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// FHIR Bridge log processor.
#[derive(Parser, Debug, Clone)]
#[command(name = "logproc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Formatter for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Process a trigger event and print the response.
    Process(ProcessArgs),

    /// Wrap a plain log batch into a trigger event.
    Encode(EncodeArgs),
}

/// Arguments for `process`.
#[derive(clap::Args, Debug, Clone)]
pub struct ProcessArgs {
    /// Trigger event JSON file, or `-` for stdin.
    #[arg(short, long, default_value = "-")]
    pub event: String,

    /// Directory backing the object store.
    #[arg(long, env = "LOGPROC_STORAGE_ROOT", default_value = "./object-store")]
    pub storage_root: PathBuf,
}

/// Arguments for `encode`.
#[derive(clap::Args, Debug, Clone)]
pub struct EncodeArgs {
    /// Decoded batch JSON file, or `-` for stdin.
    #[arg(short, long, default_value = "-")]
    pub batch: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_process() {
        let cli = Cli::try_parse_from([
            "logproc",
            "process",
            "--event",
            "event.json",
            "--storage-root",
            "/tmp/objects",
        ])
        .unwrap();

        assert_eq!(cli.log_format, LogFormat::Text);
        assert!(matches!(
            cli.command,
            Commands::Process(ref args)
                if args.event == "event.json" && args.storage_root == PathBuf::from("/tmp/objects")
        ));
    }

    #[test]
    fn cli_parses_encode_with_json_logs() {
        let cli = Cli::try_parse_from(["logproc", "encode", "--log-format", "json"]).unwrap();

        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(matches!(cli.command, Commands::Encode(ref args) if args.batch == "-"));
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["logproc"]).is_err());
    }

    #[test]
    fn cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
