//! `logproc` binary entrypoint.
//!
//! Replays trigger events locally against a filesystem object store, with
//! metrics and alerts written to the log stream.

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use logproc_core::{LogBatch, TriggerEvent};
use logproc_lambda::cli::{Cli, Commands, EncodeArgs, LogFormat, ProcessArgs};
use logproc_lambda::{Handler, ProcessorConfig, SinkAdapter};
use logproc_sinks::{FileObjectStore, TracingAlertPublisher, TracingMetricsEmitter};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Process(args) => process(&args),
        Commands::Encode(args) => encode(&args),
    }
}

fn read_input(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(source).with_context(|| format!("failed to read {source}"))
    }
}

fn process(args: &ProcessArgs) -> anyhow::Result<ExitCode> {
    let event: serde_json::Value =
        serde_json::from_str(&read_input(&args.event)?).context("trigger event is not JSON")?;

    let store = FileObjectStore::new(&args.storage_root).with_context(|| {
        format!(
            "failed to open object store at {}",
            args.storage_root.display()
        )
    })?;
    let sinks = SinkAdapter::new(
        Arc::new(store),
        Arc::new(TracingMetricsEmitter::new()),
        Arc::new(TracingAlertPublisher::with_prefix("SECURITY")),
        ProcessorConfig::from_env(),
    );

    let response = Handler::new(sinks).invoke(&event);

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &response)?;
    writeln!(stdout)?;

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn encode(args: &EncodeArgs) -> anyhow::Result<ExitCode> {
    let batch: LogBatch =
        serde_json::from_str(&read_input(&args.batch)?).context("batch is not a valid log batch")?;
    let event = TriggerEvent::from_batch(&batch)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &event)?;
    writeln!(stdout)?;
    Ok(ExitCode::SUCCESS)
}
