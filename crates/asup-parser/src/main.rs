//! `asupparser`: extract host configuration data from ASUP bundles.
//!
//! Stages each bundle's primary archive, parses every host-info log inside
//! it, and writes the deduplicated host-info and multipath CSV tables.

use std::fs::OpenOptions;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use asup_parser::cli::Cli;
use asup_parser::config::ParserConfig;
use asup_parser::decompress::ExternalDecompressor;
use asup_parser::pipeline;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load config ─────────────────────────────────────────────
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("asupparser: invalid configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(&config) {
        eprintln!("asupparser: cannot open log file: {e:#}");
        return ExitCode::FAILURE;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bundles = config.asup_folders.len(),
        "asupparser starting"
    );

    // ── Run ─────────────────────────────────────────────────────
    let decompressor = ExternalDecompressor::new(config.decompress_timeout());
    match pipeline::run(&config, &decompressor).await {
        Ok(summary) => {
            tracing::info!(
                run_id = %summary.run_id,
                bundles_skipped = summary.bundles_skipped,
                "asupparser finished"
            );
            println!(
                "Successfully completed parsing host configuration data, result copied as {} and {}",
                config.output_csv.display(),
                config.multipath_csv.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "asupparser failed");
            ExitCode::FAILURE
        }
    }
}

/// Install the global subscriber: `RUST_LOG` filter (default `info`),
/// human-readable or JSON, to stderr or the configured log file.
fn init_tracing(config: &ParserConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let writer = match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.log_file.is_none())
        .with_writer(writer);
    if config.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}
