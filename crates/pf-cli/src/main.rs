use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pf_cli::{Cli, Config, discover, sink};
use pf_core::{EventCategory, MalformedPolicy, load_events, pair_events, report};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    if cli.paths.is_empty() {
        println!("No target file or directory provided. Exiting...");
        return Ok(());
    }

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    let report_name = cli.report_name.unwrap_or(config.report_name);
    let output_dir = cli.output_dir.unwrap_or(config.output_dir);

    let files = discover::resolve_paths(&cli.paths)?;
    tracing::debug!(count = files.len(), "resolved log files");

    let policy = if cli.skip_malformed {
        MalformedPolicy::Skip
    } else {
        MalformedPolicy::Fail
    };
    let events = load_events(&files, &EventCategory::ALL, policy)
        .context("failed to load log events")?;
    let pairs = pair_events(events, EventCategory::Admission, EventCategory::Discharge);

    let text = report::render(&pairs);

    if !cli.no_artifact {
        // A failed artifact write is logged, not fatal: the report still
        // goes to stdout below.
        match sink::write_report(&text, &report_name, &output_dir, Local::now()) {
            Ok(path) => tracing::debug!(path = %path.display(), "report artifact written"),
            Err(err) => tracing::error!(error = %err, "failed to write report artifact"),
        }
    }

    if cli.json {
        let json = report::render_json(&pairs).context("failed to encode JSON report")?;
        println!("{json}");
    } else {
        print!("{text}");
    }
    println!("Total pairs: {}", pairs.len());

    Ok(())
}
