use anyhow::{Context, Result};
use clap::Parser;

use unity_merger::{
    app::{load_config, load_config_file},
    cli::Cli,
    merge::{MergeOutcome, MergeReport, Merger},
    utils::{init_logger, log_status, Status},
};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_logger(cli.verbose);

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        load_config_file(config_path)?
    } else {
        load_config()?
    };

    let root = std::env::current_dir().context("Could not determine working directory")?;
    let merger = Merger::new(root, config)?;

    // Every outcome is reported on the console; the exit code stays 0
    match merger.run() {
        Ok(MergeOutcome::NoEntry) => {
            let entry = &merger.config().entry;
            log_status(
                Status::Error,
                format!(
                    "no entry file found (expected {} or {})",
                    entry.c_entry, entry.cpp_entry
                ),
            );
        }
        Ok(MergeOutcome::Merged(report)) => report_merge(&report),
        Err(e) => log_status(Status::Error, e),
    }

    Ok(())
}

/// Print the summary of a finished merge
fn report_merge(report: &MergeReport) {
    for cycle in &report.cycles {
        log_status(
            Status::Warning,
            format!(
                "include cycle broken: {} -> {}",
                cycle.from.as_deref().unwrap_or("entry file"),
                cycle.to
            ),
        );
    }

    if report.entry_duplicated {
        log_status(
            Status::Warning,
            format!(
                "{} was merged twice: it is also the source of a local header",
                report.entry.display()
            ),
        );
    }

    let output_name = report
        .output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.output.display().to_string());

    log_status(
        Status::Ok,
        format!(
            "{} project merged into {} ({} system includes, {} headers, {} sources)",
            report.language,
            output_name,
            report.angle_includes.len(),
            report.headers.len(),
            report.sources.len()
        ),
    );
}
