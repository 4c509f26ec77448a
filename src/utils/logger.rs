use colored::Colorize;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
pub fn init_logger(verbose: bool) {
    // RUST_LOG wins; otherwise warn, or info when verbose
    let default_level = if verbose { "info" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr) // Keep stdout for status lines
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .init();
}

/// Severity of a console status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warning,
    Error,
}

/// Format a status line the way the console shows it
pub fn format_status(status: Status, message: impl std::fmt::Display) -> String {
    let tag = match status {
        Status::Ok => "[OK]".green(),
        Status::Warning => "[WARNING]".yellow(),
        Status::Error => "[ERROR]".red(),
    };
    format!("{} {}", tag, message)
}

/// User-visible status message
pub fn log_status(status: Status, message: impl std::fmt::Display) {
    println!("{}", format_status(status, message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_status_keeps_message() {
        colored::control::set_override(false);
        assert_eq!(
            format_status(Status::Error, "no entry file found"),
            "[ERROR] no entry file found"
        );
        assert_eq!(format_status(Status::Ok, "done"), "[OK] done");
    }
}
