// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::Path;
use std::thread;

use self::cli::Cli;
use self::config::resolve_config;
use self::formatter::Formatter;
use self::models::{RootReport, RuntimeConfig};
use self::scanner::Scanner;

/// Parses arguments, formats every root and logs a summary.
///
/// Formatter failures are reported but never turn into an error here.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration
    let config = resolve_config(args);

    // 3. Scan & Format every root in parallel
    let reports = format_roots(&config);

    // 4. Summarize
    for report in &reports {
        log::info!(
            "{}: {} file(s) formatted, {} failed",
            report.root.display(),
            report.formatted(),
            report.failed()
        );
        if report.failed() > 0 {
            log::warn!(
                "⚠️ {} of {} file(s) under {} could not be formatted",
                report.failed(),
                report.files.len(),
                report.root.display()
            );
        }
        for file in report.files.iter().filter(|f| !f.outcome.is_success()) {
            log::warn!("{}: {}", file.path.display(), file.outcome);
        }
    }

    Ok(())
}

/// Scans and formats each root on its own thread, returning once all of them finish.
///
/// Reports come back in the same order as `config.roots`.
pub fn format_roots(config: &RuntimeConfig) -> Vec<RootReport> {
    thread::scope(|s| {
        let handles: Vec<_> = config
            .roots
            .iter()
            .map(|root| (root, s.spawn(move || format_root(root, config))))
            .collect();

        handles
            .into_iter()
            .map(|(root, handle)| {
                handle.join().unwrap_or_else(|_| {
                    log::error!("Worker for {} panicked", root.display());
                    RootReport {
                        root: root.clone(),
                        files: Vec::new(),
                    }
                })
            })
            .collect()
    })
}

fn format_root(root: &Path, config: &RuntimeConfig) -> RootReport {
    let files = match Scanner::new(root.to_path_buf(), config) {
        Ok(scanner) => scanner.scan(),
        Err(err) => {
            log::error!("Cannot scan {}: {:#}", root.display(), err);
            Vec::new()
        }
    };
    log::debug!("{}: {} file(s) to format", root.display(), files.len());

    let formatter = Formatter::new(&config.executable);
    RootReport {
        root: root.to_path_buf(),
        files: formatter.format_all(&files, config.verbose, &mut io::stdout()),
    }
}
