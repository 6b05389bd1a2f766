use crate::app::cli::Cli;
use crate::app::models::RuntimeConfig;
use std::path::PathBuf;

const ROOTS: &[&str] = &["src", "example"];
const EXECUTABLE: &str = "/usr/bin/clang-format";
const INCLUDE_SUFFIXES: &[&str] = &[".c", ".cpp", ".cc", ".h", ".hpp", ".tpp"];
// Generated protobuf headers.
const EXCLUDE_SUFFIXES: &[&str] = &[".pb.h"];

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            roots: ROOTS.iter().map(PathBuf::from).collect(),
            executable: PathBuf::from(EXECUTABLE),
            include_suffixes: to_strings(INCLUDE_SUFFIXES),
            exclude_suffixes: to_strings(EXCLUDE_SUFFIXES),
            verbose: false,
        }
    }
}

/// Layers CLI flags over the built-in defaults.
pub fn resolve_config(cli: Cli) -> RuntimeConfig {
    RuntimeConfig {
        verbose: cli.verbose,
        ..RuntimeConfig::default()
    }
}
