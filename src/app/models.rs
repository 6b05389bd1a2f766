use std::fmt;
use std::path::PathBuf;

/// Immutable settings shared by every worker thread.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub roots: Vec<PathBuf>,
    pub executable: PathBuf,
    pub include_suffixes: Vec<String>,
    pub exclude_suffixes: Vec<String>,
    pub verbose: bool,
}

/// Result of running the formatter on a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    Formatted,
    /// The process ran but exited unsuccessfully. `None` means it was killed by a signal.
    Failed { code: Option<i32> },
    /// The process could not be started at all.
    SpawnFailed { reason: String },
}

impl FormatOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FormatOutcome::Formatted)
    }
}

impl fmt::Display for FormatOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatOutcome::Formatted => write!(f, "formatted"),
            FormatOutcome::Failed { code: Some(code) } => write!(f, "exited with status {}", code),
            FormatOutcome::Failed { code: None } => write!(f, "terminated by signal"),
            FormatOutcome::SpawnFailed { reason } => write!(f, "could not start: {}", reason),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FormatOutcome,
}

/// Everything that happened under one root directory.
#[derive(Debug, Clone)]
pub struct RootReport {
    pub root: PathBuf,
    pub files: Vec<FileReport>,
}

impl RootReport {
    pub fn formatted(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.formatted()
    }
}
