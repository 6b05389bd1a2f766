use crate::app::models::{FileReport, FormatOutcome};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

#[derive(Debug, Error)]
enum InvokeError {
    #[error("Failed to start {executable:?} on {path:?}: {source}")]
    Spawn {
        executable: PathBuf,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Formatter exited unsuccessfully on {path:?} (status {code:?})")]
    Exit { path: PathBuf, code: Option<i32> },
}

impl From<InvokeError> for FormatOutcome {
    fn from(err: InvokeError) -> Self {
        match err {
            InvokeError::Spawn { source, .. } => FormatOutcome::SpawnFailed {
                reason: source.to_string(),
            },
            InvokeError::Exit { code, .. } => FormatOutcome::Failed { code },
        }
    }
}

/// Runs an external clang-format compatible executable over files in place.
pub struct Formatter {
    executable: PathBuf,
}

impl Formatter {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Formats one file with `<executable> -i <path> --style=file`, blocking until it exits.
    pub fn format_file(&self, path: &Path) -> FormatOutcome {
        match self.invoke(path) {
            Ok(()) => FormatOutcome::Formatted,
            Err(err) => {
                log::debug!("{}", err);
                err.into()
            }
        }
    }

    fn invoke(&self, path: &Path) -> Result<(), InvokeError> {
        let status = Command::new(&self.executable)
            .arg("-i")
            .arg(path)
            .arg("--style=file")
            .status()
            .map_err(|source| InvokeError::Spawn {
                executable: self.executable.clone(),
                path: path.to_path_buf(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(InvokeError::Exit {
                path: path.to_path_buf(),
                code: status.code(),
            })
        }
    }

    /// Formats each file in turn. One failure never stops the rest.
    ///
    /// With `verbose`, a start and a completion notice for every file go to `out`.
    pub fn format_all<W: Write>(
        &self,
        files: &[PathBuf],
        verbose: bool,
        out: &mut W,
    ) -> Vec<FileReport> {
        files
            .iter()
            .map(|path| {
                if verbose {
                    notice(out, format_args!("Formatting: {}", path.display()));
                }
                let outcome = self.format_file(path);
                if verbose {
                    notice(out, format_args!("Formatted: {}", path.display()));
                }
                FileReport {
                    path: path.clone(),
                    outcome,
                }
            })
            .collect()
    }
}

fn notice<W: Write>(out: &mut W, line: std::fmt::Arguments<'_>) {
    if let Err(err) = writeln!(out, "{}", line) {
        log::debug!("Failed to write progress notice: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_invokes_nothing() {
        // Would report SpawnFailed if it were ever called.
        let formatter = Formatter::new("/nonexistent/clang-format");
        let mut out = Vec::new();
        assert!(formatter.format_all(&[], true, &mut out).is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn missing_executable_does_not_stop_the_batch() {
        let formatter = Formatter::new("/nonexistent/clang-format");
        let files = vec![PathBuf::from("a.cpp"), PathBuf::from("b.cpp")];

        let reports = formatter.format_all(&files, false, &mut std::io::sink());

        assert_eq!(reports.len(), 2);
        for (report, file) in reports.iter().zip(&files) {
            assert_eq!(&report.path, file);
            assert!(matches!(report.outcome, FormatOutcome::SpawnFailed { .. }));
        }
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_is_captured() {
        let ok = Formatter::new("true");
        assert_eq!(ok.format_file(Path::new("a.cpp")), FormatOutcome::Formatted);

        let failing = Formatter::new("false");
        assert_eq!(
            failing.format_file(Path::new("a.cpp")),
            FormatOutcome::Failed { code: Some(1) }
        );
    }

    #[cfg(unix)]
    #[test]
    fn verbose_notices_bracket_each_file() {
        let formatter = Formatter::new("true");
        let files = vec![PathBuf::from("src/a.cpp"), PathBuf::from("src/b.h")];
        let mut out = Vec::new();

        formatter.format_all(&files, true, &mut out);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Formatting: src/a.cpp\nFormatted: src/a.cpp\nFormatting: src/b.h\nFormatted: src/b.h\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn quiet_mode_prints_nothing() {
        let formatter = Formatter::new("true");
        let mut out = Vec::new();

        let reports = formatter.format_all(&[PathBuf::from("src/a.cpp")], false, &mut out);

        assert_eq!(reports.len(), 1);
        assert!(out.is_empty());
    }
}
