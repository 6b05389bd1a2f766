use crate::app::models::RuntimeConfig;
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Finds the files under one root that should be handed to the formatter.
pub struct Scanner {
    root: PathBuf,
    include_set: GlobSet,
    exclude_set: GlobSet,
}

impl Scanner {
    pub fn new(root: PathBuf, config: &RuntimeConfig) -> Result<Self> {
        Ok(Self {
            root,
            include_set: build_suffix_set(&config.include_suffixes)?,
            exclude_set: build_suffix_set(&config.exclude_suffixes)?,
        })
    }

    /// Walks the whole tree and returns every qualifying file. Order is unspecified.
    ///
    /// Unreadable or vanished directories are skipped, and a missing root just
    /// produces an empty list.
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        // Plain recursive walk: no gitignore, no hidden-file filtering, no symlink following.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .build();

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    log::debug!("Skipping unreadable entry under {:?}: {}", self.root, err);
                    continue;
                }
            };

            if entry.depth() == 0 {
                continue;
            }

            // Anything that is not a directory counts, dangling symlinks included.
            // Symlinks to directories are neither descended into nor returned.
            let path = entry.path();
            if !path.is_dir() && self.qualifies(path) {
                files.push(path.to_path_buf());
            }
        }

        files
    }

    /// Exclusion wins over inclusion, so `x.pb.h` is rejected even though it ends in `.h`.
    pub fn qualifies(&self, path: &Path) -> bool {
        !self.exclude_set.is_match(path) && self.include_set.is_match(path)
    }
}

/// Compiles each suffix into a `*<suffix>` glob. `*` crosses `/` here, so this is a
/// straight "path ends with" test.
fn build_suffix_set(suffixes: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for suffix in suffixes {
        let pattern = format!("*{}", globset::escape(suffix));
        builder.add(Glob::new(&pattern).context(format!("Invalid file suffix: {}", suffix))?);
    }
    builder.build().context("Failed to compile suffix set")
}
