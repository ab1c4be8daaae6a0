use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("source directory {0:?} does not exist or is not a directory")]
    SourceInvalid(PathBuf),

    #[error("unable to create destination directory {path:?}")]
    DestinationUncreatable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to read directory {path:?}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to write {path:?}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// An entry that failed to copy without failing the overall call.
#[derive(Debug)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: io::Error,
}

/// Outcome of a completed copy. Individual files may still have been
/// skipped; the skipped list says which ones and why.
#[derive(Debug, Default)]
pub struct CopySummary {
    pub skipped: Vec<SkippedEntry>,
}

/// True iff `path` exists, is a directory, and has at least one entry.
pub fn validate_dir(path: &Path) -> bool {
    path.is_dir()
        && fs::read_dir(path)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false)
}

/// Recursively copies `source` into `dest`, creating `dest` if needed.
///
/// A failed subdirectory aborts the whole call: the structural problem
/// would recur for everything beneath it. A failed individual file does
/// not: it is logged, recorded in the summary, and the rest of the tree
/// is still copied.
pub fn copy_tree(source: &Path, dest: &Path) -> Result<CopySummary, CopyError> {
    if !source.is_dir() {
        return Err(CopyError::SourceInvalid(source.to_path_buf()));
    }
    if !validate_dir(dest) {
        // Single-level create; the parent must already exist.
        if let Err(err) = fs::create_dir(dest) {
            warn!("unable to create destination directory {:?}: {}", dest, err);
            return Err(CopyError::DestinationUncreatable {
                path: dest.to_path_buf(),
                source: err,
            });
        }
    }

    let entries = fs::read_dir(source).map_err(|err| CopyError::ReadDir {
        path: source.to_path_buf(),
        source: err,
    })?;

    let mut summary = CopySummary::default();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(reason) => {
                warn!("skipping unreadable entry in {:?}: {}", source, reason);
                summary.skipped.push(SkippedEntry {
                    path: source.to_path_buf(),
                    reason,
                });
                continue;
            }
        };

        let current = entry.path();
        let target = dest.join(entry.file_name());
        if current.is_dir() {
            let child = copy_tree(&current, &target)?;
            summary.skipped.extend(child.skipped);
        } else if let Err(reason) = fs::copy(&current, &target) {
            warn!("skipping {:?}: {}", current, reason);
            summary.skipped.push(SkippedEntry {
                path: current,
                reason,
            });
        }
    }
    Ok(summary)
}

/// Writes a set of (relative name, content) pairs under `dest`, creating
/// `dest` as a single new directory first. Unlike `copy_tree`, any write
/// failure aborts: a half-written scaffold is worse than none.
pub fn write_files(dest: &Path, files: &[(&str, String)]) -> Result<(), CopyError> {
    if let Err(err) = fs::create_dir(dest) {
        return Err(CopyError::DestinationUncreatable {
            path: dest.to_path_buf(),
            source: err,
        });
    }
    for (name, content) in files {
        let path = dest.join(name);
        fs::write(&path, content).map_err(|err| CopyError::WriteFile {
            path,
            source: err,
        })?;
    }
    Ok(())
}
