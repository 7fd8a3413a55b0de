//! Fixture runner I/O boundary interfaces
//!
//! Discovery of problem-kind directories and fixture files sits behind the [`FixtureDiscovery`] trait so the
//! runner can be driven from an in-memory listing in tests. [`FilesystemDiscovery`] is the real implementation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Errors that occur while enumerating the fixtures tree.
#[derive(Debug, Error, Diagnostic)]
pub enum DiscoveryError {
    #[error("cannot read fixtures root '{}'", .path.display())]
    #[diagnostic(
        code(leetrun::discovery::root),
        help("pass --root <DIR> pointing at a directory of <problem-kind>/ subdirectories")
    )]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no problem directories found under '{}'", .path.display())]
    #[diagnostic(code(leetrun::discovery::empty_root))]
    NoKinds { path: PathBuf },

    #[error("cannot read '{}'", .path.display())]
    #[diagnostic(code(leetrun::discovery::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ============================================================================
// Fixture Discovery Interface
// ============================================================================

/// Enumerate problem kinds and their fixture files.
pub trait FixtureDiscovery {
    /// Names of the problem-kind subdirectories of `root`, sorted.
    fn discover_kinds(&self, root: &Path) -> Result<Vec<String>, DiscoveryError>;

    /// Files directly inside `kind_dir` whose extension is `extension`, sorted by path.
    fn discover_fixture_files(&self, kind_dir: &Path, extension: &str) -> Result<Vec<PathBuf>, DiscoveryError>;
}

/// Reads the fixtures tree from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemDiscovery;

impl FixtureDiscovery for FilesystemDiscovery {
    fn discover_kinds(&self, root: &Path) -> Result<Vec<String>, DiscoveryError> {
        let entries = fs::read_dir(root).map_err(|source| DiscoveryError::Root {
            path: root.to_path_buf(),
            source,
        })?;

        let mut kinds = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| DiscoveryError::Io {
                path: root.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            kinds.push(name.to_string());
        }

        if kinds.is_empty() {
            return Err(DiscoveryError::NoKinds {
                path: root.to_path_buf(),
            });
        }
        kinds.sort();
        Ok(kinds)
    }

    fn discover_fixture_files(&self, kind_dir: &Path, extension: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
        let entries = fs::read_dir(kind_dir).map_err(|source| DiscoveryError::Io {
            path: kind_dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| DiscoveryError::Io {
                path: kind_dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
