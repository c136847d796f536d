//! Filesystem collaborator
//!
//! The filter only needs two primitives from the filesystem: a stat that does not
//! follow symlinks, and full symlink resolution. Keeping them behind a trait lets
//! callers plug in the real filesystem or a test double.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Kind of a filesystem entry as seen by a non-following stat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Dir,
    Symlink,
    /// Sockets, fifos, devices
    Other,
}

impl FileKind {
    pub fn is_dir(self) -> bool {
        self == FileKind::Dir
    }

    pub fn is_symlink(self) -> bool {
        self == FileKind::Symlink
    }
}

impl From<fs::FileType> for FileKind {
    fn from(file_type: fs::FileType) -> Self {
        if file_type.is_symlink() {
            FileKind::Symlink
        } else if file_type.is_dir() {
            FileKind::Dir
        } else if file_type.is_file() {
            FileKind::File
        } else {
            FileKind::Other
        }
    }
}

/// Filesystem operations needed to classify source files
pub trait SourceFs {
    /// Stat `path` without following a trailing symlink
    fn lstat(&self, path: &Path) -> io::Result<FileKind>;

    /// Resolve every symlink in `path` and return the final target
    fn eval_symlinks(&self, path: &Path) -> io::Result<PathBuf>;
}

/// The operating system's filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl SourceFs for OsFs {
    fn lstat(&self, path: &Path) -> io::Result<FileKind> {
        fs::symlink_metadata(path).map(|metadata| metadata.file_type().into())
    }

    fn eval_symlinks(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }
}
