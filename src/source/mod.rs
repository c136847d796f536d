//! Content source filtering
//!
//! Decides which files under a site's content directory are processed: names
//! that are hidden, backups or match `ignoreFiles` are skipped, and only regular
//! files (or symlinks to them) count as sources.

pub mod fs;
pub mod ignore;
pub mod spec;

pub use fs::{FileKind, OsFs, SourceFs};
pub use ignore::IgnoreRules;
pub use spec::SourceSpec;
