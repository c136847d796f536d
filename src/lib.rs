//! # sitesource
//!
//! The content-source layer of a static site generator: decides which files on
//! disk are processed as site content.
//!
//! - [`SourceSpec::ignore_file`] skips hidden files, editor lock files, backups
//!   and anything matching the site's `ignoreFiles` regexes.
//! - [`SourceSpec::is_regular_source_file`] accepts regular files and symlinks to
//!   them, and rejects directories.
//!
//! ```no_run
//! use sitesource::{DistinctLogger, SiteConfig, SourceSpec};
//!
//! let config = SiteConfig::load()?;
//! let log = DistinctLogger::default();
//! let spec = SourceSpec::with_os_fs(config, &log);
//!
//! if !spec.ignore_file("content/post/hello.md") {
//!     let is_source = spec.is_regular_source_file("content/post/hello.md")?;
//!     println!("source: {is_source}");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod shared;
pub mod source;

pub use cli::Cli;
pub use config::{LanguageRegistry, SiteConfig};
pub use shared::DistinctLogger;
pub use source::SourceSpec;

/// Result type alias for sitesource operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
