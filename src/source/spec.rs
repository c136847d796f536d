use super::fs::{OsFs, SourceFs};
use super::ignore::{IgnoreRules, base_name, is_hidden_or_backup};
use crate::config::{LanguageRegistry, SiteConfig};
use crate::shared::DistinctLogger;
use std::io;
use std::path::Path;

/// Decides which files on disk are source content for a site.
///
/// A `SourceSpec` is immutable once built, so a single instance can be shared
/// by reference between threads as long as its filesystem allows it.
#[derive(Debug)]
pub struct SourceSpec<F = OsFs> {
    config: SiteConfig,
    fs: F,
    ignore_rules: IgnoreRules,
    languages: LanguageRegistry,
}

impl SourceSpec<OsFs> {
    /// Build a spec over the operating system's filesystem
    pub fn with_os_fs(config: SiteConfig, log: &DistinctLogger) -> Self {
        Self::new(config, OsFs, log)
    }
}

impl<F: SourceFs> SourceSpec<F> {
    /// Build a spec from site configuration.
    ///
    /// Invalid `ignoreFiles` patterns are reported through `log` and skipped, so
    /// construction always succeeds.
    pub fn new(config: SiteConfig, fs: F, log: &DistinctLogger) -> Self {
        let languages = LanguageRegistry::from_config(&config);
        let ignore_rules = IgnoreRules::compile(&config.ignore_files, log);

        tracing::debug!(
            "Source spec ready: {} language(s), default '{}', {} ignore rule(s)",
            languages.len(),
            languages.default_lang(),
            ignore_rules.len()
        );

        Self {
            config,
            fs,
            ignore_rules,
            languages,
        }
    }

    /// Whether `filename` should be left out of the site's sources.
    ///
    /// Hidden files, `#` lock files and `~` backups are always ignored. Anything
    /// else is ignored when the full filename matches one of the `ignoreFiles` rules.
    pub fn ignore_file(&self, filename: &str) -> bool {
        if is_hidden_or_backup(base_name(filename)) {
            return true;
        }

        self.ignore_rules.is_match(filename)
    }

    /// [`ignore_file`](Self::ignore_file) for paths; non UTF-8 parts are replaced lossily
    pub fn ignore_path(&self, path: &Path) -> bool {
        self.ignore_file(&path.to_string_lossy())
    }

    /// Whether `path` is a regular source file: neither a directory nor a symlink
    /// that resolves to one.
    ///
    /// Errors from stat or symlink resolution are returned as they are.
    pub fn is_regular_source_file(&self, path: impl AsRef<Path>) -> io::Result<bool> {
        let path = path.as_ref();

        let kind = self.fs.lstat(path)?;
        if kind.is_dir() {
            return Ok(false);
        }

        if kind.is_symlink() {
            let target = self.fs.eval_symlinks(path)?;
            if self.fs.lstat(&target)?.is_dir() {
                tracing::trace!("{} links to directory {}", path.display(), target.display());
                return Ok(false);
            }
        }

        Ok(true)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn languages(&self) -> &LanguageRegistry {
        &self.languages
    }

    pub fn default_content_language(&self) -> &str {
        self.languages.default_lang()
    }

    pub fn ignore_rules(&self) -> &IgnoreRules {
        &self.ignore_rules
    }
}
