//! Ignore rules for source filenames
//!
//! Two layers decide whether a filename is ignored:
//! - built-in name rules on the final path segment (hidden files, `#` editor lock
//!   files, `~` backup files), checked first because they are cheap;
//! - user-configured regexes from `ignoreFiles`, matched against the full filename.

use crate::shared::DistinctLogger;
use regex::Regex;
use std::path::{MAIN_SEPARATOR_STR, is_separator};

/// Compiled `ignoreFiles` patterns, in configuration order
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    rules: Vec<Regex>,
}

impl IgnoreRules {
    /// Compile patterns, dropping the ones that are not valid regexes.
    ///
    /// Every invalid pattern is reported once through `log`; compilation itself never fails.
    pub fn compile<S: AsRef<str>>(patterns: &[S], log: &DistinctLogger) -> Self {
        let mut rules = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let pattern = pattern.as_ref();
            match Regex::new(pattern) {
                Ok(regex) => rules.push(regex),
                Err(e) => {
                    log.log(format!("Invalid regexp {:?} in ignoreFiles: {}", pattern, e));
                }
            }
        }

        tracing::debug!("Compiled {} of {} ignoreFiles patterns", rules.len(), patterns.len());
        Self { rules }
    }

    /// Whether `filename` matches any rule
    pub fn is_match(&self, filename: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_match(filename))
    }

    /// The first rule matching `filename`
    pub fn first_match(&self, filename: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.is_match(filename))
            .map(Regex::as_str)
    }

    /// Source text of the compiled patterns
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Regex::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Final segment of `path`.
///
/// Trailing separators are dropped. An empty path yields `"."`, a path made only of
/// separators yields the root separator.
pub fn base_name(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }

    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        return MAIN_SEPARATOR_STR;
    }

    match trimmed.rfind(is_separator) {
        Some(index) => &trimmed[index + 1..],
        None => trimmed,
    }
}

/// Hidden (`.x`), lock (`#x`) or backup (`x~`) names
pub fn is_hidden_or_backup(base: &str) -> bool {
    base.starts_with('.') || base.starts_with('#') || base.ends_with('~')
}
