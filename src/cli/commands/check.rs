//! Classify individual paths
//!
//! Prints one line per path: `ignored` when a name rule or `ignoreFiles` pattern
//! matches, `source` for regular source files, `skipped` for directories and links
//! to directories, and `error` when the path cannot be inspected.

use crate::cli::{Output, PathStatus};
use crate::source::SourceSpec;
use crate::source::ignore::{base_name, is_hidden_or_backup};
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Paths to classify
    #[arg(required = true)]
    pub paths: Vec<String>,
}

/// Execute the check command
pub fn execute(args: CheckArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let (spec, _log) = super::load_spec(config_path)?;

    let mut failures = 0;
    for path in &args.paths {
        let (status, detail) = classify(&spec, path);
        if status == PathStatus::Error {
            failures += 1;
        }
        output.path_status(status, path, detail.as_deref());
    }

    if failures > 0 {
        anyhow::bail!("{} path(s) could not be checked", failures);
    }

    Ok(())
}

/// Classification of `path` plus a short explanation where one helps
pub fn classify(spec: &SourceSpec, path: &str) -> (PathStatus, Option<String>) {
    if spec.ignore_file(path) {
        let reason = if is_hidden_or_backup(base_name(path)) {
            "hidden or backup name".to_string()
        } else {
            let rule = spec.ignore_rules().first_match(path).unwrap_or_default();
            format!("matches {:?}", rule)
        };
        return (PathStatus::Ignored, Some(reason));
    }

    match spec.is_regular_source_file(path) {
        Ok(true) => (PathStatus::Source, None),
        Ok(false) => (PathStatus::Skipped, Some("directory".to_string())),
        Err(e) => (PathStatus::Error, Some(e.to_string())),
    }
}
