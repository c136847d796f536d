//! List source files
//!
//! Walks a directory (the configured `contentDir` by default) and prints every
//! regular source file. Ignored names prune whole subtrees; symlinks are not
//! followed into, but a link to a regular file is listed.

use crate::cli::Output;
use crate::source::SourceSpec;
use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory to walk (defaults to the configured contentDir)
    pub dir: Option<String>,
}

/// Execute the list command
pub fn execute(args: ListArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let (spec, _log) = super::load_spec(config_path)?;

    let root = args
        .dir
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&spec.config().content_dir));

    if !root.is_dir() {
        anyhow::bail!("Content directory not found: {}", root.display());
    }

    output.verbose(&format!("Walking {}", root.display()));

    let files = collect_source_files(&spec, &root, |path, message| {
        output.warning(&format!("Skipping {}: {}", path.display(), message));
    })
    .with_context(|| format!("Failed to walk {}", root.display()))?;

    for file in &files {
        output.plain(&file.display().to_string());
    }

    tracing::info!("Found {} source file(s) under {}", files.len(), root.display());
    Ok(())
}

/// Collect regular source files under `root`, sorted by path.
///
/// Entries that cannot be read are passed to `on_error` and skipped.
pub fn collect_source_files(
    spec: &SourceSpec,
    root: &Path,
    mut on_error: impl FnMut(&Path, &str),
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !spec.ignore_path(entry.path()));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
                on_error(&path, &e.to_string());
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        match spec.is_regular_source_file(entry.path()) {
            Ok(true) => files.push(entry.into_path()),
            Ok(false) => tracing::debug!("Not a regular source file: {}", entry.path().display()),
            Err(e) => on_error(entry.path(), &e.to_string()),
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::shared::DistinctLogger;
    use std::fs;
    use tempfile::TempDir;

    fn site(root: &Path) -> std::io::Result<()> {
        fs::create_dir_all(root.join("post"))?;
        fs::create_dir_all(root.join(".git"))?;
        fs::create_dir_all(root.join("drafts"))?;
        fs::write(root.join("_index.md"), "home")?;
        fs::write(root.join("post/hello.md"), "hello")?;
        fs::write(root.join("post/hello.md~"), "backup")?;
        fs::write(root.join("post/#hello.md#"), "lock")?;
        fs::write(root.join("post/old.bak"), "old")?;
        fs::write(root.join(".git/config"), "git")?;
        fs::write(root.join("drafts/wip.md"), "wip")?;
        Ok(())
    }

    #[test]
    fn test_collects_only_source_files() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().join("content");
        site(&root)?;

        let log = DistinctLogger::default();
        let config = SiteConfig {
            ignore_files: vec!["\\.bak$".to_string(), "drafts$".to_string()],
            ..Default::default()
        };
        let spec = SourceSpec::with_os_fs(config, &log);

        let mut errors = Vec::new();
        let files = collect_source_files(&spec, &root, |path, _| errors.push(path.to_path_buf()))?;

        let relative: Vec<PathBuf> = files
            .iter()
            .map(|f| f.strip_prefix(&root).map(Path::to_path_buf))
            .collect::<std::result::Result<_, _>>()?;
        assert_eq!(
            relative,
            vec![PathBuf::from("_index.md"), PathBuf::from("post/hello.md")]
        );
        assert!(errors.is_empty());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_links_to_files_listed_links_to_dirs_skipped() -> Result<()> {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().join("content");
        fs::create_dir_all(root.join("section"))?;
        fs::write(root.join("section/page.md"), "page")?;
        symlink(root.join("section/page.md"), root.join("alias.md"))?;
        symlink(root.join("section"), root.join("section-alias"))?;
        symlink(root.join("nowhere.md"), root.join("dangling.md"))?;

        let log = DistinctLogger::default();
        let spec = SourceSpec::with_os_fs(SiteConfig::default(), &log);

        let mut errors = Vec::new();
        let files = collect_source_files(&spec, &root, |path, _| errors.push(path.to_path_buf()))?;

        assert_eq!(files, vec![root.join("alias.md"), root.join("section/page.md")]);
        assert_eq!(errors, vec![root.join("dangling.md")]);
        Ok(())
    }
}
