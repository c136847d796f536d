//! Command implementations for the sitesource CLI
//!
//! Each command is organized into its own module.

use crate::config::SiteConfig;
use crate::shared::DistinctLogger;
use crate::source::SourceSpec;
use anyhow::Result;
use std::path::Path;

pub mod check;
pub mod config;
pub mod languages;
pub mod list;
pub mod version;

/// Load the site configuration honouring `--config`
pub(crate) fn load_config(config_path: Option<&str>) -> Result<SiteConfig> {
    let config = SiteConfig::load_with_custom_config(config_path.map(Path::new))?;
    config.validate()?;
    Ok(config)
}

/// Load configuration and build the source spec; diagnostics land in the returned log
pub(crate) fn load_spec(config_path: Option<&str>) -> Result<(SourceSpec, DistinctLogger)> {
    let config = load_config(config_path)?;
    let log = DistinctLogger::default();
    let spec = SourceSpec::with_os_fs(config, &log);
    Ok((spec, log))
}
