//! Site configuration
//!
//! This module loads the typed site configuration the content-source layer needs.
//! Values are layered with figment: built-in defaults, then the site config file
//! (TOML, JSON or YAML), then `SITESOURCE_*` environment variables.

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub mod languages;
pub mod smart_load;

pub use languages::{Language, LanguageConfig, LanguageRegistry};

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "SITESOURCE_";

/// Config files looked up in the working directory, in priority order
pub const CONFIG_FILE_NAMES: &[&str] = &["site.toml", "site.yaml", "site.yml", "site.json"];

/// Site configuration consumed by the content-source layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Language used when no per-file language is determined
    pub default_content_language: String,

    /// Root directory of the site's content
    pub content_dir: String,

    /// Regex patterns; filenames matching any of them are ignored
    pub ignore_files: Vec<String>,

    /// Configured languages keyed by language id
    pub languages: BTreeMap<String, LanguageConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_content_language: languages::DEFAULT_LANGUAGE.to_string(),
            content_dir: "content".to_string(),
            ignore_files: vec![],
            languages: BTreeMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from the working directory and environment
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    /// Load configuration, using `custom_config` instead of the default file lookup
    pub fn load_with_custom_config(custom_config: Option<&Path>) -> Result<Self> {
        let figment = Self::figment(custom_config)?;

        let config: SiteConfig = figment
            .extract()
            .context("Failed to parse site configuration")?;

        config.check_language_ids()?;
        Ok(config.normalized())
    }

    /// Build the layered figment without extracting it
    pub fn figment(custom_config: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(SiteConfig::default()));

        if let Some(path) = custom_config {
            if !path.is_file() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            tracing::debug!("Using config file {}", path.display());
            figment = figment.merge(smart_load::auto(path));
        } else if let Some(path) = Self::find_config_file(Path::new(".")) {
            tracing::debug!("Found config file {}", path.display());
            figment = figment.merge(smart_load::auto(path));
        } else {
            tracing::debug!("No config file found, using defaults");
        }

        // Environment variables always have highest priority
        Ok(figment.merge(env_provider()))
    }

    /// Find the first known config file in `dir`
    pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Fail if two configured language ids differ only in case or surrounding space
    pub fn check_language_ids(&self) -> Result<()> {
        if let Some((first, second)) = languages::colliding_ids(self.languages.keys()).first() {
            anyhow::bail!(
                "Languages '{}' and '{}' both resolve to language id '{}'",
                first,
                second,
                languages::normalize_lang(first)
            );
        }
        Ok(())
    }

    /// Canonicalize language ids and fill blank values with defaults
    ///
    /// Ids that collide after canonicalization keep the last entry; a warning names both.
    pub fn normalized(mut self) -> Self {
        self.default_content_language = languages::normalize_lang(&self.default_content_language);
        if self.default_content_language.is_empty() {
            self.default_content_language = languages::DEFAULT_LANGUAGE.to_string();
        }

        if self.content_dir.trim().is_empty() {
            self.content_dir = SiteConfig::default().content_dir;
        }

        for (first, second) in languages::colliding_ids(self.languages.keys()) {
            tracing::warn!("Languages '{}' and '{}' collide, keeping '{}'", first, second, second);
        }

        self.languages = std::mem::take(&mut self.languages)
            .into_iter()
            .map(|(lang, config)| (languages::normalize_lang(&lang), config))
            .collect();

        self
    }

    /// Validate configuration
    ///
    /// A default language missing from the configured languages is only a warning;
    /// an empty or colliding language id is an error.
    pub fn validate(&self) -> Result<()> {
        if self.languages.keys().any(|lang| lang.trim().is_empty()) {
            anyhow::bail!("Language ids cannot be empty");
        }

        self.check_language_ids()?;

        if !self.languages.is_empty()
            && !self
                .languages
                .keys()
                .any(|lang| languages::normalize_lang(lang) == self.default_content_language)
        {
            tracing::warn!(
                "defaultContentLanguage '{}' is not one of the configured languages",
                self.default_content_language
            );
        }

        Ok(())
    }
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX)
        .map(|key| match key.as_str().to_ascii_lowercase().as_str() {
            "default_content_language" => "defaultContentLanguage".into(),
            "content_dir" => "contentDir".into(),
            "ignore_files" => "ignoreFiles".into(),
            other => other.to_string().into(),
        })
        .lowercase(false)
}

#[cfg(test)]
mod tests;
