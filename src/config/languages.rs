//! Language registry
//!
//! Sites can be published in several languages. Each configured language carries
//! its own settings, which the content-source layer treats as opaque apart from
//! the few fields it needs to pick a default. When nothing is configured a single
//! synthetic language is created from the site's default content language.

use super::SiteConfig;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Language id used when the site does not name one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Per-language settings as written in the site configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageConfig {
    /// Human readable language name (e.g. "Français")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_name: Option<String>,

    /// Site title override for this language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Sort weight; 0 means "unweighted" and sorts last
    pub weight: i64,

    /// Content directory override for this language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<String>,

    /// Any other keys, kept as-is
    #[serde(flatten)]
    pub params: BTreeMap<String, serde_json::Value>,
}

/// A resolved language entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub lang: String,
    pub language_name: Option<String>,
    pub title: Option<String>,
    pub weight: i64,
    pub content_dir: String,
    pub params: BTreeMap<String, serde_json::Value>,
}

impl Language {
    /// Resolve a configured language against site-wide settings
    pub fn new(lang: &str, config: &LanguageConfig, site: &SiteConfig) -> Self {
        Self {
            lang: normalize_lang(lang),
            language_name: config.language_name.clone(),
            title: config.title.clone(),
            weight: config.weight,
            content_dir: config
                .content_dir
                .clone()
                .unwrap_or_else(|| site.content_dir.clone()),
            params: config.params.clone(),
        }
    }

    /// The synthetic language used when a site configures none
    pub fn new_default(site: &SiteConfig) -> Self {
        let mut lang = normalize_lang(&site.default_content_language);
        if lang.is_empty() {
            lang = DEFAULT_LANGUAGE.to_string();
        }

        Self {
            lang,
            language_name: None,
            title: None,
            weight: 0,
            content_dir: site.content_dir.clone(),
            params: BTreeMap::new(),
        }
    }

    /// Ordering used for language listings: by weight with unweighted (0) last, then by id
    pub fn cmp_by_weight(&self, other: &Self) -> Ordering {
        match (self.weight, other.weight) {
            (a, b) if a == b => self.lang.cmp(&other.lang),
            (0, _) => Ordering::Greater,
            (_, 0) => Ordering::Less,
            (a, b) => a.cmp(&b),
        }
    }
}

/// Language ids are case-insensitive; the canonical form is trimmed lowercase.
pub fn normalize_lang(lang: &str) -> String {
    lang.trim().to_lowercase()
}

/// Pairs of configured ids that normalize to the same language id
pub fn colliding_ids<'a>(ids: impl IntoIterator<Item = &'a String>) -> Vec<(String, String)> {
    let mut seen: BTreeMap<String, &String> = BTreeMap::new();
    let mut collisions = Vec::new();

    for id in ids {
        if let Some(first) = seen.insert(normalize_lang(id), id) {
            collisions.push((first.clone(), id.clone()));
        }
    }

    collisions
}

/// All languages of a site plus the designated default
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageRegistry {
    languages: BTreeMap<String, Language>,
    default_lang: String,
}

impl LanguageRegistry {
    /// Build the registry from site configuration.
    ///
    /// With no configured languages a single default language is synthesized and
    /// becomes the default content language.
    pub fn from_config(site: &SiteConfig) -> Self {
        if site.languages.is_empty() {
            let language = Language::new_default(site);
            let default_lang = language.lang.clone();
            tracing::debug!("No languages configured, using synthetic '{}'", default_lang);

            let mut languages = BTreeMap::new();
            languages.insert(default_lang.clone(), language);
            return Self { languages, default_lang };
        }

        for (first, second) in colliding_ids(site.languages.keys()) {
            tracing::warn!(
                "Languages '{}' and '{}' have the same id, keeping '{}'",
                first,
                second,
                second
            );
        }

        let languages: BTreeMap<String, Language> = site
            .languages
            .iter()
            .map(|(lang, config)| {
                let language = Language::new(lang, config, site);
                (language.lang.clone(), language)
            })
            .collect();

        let mut default_lang = normalize_lang(&site.default_content_language);
        if default_lang.is_empty() {
            default_lang = DEFAULT_LANGUAGE.to_string();
        }

        Self { languages, default_lang }
    }

    /// The default content language id
    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }

    /// The default language entry, if the default id is one of the configured languages
    pub fn default_language(&self) -> Option<&Language> {
        self.languages.get(&self.default_lang)
    }

    pub fn get(&self, lang: &str) -> Option<&Language> {
        self.languages.get(&normalize_lang(lang))
    }

    pub fn contains(&self, lang: &str) -> bool {
        self.get(lang).is_some()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Languages in listing order (see [`Language::cmp_by_weight`])
    pub fn by_weight(&self) -> Vec<&Language> {
        let mut languages: Vec<&Language> = self.languages.values().collect();
        languages.sort_by(|a, b| a.cmp_by_weight(b));
        languages
    }
}
