//! Show the language registry

use crate::cli::Output;
use anyhow::Result;

/// Execute the languages command
pub fn execute(config_path: Option<&str>, output: &Output) -> Result<()> {
    let (spec, _log) = super::load_spec(config_path)?;
    let registry = spec.languages();

    for language in registry.by_weight() {
        let is_default = language.lang == registry.default_lang();
        let marker = if is_default { "*" } else { " " };
        let name = language.language_name.as_deref().unwrap_or("");
        let line = format!(
            "{} {:<8} weight={:<3} contentDir={} {}",
            marker, language.lang, language.weight, language.content_dir, name
        );
        output.plain(line.trim_end());
    }

    if registry.default_language().is_none() {
        output.warning(&format!(
            "Default language '{}' is not configured",
            registry.default_lang()
        ));
    }

    output.count("🌐", "Languages", registry.len());
    Ok(())
}
