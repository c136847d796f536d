//! Configuration command implementations
//!
//! Show the resolved site configuration or validate it, including the
//! `ignoreFiles` patterns.

use crate::cli::{ConfigCommands, Output};
use crate::config::SiteConfig;
use anyhow::{Context, Result};
use serde_json::Value;

/// Execute config commands
pub fn execute(cmd: ConfigCommands, config_path: Option<&str>, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show { format } => show(&format, config_path, output),
        ConfigCommands::Validate => validate(config_path, output),
    }
}

fn show(format: &str, config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = super::load_config(config_path)?;
    output.plain(render(&config, format)?.trim_end());
    Ok(())
}

/// Serialize the configuration in one of the supported formats
pub fn render(config: &SiteConfig, format: &str) -> Result<String> {
    match format.to_lowercase().as_str() {
        "toml" => {
            // TOML has no null; free-form language params may carry one
            let mut value = serde_json::to_value(config).context("Failed to serialize configuration")?;
            strip_nulls(&mut value);
            toml::to_string_pretty(&value).context("Failed to serialize configuration as TOML")
        }
        "json" => serde_json::to_string_pretty(config).context("Failed to serialize configuration as JSON"),
        "yaml" | "yml" => serde_yml::to_string(config).context("Failed to serialize configuration as YAML"),
        other => anyhow::bail!("Unsupported format '{}' (expected toml, json or yaml)", other),
    }
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            for v in map.values_mut() {
                strip_nulls(v);
            }
        }
        Value::Array(items) => {
            items.retain(|v| !v.is_null());
            for item in items.iter_mut() {
                strip_nulls(item);
            }
        }
        _ => {}
    }
}

fn validate(config_path: Option<&str>, output: &Output) -> Result<()> {
    output.header("Validating Configuration");

    let (spec, log) = super::load_spec(config_path)?;
    let config = spec.config();

    output.key_value("Default language:", spec.default_content_language(), true);
    output.key_value("Languages:", &spec.languages().len().to_string(), false);
    output.key_value("Content dir:", &config.content_dir, false);
    output.key_value(
        "Ignore patterns:",
        &format!("{} of {} valid", spec.ignore_rules().len(), config.ignore_files.len()),
        false,
    );

    if !log.is_empty() {
        for message in log.messages() {
            output.error(&message);
        }
        anyhow::bail!("Configuration has {} invalid ignore pattern(s)", log.len());
    }

    output.success("Configuration is valid");
    Ok(())
}
