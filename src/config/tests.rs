use super::*;
use figment::Jail;

fn load() -> std::result::Result<SiteConfig, figment::Error> {
    SiteConfig::load().map_err(|e| format!("{e:#}").into())
}

#[test]
fn test_defaults_without_config_file() {
    Jail::expect_with(|_jail| {
        let config = load()?;

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.default_content_language, "en");
        assert_eq!(config.content_dir, "content");
        assert!(config.ignore_files.is_empty());
        Ok(())
    });
}

#[test]
fn test_loads_toml_site_config() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "site.toml",
            r#"
            defaultContentLanguage = "FR"
            ignoreFiles = ["\\.bak$", "^drafts/"]

            [languages.fr]
            weight = 1
            languageName = "Français"

            [languages.EN]
            weight = 2
            contentDir = "content/en"
            customParam = "kept"
            "#,
        )?;

        let config = load()?;

        assert_eq!(config.default_content_language, "fr");
        assert_eq!(config.ignore_files, vec!["\\.bak$", "^drafts/"]);
        assert_eq!(config.languages.len(), 2);

        let en = &config.languages["en"];
        assert_eq!(en.weight, 2);
        assert_eq!(en.content_dir.as_deref(), Some("content/en"));
        assert_eq!(en.params.get("customParam"), Some(&serde_json::json!("kept")));

        let fr = &config.languages["fr"];
        assert_eq!(fr.language_name.as_deref(), Some("Français"));
        Ok(())
    });
}

#[test]
fn test_loads_yaml_site_config() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "site.yaml",
            r#"
defaultContentLanguage: de
contentDir: docs
ignoreFiles:
  - "\\.swp$"
"#,
        )?;

        let config = load()?;

        assert_eq!(config.default_content_language, "de");
        assert_eq!(config.content_dir, "docs");
        assert_eq!(config.ignore_files, vec!["\\.swp$"]);
        Ok(())
    });
}

#[test]
fn test_toml_takes_priority_over_json() {
    Jail::expect_with(|jail| {
        jail.create_file("site.json", r#"{"contentDir": "from-json"}"#)?;
        jail.create_file("site.toml", r#"contentDir = "from-toml""#)?;

        assert_eq!(load()?.content_dir, "from-toml");
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("site.toml", r#"defaultContentLanguage = "en""#)?;
        jail.set_env("SITESOURCE_DEFAULT_CONTENT_LANGUAGE", "nb");
        jail.set_env("SITESOURCE_IGNORE_FILES", r#"["tmp$"]"#);

        let config = load()?;

        assert_eq!(config.default_content_language, "nb");
        assert_eq!(config.ignore_files, vec!["tmp$"]);
        Ok(())
    });
}

#[test]
fn test_custom_config_path() {
    Jail::expect_with(|jail| {
        jail.create_file("site.toml", r#"contentDir = "ignored""#)?;
        jail.create_file("custom.json", r#"{"contentDir": "custom"}"#)?;

        let config = SiteConfig::load_with_custom_config(Some(Path::new("custom.json")))
            .map_err(|e| e.to_string())?;

        assert_eq!(config.content_dir, "custom");
        Ok(())
    });
}

#[test]
fn test_missing_custom_config_is_an_error() {
    Jail::expect_with(|_jail| {
        let result = SiteConfig::load_with_custom_config(Some(Path::new("non_existent.toml")));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("non_existent.toml"));
        Ok(())
    });
}

#[test]
fn test_ill_typed_config_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file("site.toml", r#"ignoreFiles = 42"#)?;

        assert!(SiteConfig::load().is_err());
        Ok(())
    });
}

#[test]
fn test_normalized_fills_blanks() {
    let config = SiteConfig {
        default_content_language: "".to_string(),
        content_dir: " ".to_string(),
        ..Default::default()
    }
    .normalized();

    assert_eq!(config.default_content_language, "en");
    assert_eq!(config.content_dir, "content");
}

#[test]
fn test_validate() {
    let mut config = SiteConfig::default();
    assert!(config.validate().is_ok());

    // Default language outside the configured set only warns
    config.languages.insert("de".to_string(), LanguageConfig::default());
    assert!(config.validate().is_ok());

    config.languages.insert(" ".to_string(), LanguageConfig::default());
    assert!(config.validate().is_err());
}

#[test]
fn test_case_colliding_languages_are_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "site.toml",
            r#"
            [languages.en]
            weight = 1

            [languages.EN]
            weight = 2
            "#,
        )?;

        let err = SiteConfig::load().expect_err("colliding language ids must not load");
        let message = format!("{err:#}");
        assert!(message.contains("'EN'"), "{message}");
        assert!(message.contains("'en'"), "{message}");
        Ok(())
    });
}

#[test]
fn test_validate_rejects_colliding_language_ids() {
    let mut config = SiteConfig::default();
    config.languages.insert("en".to_string(), LanguageConfig::default());
    config.languages.insert("En".to_string(), LanguageConfig::default());

    assert!(config.check_language_ids().is_err());
    assert!(config.validate().is_err());
}
