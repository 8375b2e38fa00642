//! Tests for ConfigLoader and configuration types

use figment::Jail;
use rhetor_domain::ErrorKind;
use rhetor_domain::value_objects::LengthCategory;
use rhetor_infrastructure::config::{AppConfig, ConfigLoader, validate_app_config};
use tempfile::TempDir;

fn to_figment_error(err: rhetor_domain::Error) -> figment::Error {
    figment::Error::from(err.to_string())
}

#[test]
fn test_defaults_without_file_or_env() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        let config = ConfigLoader::new().load().map_err(to_figment_error)?;

        assert_eq!(config.generation.persona, "Barack Obama");
        assert_eq!(config.generation.model, "gpt-4");
        assert!((config.generation.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.generation.length, LengthCategory::Medium);
        assert_eq!(config.generation.search_results, 5);
        assert_eq!(config.providers.pinecone.index_name, "obama-speeches");
        assert_eq!(
            config.providers.openai.embedding_model,
            "text-embedding-3-small"
        );
        assert_eq!(config.http.timeout_secs, 30);
        assert!(config.providers.openai.api_key.is_none());
        Ok(())
    });
}

#[test]
fn test_default_file_in_working_directory_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "rhetor.toml",
            r#"
                [generation]
                model = "gpt-3.5-turbo"
                length = "long"

                [providers.pinecone]
                index_name = "lincoln-speeches"
            "#,
        )?;

        let config = ConfigLoader::new().load().map_err(to_figment_error)?;
        assert_eq!(config.generation.model, "gpt-3.5-turbo");
        assert_eq!(config.generation.length, LengthCategory::Long);
        assert_eq!(config.providers.pinecone.index_name, "lincoln-speeches");
        assert_eq!(config.generation.persona, "Barack Obama");
        Ok(())
    });
}

#[test]
fn test_unknown_length_in_file_falls_back_to_medium() {
    Jail::expect_with(|jail| {
        jail.create_file("rhetor.toml", "[generation]\nlength = \"epic\"\n")?;
        let config = ConfigLoader::new().load().map_err(to_figment_error)?;
        assert_eq!(config.generation.length, LengthCategory::Medium);
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("rhetor.toml", "[generation]\nmodel = \"gpt-3.5-turbo\"\n")?;
        jail.set_env("RHETOR_GENERATION__MODEL", "gpt-4");
        jail.set_env("RHETOR_GENERATION__PERSONA", "Abraham Lincoln");
        jail.set_env("RHETOR_HTTP__TIMEOUT_SECS", "5");

        let config = ConfigLoader::new().load().map_err(to_figment_error)?;
        assert_eq!(config.generation.model, "gpt-4");
        assert_eq!(config.generation.persona, "Abraham Lincoln");
        assert_eq!(config.http.timeout_secs, 5);
        Ok(())
    });
}

#[test]
fn test_conventional_environment_variables() {
    Jail::expect_with(|jail| {
        jail.set_env("OPENAI_API_KEY", "sk-test");
        jail.set_env("PINECONE_API_KEY", "pc-test");
        jail.set_env("PINECONE_INDEX_NAME", "speeches-v2");
        jail.set_env("PINECONE_HOST", "speeches-v2-abc.svc.pinecone.io");

        let config = ConfigLoader::new().load().map_err(to_figment_error)?;
        assert_eq!(config.providers.openai.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.providers.pinecone.api_key.as_deref(), Some("pc-test"));
        assert_eq!(config.providers.pinecone.index_name, "speeches-v2");
        assert_eq!(
            config.providers.pinecone.host.as_deref(),
            Some("speeches-v2-abc.svc.pinecone.io")
        );
        Ok(())
    });
}

#[test]
fn test_explicit_missing_file_is_configuration_error() {
    Jail::expect_with(|_jail| {
        let err = ConfigLoader::new()
            .with_config_path("does-not-exist.toml")
            .load()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        Ok(())
    });
}

#[test]
fn test_invalid_values_are_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("bad.toml", "[generation]\ntemperature = 1.5\n")?;
        let err = ConfigLoader::new()
            .with_config_path("bad.toml")
            .load()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("temperature"));
        Ok(())
    });
}

#[test]
fn test_malformed_toml_is_configuration_error() {
    Jail::expect_with(|jail| {
        jail.create_file("broken.toml", "[generation\nmodel = ")?;
        let err = ConfigLoader::new()
            .with_config_path("broken.toml")
            .load()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        Ok(())
    });
}

#[test]
fn test_validate_app_config_cases() {
    assert!(validate_app_config(&AppConfig::default()).is_ok());

    let mut config = AppConfig::default();
    config.http.timeout_secs = 0;
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.generation.model = "  ".to_string();
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.logging.level = "verbose".to_string();
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.generation.temperature = f32::NAN;
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.generation.search_results = 0;
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_search_results_above_maximum_is_rejected() {
    let mut config = AppConfig::default();
    config.generation.search_results = 5;
    assert!(validate_app_config(&config).is_ok());

    config.generation.search_results = 6;
    let err = validate_app_config(&config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("at most 5"), "{err}");
}

#[test]
fn test_search_results_from_env_above_maximum_fails_load() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("RHETOR_GENERATION__SEARCH_RESULTS", "1000");

        let err = ConfigLoader::new().load().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        Ok(())
    });
}

#[test]
fn test_save_and_reload_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rhetor.toml");

    let mut config = AppConfig::default();
    config.generation.model = "gpt-3.5-turbo".to_string();
    config.generation.length = LengthCategory::Short;
    config.providers.pinecone.namespace = Some("speeches".to_string());

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("[generation]"));
    assert!(saved.contains("length = \"short\""));
    assert!(!saved.contains("api_key"));

    let reloaded: AppConfig = toml::from_str(&saved).unwrap();
    assert_eq!(reloaded, config);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

#[test]
fn test_redacted_hides_secrets() {
    let mut config = AppConfig::default();
    config.providers.openai.api_key = Some("sk-secret".to_string());

    let redacted = config.redacted();
    assert_eq!(redacted.providers.openai.api_key.as_deref(), Some("***"));
    assert!(redacted.providers.pinecone.api_key.is_none());
    assert_eq!(redacted.generation, config.generation);

    let rendered = toml::to_string_pretty(&redacted).unwrap();
    assert!(!rendered.contains("sk-secret"));
}

#[test]
fn test_missing_credentials_name_the_variable() {
    let config = AppConfig::default();
    let err = config.providers.openai_api_key().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("OPENAI_API_KEY"));

    let mut config = AppConfig::default();
    config.providers.pinecone.api_key = Some("   ".to_string());
    let err = config.providers.pinecone_api_key().unwrap_err();
    assert!(err.to_string().contains("PINECONE_API_KEY"));
}
