//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, CONVENTIONAL_ENV_KEYS, DEFAULT_CONFIG_DIR,
    DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use rhetor_domain::constants::{SEARCH_MAX_RESULTS, TEMPERATURE_MAX, TEMPERATURE_MIN};
use rhetor_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Prefixed environment variables, nested with `__` (e.g. `RHETOR_GENERATION__MODEL`)
    /// 4. Conventional variables (`OPENAI_API_KEY`, `PINECONE_API_KEY`, `PINECONE_INDEX_NAME`, `PINECONE_HOST`)
    ///
    /// An explicitly given file that does not exist is a configuration error.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if !config_path.exists() {
                log_config_loaded(config_path, false);
                return Err(Error::configuration(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            figment = figment.merge(Toml::file(config_path));
            log_config_loaded(config_path, true);
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment
            .merge(Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split(CONFIG_ENV_SEPARATOR))
            .merge(conventional_env());

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Unprefixed variables the hosted services document
fn conventional_env() -> Env {
    Env::raw().filter_map(|key| {
        CONVENTIONAL_ENV_KEYS
            .iter()
            .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
            .map(|(_, path)| (*path).into())
    })
}

/// Validate application configuration
///
/// Checks static values only. Missing API keys are reported when the
/// pipeline is bootstrapped, so `rhetor config` works without them.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_generation_config(config)?;
    validate_provider_config(config)?;
    validate_http_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_generation_config(config: &AppConfig) -> Result<()> {
    let generation = &config.generation;
    if generation.model.trim().is_empty() {
        return Err(Error::configuration("Generation model cannot be empty"));
    }
    if generation.persona.trim().is_empty() {
        return Err(Error::configuration("Persona cannot be empty"));
    }
    if !(TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&generation.temperature) {
        return Err(Error::configuration(format!(
            "Default temperature must be between {TEMPERATURE_MIN} and {TEMPERATURE_MAX}, got {}",
            generation.temperature
        )));
    }
    if generation.search_results == 0 {
        return Err(Error::configuration("Search result count cannot be 0"));
    }
    if generation.search_results > SEARCH_MAX_RESULTS {
        return Err(Error::configuration(format!(
            "Search result count must be at most {SEARCH_MAX_RESULTS}, got {}",
            generation.search_results
        )));
    }
    Ok(())
}

fn validate_provider_config(config: &AppConfig) -> Result<()> {
    if config.providers.openai.embedding_model.trim().is_empty() {
        return Err(Error::configuration("Embedding model cannot be empty"));
    }
    if config.providers.pinecone.index_name.trim().is_empty() {
        return Err(Error::configuration("Pinecone index name cannot be empty"));
    }
    Ok(())
}

fn validate_http_config(config: &AppConfig) -> Result<()> {
    if config.http.timeout_secs == 0 {
        return Err(Error::configuration("HTTP timeout cannot be 0"));
    }
    Ok(())
}
