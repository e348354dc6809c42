//! Configuration management for the Scout research service.
//!
//! This module handles loading and merging configuration from multiple
//! sources:
//! - Built-in defaults
//! - Config file (scout.yaml)
//! - Environment variables
//! - Command-line flags
//!
//! Later sources override earlier ones.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Main application configuration.
///
/// This struct holds all global configuration options that affect
/// behavior across the `serve` and `ask` entry points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind: String,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Default LLM provider (e.g., "ollama", "openai")
    pub provider: String,

    /// Default model identifier
    pub model: String,

    /// Custom endpoint for the LLM provider
    pub endpoint: Option<String>,

    /// API key for the LLM provider
    pub api_key: Option<String>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// Politeness delay between page fetches, in milliseconds
    pub source_delay_ms: u64,

    /// Politeness delay between search-engine hits, in milliseconds
    pub query_delay_ms: u64,

    /// LLM provider configurations
    pub llm: Option<LlmConfig>,
}

/// LLM configuration from scout.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(rename = "activeProvider")]
    pub active_provider: String,

    pub providers: HashMap<String, ProviderConfig>,
}

/// Provider-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProviderConfig {
    OpenAI {
        #[serde(rename = "apiKeyEnv")]
        api_key_env: String,
        model: String,
        endpoint: Option<String>,
    },
    Ollama {
        endpoint: String,
        model: String,
        timeout: Option<u64>,
    },
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    server: Option<ServerConfig>,
    llm: Option<LlmConfig>,
    pacing: Option<PacingConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ServerConfig {
    bind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PacingConfig {
    #[serde(rename = "sourceDelayMs")]
    source_delay_ms: Option<u64>,
    #[serde(rename = "queryDelayMs")]
    query_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            config_file: None,
            provider: "ollama".to_string(), // Local-first default
            model: "llama3.2".to_string(),
            endpoint: None,
            api_key: None,
            log_level: None,
            verbose: false,
            no_color: false,
            source_delay_ms: 1_000,
            query_delay_ms: 2_000,
            llm: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file and environment variables.
    ///
    /// Environment variables:
    /// - `SCOUT_CONFIG`: Path to config file (default: ./scout.yaml)
    /// - `SCOUT_BIND`: Server bind address
    /// - `SCOUT_PROVIDER`: LLM provider
    /// - `SCOUT_MODEL`: Model identifier
    /// - `SCOUT_API_KEY`: API key
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load() -> AppResult<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an explicit config file path, as given
    /// on the command line. `None` falls back to `SCOUT_CONFIG`, then
    /// to `./scout.yaml`.
    pub fn load_from(config_file: Option<&std::path::Path>) -> AppResult<Self> {
        let mut config = Self::default();

        config.config_file = config_file.map(|p| p.to_path_buf());
        if config.config_file.is_none() {
            if let Ok(config_file) = std::env::var("SCOUT_CONFIG") {
                config.config_file = Some(PathBuf::from(config_file));
            }
        }

        // Load from YAML config file if it exists
        let config_path = if let Some(ref cf) = config.config_file {
            cf.clone()
        } else {
            PathBuf::from("scout.yaml")
        };

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        }

        // Environment variables override YAML config
        if let Ok(bind) = std::env::var("SCOUT_BIND") {
            config.bind = bind;
        }

        if let Ok(provider) = std::env::var("SCOUT_PROVIDER") {
            config.provider = provider;
        }

        if let Ok(model) = std::env::var("SCOUT_MODEL") {
            config.model = model;
        }

        if let Ok(key) = std::env::var("SCOUT_API_KEY") {
            config.api_key = Some(key);
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &PathBuf) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(server) = config_file.server {
            if let Some(bind) = server.bind {
                result.bind = bind;
            }
        }

        if let Some(pacing) = config_file.pacing {
            if let Some(ms) = pacing.source_delay_ms {
                result.source_delay_ms = ms;
            }
            if let Some(ms) = pacing.query_delay_ms {
                result.query_delay_ms = ms;
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        if let Some(llm) = config_file.llm {
            result.provider = llm.active_provider.clone();

            if let Some(provider_config) = llm.providers.get(&llm.active_provider) {
                match provider_config {
                    ProviderConfig::OpenAI {
                        model, endpoint, ..
                    } => {
                        result.model = model.clone();
                        result.endpoint = endpoint.clone();
                    }
                    ProviderConfig::Ollama {
                        model, endpoint, ..
                    } => {
                        result.model = model.clone();
                        result.endpoint = Some(endpoint.clone());
                    }
                }
            }

            result.llm = Some(llm);
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// This method merges command-line flags with the loaded configuration,
    /// giving precedence to CLI flags over environment variables.
    pub fn with_overrides(
        mut self,
        bind: Option<String>,
        provider: Option<String>,
        model: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(bind) = bind {
            self.bind = bind;
        }

        if let Some(provider) = provider {
            self.provider = provider;
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the configuration for a named provider, if present.
    pub fn get_provider_config(&self, provider: &str) -> Option<ProviderConfig> {
        self.llm
            .as_ref()
            .and_then(|llm| llm.providers.get(provider).cloned())
    }

    /// Resolve the API key for a provider.
    ///
    /// An explicit `SCOUT_API_KEY` wins; otherwise the provider's
    /// configured `apiKeyEnv` variable is consulted.
    pub fn resolve_api_key(&self, provider: &str) -> Option<String> {
        if let Some(ref key) = self.api_key {
            return Some(key.clone());
        }

        if let Some(ProviderConfig::OpenAI { api_key_env, .. }) =
            self.get_provider_config(provider)
        {
            if let Ok(key) = std::env::var(&api_key_env) {
                return Some(key);
            }
        }

        None
    }

    /// Validate configuration for the active provider.
    pub fn validate(&self) -> AppResult<()> {
        let provider = &self.provider;
        let known_providers = ["ollama", "openai", "mock"];

        if !known_providers.contains(&provider.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                provider,
                known_providers.join(", ")
            )));
        }

        if provider == "openai" && self.resolve_api_key(provider).is_none() {
            return Err(AppError::Config(
                "OpenAI provider requires an API key (SCOUT_API_KEY or apiKeyEnv)".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.provider, "ollama");
        assert_eq!(config.model, "llama3.2");
        assert_eq!(config.bind, "127.0.0.1:8080");
        assert_eq!(config.source_delay_ms, 1_000);
        assert_eq!(config.query_delay_ms, 2_000);
        assert!(!config.verbose);
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default();
        let overridden = config.with_overrides(
            Some("0.0.0.0:9000".to_string()),
            Some("openai".to_string()),
            Some("gpt-4o-mini".to_string()),
            None,
            true,
            false,
        );

        assert_eq!(overridden.bind, "0.0.0.0:9000");
        assert_eq!(overridden.provider, "openai");
        assert_eq!(overridden.model, "gpt-4o-mini");
        assert!(overridden.verbose);
        assert_eq!(overridden.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_merge_yaml() {
        let yaml = r#"
server:
  bind: "0.0.0.0:3000"
pacing:
  sourceDelayMs: 250
  queryDelayMs: 500
llm:
  activeProvider: ollama
  providers:
    ollama:
      endpoint: "http://localhost:11434"
      model: "llama3.2"
"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scout.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let merged = AppConfig::default().merge_yaml(&path).unwrap();
        assert_eq!(merged.bind, "0.0.0.0:3000");
        assert_eq!(merged.source_delay_ms, 250);
        assert_eq!(merged.query_delay_ms, 500);
        assert_eq!(merged.provider, "ollama");
        assert_eq!(merged.endpoint.as_deref(), Some("http://localhost:11434"));
    }

    #[test]
    fn test_merge_yaml_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scout.yaml");
        std::fs::write(&path, "server: [not, a, mapping").unwrap();

        assert!(AppConfig::default().merge_yaml(&path).is_err());
    }

    #[test]
    fn test_validate_unknown_provider() {
        let mut config = AppConfig::default();
        config.provider = "unknown".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_ollama() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_openai_requires_key() {
        let mut config = AppConfig::default();
        config.provider = "openai".to_string();
        assert!(config.validate().is_err());

        config.api_key = Some("sk-test".to_string());
        assert!(config.validate().is_ok());
    }
}
