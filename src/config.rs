use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Main application configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Provider used for the generation call
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Map of provider name to provider configuration
    #[serde(default = "default_providers")]
    pub providers: HashMap<String, ProviderConfig>,
    /// Video metadata fetcher configuration
    #[serde(default)]
    pub fetcher: FetcherConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

/// Configuration for a specific LLM provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Whether this provider is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Model identifier (e.g., "gpt-3.5-turbo", "claude-3-5-haiku-latest").
    /// Each provider has its own default when unset.
    pub model: Option<String>,
    /// Temperature for generation (0.0-1.0), omitted from requests when unset
    pub temperature: Option<f32>,
    /// Maximum tokens to generate, omitted from requests when unset
    pub max_tokens: Option<u32>,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            model: None,
            temperature: None,
            max_tokens: None,
            api_key: None,
            base_url: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FetcherConfig {
    /// Path to the yt-dlp executable
    #[serde(default = "default_ytdlp_path")]
    pub ytdlp_path: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            ytdlp_path: default_ytdlp_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address the HTTP endpoint listens on
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

// Default value functions
fn default_provider() -> String {
    "openai".to_string()
}

fn default_providers() -> HashMap<String, ProviderConfig> {
    let mut providers = HashMap::new();
    providers.insert(default_provider(), ProviderConfig::default());
    providers
}

fn default_enabled() -> bool {
    true
}

fn default_ytdlp_path() -> String {
    "yt-dlp".to_string()
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            providers: default_providers(),
            fetcher: FetcherConfig::default(),
            server: ServerConfig::default(),
            timeout: default_timeout(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE__PROVIDERS__OPENAI__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from `config.toml` and `RECIPE__*` environment variables.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE__PROVIDERS__OPENAI__API_KEY
        .add_source(
            Environment::with_prefix("RECIPE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_provider(), "openai");
        assert_eq!(default_ytdlp_path(), "yt-dlp");
        assert_eq!(default_bind(), "127.0.0.1:3000");
    }

    #[test]
    fn test_app_config_default_has_openai() {
        let config = AppConfig::default();
        assert_eq!(config.default_provider, "openai");
        let openai = config.providers.get("openai").unwrap();
        assert!(openai.enabled);
        assert!(openai.model.is_none());
        assert!(openai.max_tokens.is_none());
        assert!(openai.api_key.is_none());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let settings = Config::builder()
            .add_source(File::from_str(
                r#"
                default_provider = "ollama"
                timeout = 10

                [providers.ollama]
                model = "llama3"

                [fetcher]
                ytdlp_path = "/opt/bin/yt-dlp"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let config: AppConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.default_provider, "ollama");
        assert_eq!(config.timeout, 10);
        assert_eq!(config.providers["ollama"].model.as_deref(), Some("llama3"));
        assert!(config.providers["ollama"].temperature.is_none());
        assert!(config.providers["ollama"].enabled);
        assert_eq!(config.fetcher.ytdlp_path, "/opt/bin/yt-dlp");
        assert_eq!(config.server.bind, "127.0.0.1:3000");
    }
}
