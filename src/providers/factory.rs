use crate::config::{AppConfig, ProviderConfig};
use crate::error::ImportError;
use crate::providers::{AnthropicProvider, LlmProvider, OllamaProvider, OpenAIProvider};
use reqwest::Client;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
        client: Client,
    ) -> Result<Box<dyn LlmProvider>, ImportError> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(ImportError::Provider(format!(
                "Provider '{}' is not enabled in configuration",
                provider_name
            )));
        }

        match provider_name {
            "openai" => Ok(Box::new(OpenAIProvider::new(config, client)?)),
            "anthropic" => Ok(Box::new(AnthropicProvider::new(config, client)?)),
            "ollama" => Ok(Box::new(OllamaProvider::new(config, client))),
            _ => Err(ImportError::Provider(format!(
                "Unknown provider: {} (available: {})",
                provider_name,
                Self::available_providers().join(", ")
            ))),
        }
    }

    /// Get the default provider from configuration, sharing an HTTP client
    /// built with the configured timeout.
    pub fn get_default_provider(config: &AppConfig) -> Result<Box<dyn LlmProvider>, ImportError> {
        let provider_name = &config.default_provider;
        let provider_config = config.providers.get(provider_name).ok_or_else(|| {
            ImportError::Provider(format!(
                "Default provider '{}' not found in configuration",
                provider_name
            ))
        })?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ImportError::Provider(e.to_string()))?;
        Self::create(provider_name, provider_config, client)
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "anthropic", "ollama"]
    }
}
