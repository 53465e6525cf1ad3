use crate::config::AppConfig;
use crate::error::ImportError;
use crate::fetchers::PlatformRegistry;
use crate::model::Recipe;
use crate::pipelines;
use crate::providers::{LlmProvider, ProviderFactory};

/// Extracts recipes from video URLs.
///
/// Holds the platform registry and the generation provider it was built with;
/// every call to [`RecipeExtractor::extract`] is independent.
pub struct RecipeExtractor {
    registry: PlatformRegistry,
    provider: Box<dyn LlmProvider>,
}

impl RecipeExtractor {
    /// Start configuring an extractor
    ///
    /// # Example
    /// ```
    /// use video_recipe_import::{OpenAIProvider, RecipeExtractor};
    ///
    /// let extractor = RecipeExtractor::builder()
    ///     .provider(OpenAIProvider::with_api_key(
    ///         "sk-test".to_string(),
    ///         "gpt-3.5-turbo".to_string(),
    ///     ))
    ///     .build();
    /// assert!(extractor.is_ok());
    /// ```
    pub fn builder() -> RecipeExtractorBuilder {
        RecipeExtractorBuilder::default()
    }

    /// Extract a recipe from a YouTube, TikTok or Instagram URL
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - The URL is malformed (`Validation`)
    /// - No platform is registered for its host (`UnsupportedPlatform`)
    /// - The platform fetcher fails (`Fetch`, `NotImplemented`)
    /// - The generation call fails (`Generation`)
    /// - The generation call returned no text (`Parse`)
    pub async fn extract(&self, url: &str) -> Result<Recipe, ImportError> {
        pipelines::video::process(url, &self.registry, self.provider.as_ref()).await
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    pub fn registry(&self) -> &PlatformRegistry {
        &self.registry
    }
}

/// Builder for [`RecipeExtractor`]
///
/// Anything not set explicitly is derived from an [`AppConfig`], which is
/// loaded from `config.toml` and the environment unless one is supplied.
#[derive(Default)]
pub struct RecipeExtractorBuilder {
    config: Option<AppConfig>,
    provider: Option<Box<dyn LlmProvider>>,
    registry: Option<PlatformRegistry>,
}

impl RecipeExtractorBuilder {
    /// Use this configuration instead of loading one
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the LLM provider used for the generation call
    ///
    /// # Example
    /// ```
    /// use video_recipe_import::{OllamaProvider, RecipeExtractor};
    ///
    /// let builder = RecipeExtractor::builder().provider(OllamaProvider::with_base_url(
    ///     "http://localhost:11434".to_string(),
    ///     "llama3".to_string(),
    /// ));
    /// ```
    pub fn provider(mut self, provider: impl LlmProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Replace the default platform registry
    pub fn registry(mut self, registry: PlatformRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn build(self) -> Result<RecipeExtractor, ImportError> {
        let needs_config = self.provider.is_none() || self.registry.is_none();
        let config = match self.config {
            Some(config) => config,
            None if needs_config => AppConfig::load()?,
            None => AppConfig::default(),
        };

        let provider = match self.provider {
            Some(provider) => provider,
            None => ProviderFactory::get_default_provider(&config)?,
        };

        let registry = self
            .registry
            .unwrap_or_else(|| PlatformRegistry::with_defaults(&config.fetcher.ytdlp_path));

        if registry.is_empty() {
            return Err(ImportError::Provider(
                "No video platforms registered".to_string(),
            ));
        }

        Ok(RecipeExtractor { registry, provider })
    }
}
