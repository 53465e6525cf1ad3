pub mod builder;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod fetchers;
pub mod model;
pub mod parser;
pub mod pipelines;
pub mod providers;
pub mod server;
pub mod session;

pub use builder::{RecipeExtractor, RecipeExtractorBuilder};
pub use config::AppConfig;
pub use error::ImportError;
pub use fetchers::{Platform, PlatformMatcher, PlatformRegistry, VideoFetcher};
pub use model::{Recipe, VideoMetadata};
pub use providers::{AnthropicProvider, LlmProvider, OllamaProvider, OpenAIProvider};
pub use session::{ExtractionSession, HttpBackend, RecipeBackend, SessionState};

/// Extract a recipe from a video URL using configuration from `config.toml`
/// and the environment.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipe =
///     video_recipe_import::extract_recipe("https://www.youtube.com/watch?v=abc123").await?;
/// println!("{}", recipe.to_plain_text());
/// # Ok(())
/// # }
/// ```
pub async fn extract_recipe(url: &str) -> Result<Recipe, ImportError> {
    RecipeExtractor::builder().build()?.extract(url).await
}

/// Parse text produced by a generation call into a recipe.
pub fn parse_recipe_text(text: &str, fallback_title: &str) -> Result<Recipe, ImportError> {
    parser::parse(text, fallback_title)
}
