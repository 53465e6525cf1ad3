use crate::error::ImportError;
use crate::fetchers::PlatformRegistry;
use crate::model::Recipe;
use crate::parser;
use crate::providers::{build_prompt, LlmProvider, RECIPE_SYSTEM_PROMPT};
use log::{debug, error, info};
use url::Url;

/// Parse `input` as a URL that has a hostname.
pub fn validate_url(input: &str) -> Result<Url, ImportError> {
    let url = Url::parse(input.trim())?;
    if url.host_str().is_none() {
        return Err(ImportError::Validation(format!(
            "Invalid URL: {} has no host",
            input
        )));
    }
    Ok(url)
}

/// Process a video URL into a recipe
///
/// This pipeline:
/// 1. Validates the URL and resolves its platform from the hostname
/// 2. Fetches the video's metadata with the platform's fetcher
/// 3. Builds the prompt and runs the generation call
/// 4. Parses the generated text and records the source URL
///
/// An unsupported host fails before any network call is made.
pub async fn process(
    url: &str,
    registry: &PlatformRegistry,
    provider: &dyn LlmProvider,
) -> Result<Recipe, ImportError> {
    let parsed = validate_url(url)?;
    let host = parsed.host_str().unwrap_or_default().to_lowercase();

    let fetcher = registry.resolve(&host).ok_or_else(|| {
        info!("Rejected {}: no platform registered for host {}", url, host);
        ImportError::UnsupportedPlatform("Unsupported video platform".to_string())
    })?;

    info!("Fetching {} video information for {}", fetcher.platform(), url);
    let metadata = fetcher.fetch(&parsed).await.inspect_err(|e| {
        error!("Error extracting {} info: {}", fetcher.platform(), e);
    })?;
    debug!("{:#?}", metadata);

    let prompt = build_prompt(&metadata);
    info!("Generating recipe with {}", provider.provider_name());
    let generated = provider
        .generate(RECIPE_SYSTEM_PROMPT, &prompt)
        .await
        .inspect_err(|e| error!("Error extracting recipe from text: {}", e))?;

    let mut recipe = parser::parse(&generated, &metadata.title)
        .inspect_err(|e| error!("Error parsing generated recipe: {}", e))?;
    recipe.source = Some(url.to_string());

    Ok(recipe)
}
