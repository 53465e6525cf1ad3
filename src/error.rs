use thiserror::Error;

use crate::fetchers::Platform;

/// Errors that can occur while extracting a recipe from a video
#[derive(Error, Debug)]
pub enum ImportError {
    /// The input is not a well-formed video URL
    #[error("{0}")]
    Validation(String),

    /// The URL's host does not belong to any registered platform
    #[error("{0}")]
    UnsupportedPlatform(String),

    /// The platform's metadata source failed
    #[error("Failed to extract video information from {platform}: {source}")]
    Fetch {
        platform: Platform,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The platform is recognised but has no fetcher yet
    #[error("{0} video processing not implemented yet")]
    NotImplemented(Platform),

    /// The text-generation call failed
    #[error("Failed to extract recipe from video content: {0}")]
    Generation(String),

    /// The generated text could not be turned into a recipe
    #[error("Failed to parse recipe: {0}")]
    Parse(String),

    /// A provider could not be constructed from configuration
    #[error("Provider error: {0}")]
    Provider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ImportError {
    /// Whether the error was caused by the caller's input rather than by an
    /// upstream service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ImportError::Validation(_) | ImportError::UnsupportedPlatform(_)
        )
    }
}

impl From<url::ParseError> for ImportError {
    fn from(err: url::ParseError) -> Self {
        ImportError::Validation(format!("Invalid URL: {}", err))
    }
}

impl From<reqwest::Error> for ImportError {
    fn from(err: reqwest::Error) -> Self {
        ImportError::Generation(err.to_string())
    }
}
