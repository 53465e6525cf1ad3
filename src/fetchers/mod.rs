mod registry;
mod unimplemented;
mod youtube;

pub use registry::{PlatformMatcher, PlatformRegistry};
pub use unimplemented::UnimplementedFetcher;
pub use youtube::YtDlpFetcher;

use crate::error::ImportError;
use crate::model::VideoMetadata;
use async_trait::async_trait;
use std::fmt;
use url::Url;

/// Video platforms a URL can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    YouTube,
    TikTok,
    Instagram,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Turns a video URL into the text describing the video.
#[async_trait]
pub trait VideoFetcher: Send + Sync {
    fn platform(&self) -> Platform;

    async fn fetch(&self, url: &Url) -> Result<VideoMetadata, ImportError>;
}
