use super::{Platform, VideoFetcher};
use crate::error::ImportError;
use crate::model::VideoMetadata;
use async_trait::async_trait;
use url::Url;

/// Placeholder for a recognised platform that cannot be processed yet.
///
/// Every call fails with [`ImportError::NotImplemented`] so that callers never
/// mistake the platform for one that returned no recipe.
pub struct UnimplementedFetcher {
    platform: Platform,
}

impl UnimplementedFetcher {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

#[async_trait]
impl VideoFetcher for UnimplementedFetcher {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn fetch(&self, _url: &Url) -> Result<VideoMetadata, ImportError> {
        Err(ImportError::NotImplemented(self.platform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_fails() {
        let fetcher = UnimplementedFetcher::new(Platform::TikTok);
        let url = Url::parse("https://www.tiktok.com/@chef/video/1").unwrap();

        let err = fetcher.fetch(&url).await.unwrap_err();
        assert!(matches!(err, ImportError::NotImplemented(Platform::TikTok)));
        assert_eq!(err.to_string(), "TikTok video processing not implemented yet");
    }
}
