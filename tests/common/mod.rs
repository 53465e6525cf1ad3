#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use url::Url;
use video_recipe_import::fetchers::UnimplementedFetcher;
use video_recipe_import::{
    ImportError, OpenAIProvider, Platform, PlatformMatcher, PlatformRegistry, RecipeExtractor,
    VideoFetcher, VideoMetadata,
};

pub const CAKE_TEXT: &str = "Cake\nIngredients:\n- flour\n- sugar\nInstructions:\n1. Mix\n2. Bake";

/// YouTube fetcher returning canned metadata and counting its calls.
pub struct MockFetcher {
    pub calls: Arc<AtomicUsize>,
    pub fail: bool,
}

impl MockFetcher {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: calls.clone(),
                fail: false,
            },
            calls,
        )
    }

    pub fn failing() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            fail: true,
        }
    }
}

#[async_trait]
impl VideoFetcher for MockFetcher {
    fn platform(&self) -> Platform {
        Platform::YouTube
    }

    async fn fetch(&self, _url: &Url) -> Result<VideoMetadata, ImportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ImportError::Fetch {
                platform: Platform::YouTube,
                source: "video unavailable".into(),
            });
        }
        Ok(VideoMetadata {
            title: "Grandma's Cake".to_string(),
            description: "flour, sugar, bake at 180C".to_string(),
            captions: Some(String::new()),
        })
    }
}

/// Registry with the mock standing in for YouTube and the real placeholders
/// for TikTok and Instagram.
pub fn registry_with(fetcher: MockFetcher) -> PlatformRegistry {
    PlatformRegistry::new()
        .register(PlatformMatcher::new(["youtube.com", "youtu.be"]), fetcher)
        .register(
            PlatformMatcher::new(["tiktok.com"]),
            UnimplementedFetcher::new(Platform::TikTok),
        )
        .register(
            PlatformMatcher::new(["instagram.com"]),
            UnimplementedFetcher::new(Platform::Instagram),
        )
}

pub fn extractor(fetcher: MockFetcher, generation_url: String) -> RecipeExtractor {
    RecipeExtractor::builder()
        .config(Default::default())
        .registry(registry_with(fetcher))
        .provider(OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            generation_url,
            "gpt-3.5-turbo".to_string(),
        ))
        .build()
        .unwrap()
}

/// Chat-completion response body carrying `content`.
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    })
    .to_string()
}
