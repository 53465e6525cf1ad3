use super::{Platform, UnimplementedFetcher, VideoFetcher, YtDlpFetcher};

/// Hostname substrings identifying a platform.
///
/// Matching is case-insensitive and substring based, so `m.youtube.com` and
/// `www.youtube.com` both match `youtube.com`.
#[derive(Debug, Clone)]
pub struct PlatformMatcher {
    host_fragments: Vec<String>,
}

impl PlatformMatcher {
    pub fn new<I, S>(host_fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            host_fragments: host_fragments
                .into_iter()
                .map(|f| f.into().to_lowercase())
                .collect(),
        }
    }

    pub fn matches(&self, host: &str) -> bool {
        let host = host.to_lowercase();
        self.host_fragments.iter().any(|f| host.contains(f.as_str()))
    }
}

/// Ordered table of platform matchers and the fetcher serving each one.
#[derive(Default)]
pub struct PlatformRegistry {
    entries: Vec<(PlatformMatcher, Box<dyn VideoFetcher>)>,
}

impl PlatformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with YouTube backed by yt-dlp and TikTok/Instagram registered
    /// as not yet implemented.
    pub fn with_defaults(ytdlp_path: impl Into<String>) -> Self {
        Self::new()
            .register(
                PlatformMatcher::new(["youtube.com", "youtu.be"]),
                YtDlpFetcher::new(ytdlp_path),
            )
            .register(
                PlatformMatcher::new(["tiktok.com"]),
                UnimplementedFetcher::new(Platform::TikTok),
            )
            .register(
                PlatformMatcher::new(["instagram.com"]),
                UnimplementedFetcher::new(Platform::Instagram),
            )
    }

    pub fn register(
        mut self,
        matcher: PlatformMatcher,
        fetcher: impl VideoFetcher + 'static,
    ) -> Self {
        self.entries.push((matcher, Box::new(fetcher)));
        self
    }

    /// First fetcher whose matcher accepts `host`.
    pub fn resolve(&self, host: &str) -> Option<&dyn VideoFetcher> {
        self.entries
            .iter()
            .find(|(matcher, _)| matcher.matches(host))
            .map(|(_, fetcher)| fetcher.as_ref())
    }

    pub fn platforms(&self) -> Vec<Platform> {
        self.entries.iter().map(|(_, f)| f.platform()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matcher_is_case_insensitive() {
        let matcher = PlatformMatcher::new(["YouTube.com"]);
        assert!(matcher.matches("WWW.YOUTUBE.COM"));
        assert!(matcher.matches("m.youtube.com"));
        assert!(!matcher.matches("vimeo.com"));
    }

    #[test]
    fn test_default_registry_resolution() {
        let registry = PlatformRegistry::with_defaults("yt-dlp");
        assert_eq!(
            registry.resolve("www.youtube.com").map(|f| f.platform()),
            Some(Platform::YouTube)
        );
        assert_eq!(
            registry.resolve("youtu.be").map(|f| f.platform()),
            Some(Platform::YouTube)
        );
        assert_eq!(
            registry.resolve("vm.tiktok.com").map(|f| f.platform()),
            Some(Platform::TikTok)
        );
        assert_eq!(
            registry.resolve("www.Instagram.com").map(|f| f.platform()),
            Some(Platform::Instagram)
        );
        assert!(registry.resolve("example.com").is_none());
    }

    #[test]
    fn test_registration_order_wins() {
        let registry = PlatformRegistry::new()
            .register(
                PlatformMatcher::new(["tiktok.com"]),
                UnimplementedFetcher::new(Platform::TikTok),
            )
            .register(
                PlatformMatcher::new(["tiktok.com"]),
                UnimplementedFetcher::new(Platform::Instagram),
            );
        assert_eq!(
            registry.resolve("tiktok.com").map(|f| f.platform()),
            Some(Platform::TikTok)
        );
        assert_eq!(
            registry.platforms(),
            vec![Platform::TikTok, Platform::Instagram]
        );
    }
}
