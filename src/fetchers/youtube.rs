use super::{Platform, VideoFetcher};
use crate::error::ImportError;
use crate::model::VideoMetadata;
use async_trait::async_trait;
use log::{debug, error};
use serde::Deserialize;
use tokio::process::Command;
use url::Url;

const UNTITLED: &str = "Untitled Recipe";

/// Reads YouTube video metadata by running `yt-dlp` without downloading.
pub struct YtDlpFetcher {
    program: String,
}

#[derive(Debug, Deserialize, Default)]
struct YtDlpOutput {
    title: Option<String>,
    description: Option<String>,
    subtitles: Option<Subtitles>,
}

#[derive(Debug, Deserialize, Default)]
struct Subtitles {
    en: Option<Vec<SubtitleTrack>>,
}

#[derive(Debug, Deserialize, Default)]
struct SubtitleTrack {
    data: Option<String>,
}

impl YtDlpFetcher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn args(url: &str) -> Vec<&str> {
        vec![
            "--dump-single-json",
            "--no-warnings",
            "--no-call-home",
            "--no-check-certificates",
            "--prefer-free-formats",
            "--youtube-skip-dash-manifest",
            url,
        ]
    }

    fn fetch_error(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> ImportError {
        ImportError::Fetch {
            platform: Platform::YouTube,
            source: source.into(),
        }
    }
}

fn to_metadata(output: YtDlpOutput) -> VideoMetadata {
    let captions = output
        .subtitles
        .and_then(|s| s.en)
        .and_then(|tracks| tracks.into_iter().next())
        .and_then(|track| track.data)
        .unwrap_or_default();

    VideoMetadata {
        title: output
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED.to_string()),
        description: output.description.unwrap_or_default(),
        captions: Some(captions),
    }
}

fn parse_output(stdout: &[u8]) -> Result<VideoMetadata, serde_json::Error> {
    let output: YtDlpOutput = serde_json::from_slice(stdout)?;
    Ok(to_metadata(output))
}

#[async_trait]
impl VideoFetcher for YtDlpFetcher {
    fn platform(&self) -> Platform {
        Platform::YouTube
    }

    async fn fetch(&self, url: &Url) -> Result<VideoMetadata, ImportError> {
        debug!("Running {} for {}", self.program, url);

        let output = Command::new(&self.program)
            .args(Self::args(url.as_str()))
            .output()
            .await
            .map_err(|e| {
                error!("Failed to run {}: {}", self.program, e);
                Self::fetch_error(e)
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("yt-dlp failed for {}: {}", url, stderr.trim());
            return Err(Self::fetch_error(format!(
                "yt-dlp exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        parse_output(&output.stdout).map_err(|e| {
            error!("Failed to decode yt-dlp output for {}: {}", url, e);
            Self::fetch_error(e)
        })
    }
}
