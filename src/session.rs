//! Request lifecycle of an interactive extraction.
//!
//! An [`ExtractionSession`] moves between `Idle`, `Loading`, `Success` and
//! `Error` as URLs are submitted. URLs that obviously do not belong to a
//! supported platform are rejected before the backend is contacted.

use crate::builder::RecipeExtractor;
use crate::clipboard::Clipboard;
use crate::model::Recipe;
use crate::server::{ErrorResponse, ExtractRequest, EXTRACT_PATH};
use async_trait::async_trait;
use log::{error, info};
use reqwest::Client;
use url::Url;

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid YouTube, TikTok, or Instagram URL";
const FALLBACK_ERROR_MESSAGE: &str = "Failed to extract recipe";
const SUPPORTED_HOSTS: [&str; 4] = ["youtube.com", "youtu.be", "tiktok.com", "instagram.com"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading {
        url: String,
    },
    Success(Recipe),
    Error(String),
}

/// Something that can turn a URL into a recipe on the session's behalf.
///
/// Failures are reported as the message to show to the user.
#[async_trait]
pub trait RecipeBackend: Send + Sync {
    async fn request_recipe(&self, url: &str) -> Result<Recipe, String>;
}

#[async_trait]
impl RecipeBackend for RecipeExtractor {
    async fn request_recipe(&self, url: &str) -> Result<Recipe, String> {
        self.extract(url).await.map_err(|e| e.to_string())
    }
}

/// Backend talking to a running extraction server.
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), EXTRACT_PATH),
        }
    }
}

#[async_trait]
impl RecipeBackend for HttpBackend {
    async fn request_recipe(&self, url: &str) -> Result<Recipe, String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ExtractRequest {
                url: url.to_string(),
            })
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.status().is_success() {
            return response.json::<Recipe>().await.map_err(|e| e.to_string());
        }

        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|body| body.error)
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
        Err(message)
    }
}

/// Client-side check that `input` is a URL on one of the supported platforms.
pub fn prevalidate(input: &str) -> Result<(), &'static str> {
    let url = Url::parse(input.trim()).map_err(|_| INVALID_URL_MESSAGE)?;
    let host = url.host_str().unwrap_or_default().to_lowercase();
    if SUPPORTED_HOSTS.iter().any(|h| host.contains(h)) {
        Ok(())
    } else {
        Err(INVALID_URL_MESSAGE)
    }
}

type Observer = Box<dyn Fn(&SessionState) + Send + Sync>;

pub struct ExtractionSession<B> {
    backend: B,
    state: SessionState,
    last_url: Option<String>,
    observers: Vec<Observer>,
}

impl<B: RecipeBackend> ExtractionSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: SessionState::Idle,
            last_url: None,
            observers: Vec::new(),
        }
    }

    /// Call `observer` with every state the session enters.
    pub fn on_transition(
        mut self,
        observer: impl Fn(&SessionState) + Send + Sync + 'static,
    ) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        match &self.state {
            SessionState::Success(recipe) => Some(recipe),
            _ => None,
        }
    }

    /// Whether a submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !matches!(self.state, SessionState::Loading { .. })
    }

    fn transition(&mut self, state: SessionState) {
        self.state = state;
        for observer in &self.observers {
            observer(&self.state);
        }
    }

    /// Submit a URL and wait for the outcome.
    pub async fn submit(&mut self, url: &str) -> &SessionState {
        self.last_url = Some(url.to_string());

        if let Err(message) = prevalidate(url) {
            error!("Error: {}", message);
            self.transition(SessionState::Error(message.to_string()));
            return &self.state;
        }

        self.transition(SessionState::Loading {
            url: url.to_string(),
        });

        let next = match self.backend.request_recipe(url).await {
            Ok(recipe) => SessionState::Success(recipe),
            Err(message) => {
                error!("Error: {}", message);
                let message = if message.is_empty() {
                    FALLBACK_ERROR_MESSAGE.to_string()
                } else {
                    message
                };
                SessionState::Error(message)
            }
        };
        self.transition(next);
        &self.state
    }

    /// Re-submit the last URL after a failure. Does nothing in other states.
    pub async fn retry(&mut self) -> &SessionState {
        if matches!(self.state, SessionState::Error(_)) {
            if let Some(url) = self.last_url.clone() {
                return self.submit(&url).await;
            }
        }
        &self.state
    }

    /// Copy the current recipe to the clipboard as plain text.
    ///
    /// Returns whether anything was copied. Failures are logged and leave the
    /// session state untouched.
    pub async fn export(&self, clipboard: &dyn Clipboard) -> bool {
        let Some(recipe) = self.recipe() else {
            return false;
        };

        match clipboard.write_text(&recipe.to_plain_text()).await {
            Ok(()) => {
                info!("Recipe copied to clipboard");
                true
            }
            Err(e) => {
                error!("Failed to copy recipe: {}", e);
                false
            }
        }
    }
}
