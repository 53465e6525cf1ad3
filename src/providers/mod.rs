mod anthropic;
mod factory;
mod ollama;
mod open_ai;
pub mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use ollama::OllamaProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::{build_prompt, RECIPE_SYSTEM_PROMPT};

use crate::error::ImportError;
use async_trait::async_trait;
use serde_json::{json, Value};

/// Unified trait for all LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "anthropic")
    fn provider_name(&self) -> &str;

    /// Run one generation with a system instruction and a user prompt.
    ///
    /// Returns the generated text, which is empty when the service answered
    /// without any content.
    async fn generate(&self, system_prompt: &str, prompt: &str) -> Result<String, ImportError>;
}

/// Read a JSON body, turning HTTP and API-level failures into
/// [`ImportError::Generation`].
async fn read_json_response(
    provider: &str,
    response: reqwest::Response,
) -> Result<Value, ImportError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ImportError::Generation(format!(
            "{} API returned {}: {}",
            provider, status, body
        )));
    }

    let value: Value = serde_json::from_str(&body).map_err(|e| {
        ImportError::Generation(format!("Invalid {} response: {}", provider, e))
    })?;

    if let Some(error) = value.get("error").filter(|e| !e.is_null()) {
        let error_message = error
            .as_str()
            .unwrap_or_else(|| error["message"].as_str().unwrap_or("Unknown error"));
        return Err(ImportError::Generation(format!(
            "{} API error: {}",
            provider, error_message
        )));
    }

    Ok(value)
}

/// Body of an OpenAI-style chat completion. Sampling options are only sent
/// when configured, so the service defaults apply otherwise.
fn chat_completion_body(
    model: &str,
    system_prompt: &str,
    prompt: &str,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
) -> Value {
    let mut body = json!({
        "model": model,
        "messages": [
            {"role": "system", "content": system_prompt},
            {"role": "user", "content": prompt}
        ]
    });
    if let Some(temperature) = temperature {
        body["temperature"] = json!(temperature);
    }
    if let Some(max_tokens) = max_tokens {
        body["max_tokens"] = json!(max_tokens);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_completion_body_without_sampling_options() {
        let body = chat_completion_body("gpt-3.5-turbo", "system", "prompt", None, None);
        assert_eq!(
            body,
            json!({
                "model": "gpt-3.5-turbo",
                "messages": [
                    {"role": "system", "content": "system"},
                    {"role": "user", "content": "prompt"}
                ]
            })
        );
    }

    #[test]
    fn test_chat_completion_body_with_sampling_options() {
        let body = chat_completion_body("llama3", "system", "prompt", Some(0.5), Some(800));
        assert_eq!(body["temperature"], json!(0.5));
        assert_eq!(body["max_tokens"], json!(800));
    }
}
