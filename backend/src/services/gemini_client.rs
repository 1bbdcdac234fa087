use async_trait::async_trait;
use serde_json::{json, Value};

use crate::services::organizer_service::ServiceError;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Outbound text-generation seam; the organize path only ever talks to this
/// trait.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a prompt with JSON-constrained output and return the model's
    /// text, or `None` when the response carried no text at all.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ServiceError>;
}

pub struct GeminiClient {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }

    // Categorization payload: JSON-only output, low temperature for
    // deterministic grouping
    fn json_payload(prompt: &str) -> Value {
        json!({
            "contents": [
                { "role": "user", "parts": [{ "text": prompt }] }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "temperature": 0.2
            }
        })
    }

    fn plain_payload(prompt: &str) -> Value {
        json!({
            "contents": [
                { "role": "user", "parts": [{ "text": prompt }] }
            ]
        })
    }

    /// Unconstrained call used by the connectivity probe.
    pub async fn generate_plain(&self, prompt: &str) -> Result<Option<String>, ServiceError> {
        self.dispatch(Self::plain_payload(prompt)).await
    }

    async fn dispatch(&self, payload: Value) -> Result<Option<String>, ServiceError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| ServiceError::Http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| ServiceError::Http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // Extract the API's own error message when the body is JSON
            let error_msg = serde_json::from_str::<Value>(&response_text)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(String::from))
                .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text));
            return Err(ServiceError::Http(format!("Gemini API error: {}", error_msg)));
        }

        let v: Value = serde_json::from_str(&response_text)
            .map_err(|e| ServiceError::Http(format!("Failed to parse response JSON: {}", e)))?;

        Ok(extract_text(&v))
    }
}

/// Pull the first text part out of a `generateContent` response.
fn extract_text(response_json: &Value) -> Option<String> {
    response_json["candidates"][0]["content"]["parts"]
        .as_array()
        .and_then(|parts| parts.iter().find_map(|part| part["text"].as_str()))
        .map(|s| s.to_string())
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ServiceError> {
        self.dispatch(Self::json_payload(prompt)).await
    }
}
