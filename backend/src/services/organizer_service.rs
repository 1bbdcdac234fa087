use std::sync::Arc;

use serde_json::Value;

use crate::services::gemini_client::TextGenerator;

#[derive(Debug)]
pub enum ServiceError {
    InvalidInput(String),
    Http(String),
    EmptyResponse,
    MalformedResponse(String),
}

const PROMPT_HEADER: &str = r#"You are an expert conversational analyst. I will provide you with a raw chat transcript.
Read the ENTIRE transcript and group the conversation into 4 to 5 distinct semantic blocks based on the topics discussed.

Respond ONLY with a valid JSON object matching this exact schema:
{
  "blocks": [
    {
      "category": "Topic Name (e.g., Pricing Strategy)",
      "messages": [
        "User: ...",
        "Assistant: ..."
      ]
    }
  ]
}"#;

/// The transcript goes in verbatim, fenced so the model cannot confuse it
/// with the instructions above it.
pub fn build_prompt(conversation: &str) -> String {
    format!(
        "{}\n\nHere is the raw transcript:\n\"\"\"\n{}\n\"\"\"\n",
        PROMPT_HEADER, conversation
    )
}

pub struct OrganizerService {
    generator: Arc<dyn TextGenerator>,
}

impl OrganizerService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Run one transcript through the model and hand back the parsed JSON.
    /// The block/category/message shape inside it is whatever the model
    /// produced; callers forward it unchanged.
    pub async fn organize(&self, conversation: &str) -> Result<Value, ServiceError> {
        if conversation.is_empty() {
            return Err(ServiceError::InvalidInput(
                "A conversation string is required.".to_string(),
            ));
        }

        let prompt = build_prompt(conversation);
        let text = self.generator.generate(&prompt).await?;

        let text = match text {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(ServiceError::EmptyResponse),
        };

        serde_json::from_str(&text).map_err(|e| ServiceError::MalformedResponse(e.to_string()))
    }
}
