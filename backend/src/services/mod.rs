pub mod gemini_client;
pub mod organizer_service;

pub use gemini_client::{GeminiClient, TextGenerator};
pub use organizer_service::{build_prompt, OrganizerService, ServiceError};
