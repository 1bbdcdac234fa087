use anyhow::{bail, Result};

use chat_organizer_backend::config::Config;
use chat_organizer_backend::services::GeminiClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    if config.gemini_api_key.is_empty() {
        bail!("GEMINI_API_KEY environment variable is not set");
    }

    println!("Testing Gemini API connection...");

    let client = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_model.clone());
    match client
        .generate_plain("Respond with exactly: \"Connection successful! Gemini is ready.\"")
        .await
    {
        Ok(Some(reply)) => {
            println!("\n✓ Success!");
            println!("Response: {}", reply);
            Ok(())
        }
        Ok(None) => bail!("Gemini returned a response with no text"),
        Err(err) => {
            eprintln!("\n✗ Error connecting to Gemini:");
            bail!("{:?}", err)
        }
    }
}
