//! Shared relay path used by every resume entry point.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::prompts::ASSISTANT_SYSTEM;
use crate::llm_client::LlmClient;
use crate::relay::prompts::build_review_prompt;

/// Builds the review prompt, makes one upstream call and returns the model's suggestions.
pub async fn relay_resume(resume_text: &str, llm: &LlmClient) -> Result<String, AppError> {
    info!("Relaying resume ({} bytes) for review", resume_text.len());
    let prompt = build_review_prompt(resume_text);

    let suggestion = llm.complete(ASSISTANT_SYSTEM, &prompt).await?;

    debug!("Received {} bytes of suggestions", suggestion.len());
    Ok(suggestion)
}
