// Cross-cutting prompt fragments shared by every caller of the LLM client.

/// Default system message sent ahead of every user prompt.
pub const ASSISTANT_SYSTEM: &str = "You are a helpful assistant.";
