// Prompt constants for the resume review relay.

/// Resume review prompt template. Replace `{resume_text}` before sending.
pub const RESUME_REVIEW_PROMPT_TEMPLATE: &str = "You are a professional resume reviewer. \
Analyze the following resume text and provide 3-5 actionable suggestions for improvement.\n\n\
Resume Text:\n\"{resume_text}\"\n\n\
Suggestions:";

/// Builds the review prompt. The resume text is inserted verbatim.
pub fn build_review_prompt(resume_text: &str) -> String {
    // Split on the placeholder so a literal "{resume_text}" inside the resume is left alone.
    match RESUME_REVIEW_PROMPT_TEMPLATE.split_once("{resume_text}") {
        Some((head, tail)) => format!("{head}{resume_text}{tail}"),
        None => RESUME_REVIEW_PROMPT_TEMPLATE.to_string(),
    }
}
