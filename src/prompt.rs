/// Fixed instruction block placed ahead of the email data.
pub const PROMPT_INSTRUCTIONS: &str = "You are an expert email summarization and data extraction system.\n\
Process the following block of emails. For each email, extract the sender, subject, and a concise 3-4 bullet point summary of the main request or deadline.\n\
The final output MUST be a single, valid JSON array of objects. Do not include any introductory text or prose.";

/// Delimiter fencing the email data inside the prompt.
pub const EMAIL_FENCE: &str = "---";

/// Build the full prompt sent to the model for the given email text.
///
/// The email text is embedded verbatim.
pub fn build_prompt(email_text: &str) -> String {
    format!(
        "{PROMPT_INSTRUCTIONS}\n\nEMAIL DATA TO ANALYZE:\n{EMAIL_FENCE}\n{email_text}\n{EMAIL_FENCE}\n"
    )
}
