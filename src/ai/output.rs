use tracing::warn;

use crate::core::models::{EXPECTED_BULLETS, SummarizationResponse};
use crate::errors::SummarizerError;

/// Parse the model's raw JSON answer into summary items.
///
/// The structure is enforced; the bullet count is only checked loosely since
/// the model sometimes returns fewer bullets for short emails.
///
/// # Errors
///
/// Returns [`SummarizerError::ParseError`] when the text is not a JSON array of
/// `{ sender, subject, summary[] }` objects.
pub fn parse_summary_items(raw: &str) -> Result<SummarizationResponse, SummarizerError> {
    let items: SummarizationResponse = serde_json::from_str(raw.trim())
        .map_err(|e| SummarizerError::ParseError(format!("Model output is not a summary array: {e}")))?;

    for (idx, item) in items.iter().enumerate() {
        if !EXPECTED_BULLETS.contains(&item.summary.len()) {
            warn!(
                index = idx,
                bullets = item.summary.len(),
                "Summary item has an unexpected number of bullet points"
            );
        }
    }

    Ok(items)
}
