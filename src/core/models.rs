use serde::{Deserialize, Serialize};

/// Inbound body of `POST /summarize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizationRequest {
    pub text: String,
}

/// One summarized email as produced by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryItem {
    pub sender: String,
    pub subject: String,
    pub summary: Vec<String>,
}

/// Items in the order the model returned them.
pub type SummarizationResponse = Vec<SummaryItem>;

/// Bullet count the prompt asks the model for.
pub const EXPECTED_BULLETS: std::ops::RangeInclusive<usize> = 3..=4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
