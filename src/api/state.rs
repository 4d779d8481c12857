use std::sync::Arc;

use crate::ai::Summarizer;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<dyn Summarizer>,
}

impl AppState {
    #[must_use]
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self { summarizer }
    }
}
