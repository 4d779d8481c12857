//! All AI/LLM functionality

pub mod client;
pub mod output;
pub mod schema;

// Re-export main types for convenience
pub use client::{GeminiClient, Summarizer};
pub use output::parse_summary_items;
