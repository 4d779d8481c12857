//! HTTP surface: router, handler and response helpers

pub mod handler;
pub mod helpers;
pub mod router;
pub mod state;

// Re-export the main entry points for convenience
pub use handler::summarize_emails;
pub use router::build_router;
pub use state::AppState;
