pub mod completions;
pub mod models;

pub use completions::{CompletionClient, CompletionRequest, HttpCompletionClient};
pub use models::{ModelCategory, ModelRegistry};
