// Library exports for commit-relay
// This allows the modules to be imported in tests and external code

pub mod config;
pub mod error;
pub mod llm;
pub mod relay;
pub mod server;
