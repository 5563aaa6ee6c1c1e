pub mod config;
pub mod corpus;
pub mod error;

// Search core
pub mod search;

// CLI
pub mod cli;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
