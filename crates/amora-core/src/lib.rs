pub mod chat;
pub mod error;
pub mod feed;
pub mod gallery;
pub mod profile;
pub mod secret;

// Re-export common error type
pub use error::AmoraError;
