//! Shared error and string helpers.

// Submodule declarations
pub mod error;
pub mod slug;

// Re-exports
pub use error::{Error, Result};
pub use slug::slug;
