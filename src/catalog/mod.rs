//! Static project catalog: the portfolio's case studies and their sample
//! datasets.
//!
//! Everything in this module is defined at compile time and never mutated at
//! runtime. The exporter reads from it; nothing writes to it.

// Submodule declarations
pub mod projects;
pub mod samples;
pub mod types;

// Re-exports
pub use projects::{PROJECTS, find_project};
pub use types::{Highlight, Project, Record, Value, field};
