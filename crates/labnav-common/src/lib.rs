//! labnav-common — Shared types and errors used across all Lab Navigator crates.

pub mod error;
pub mod doc_type;

// Re-export commonly used types
pub use doc_type::{DocType, DocTypeAllowList};
pub use error::{NavigatorError, Result};
