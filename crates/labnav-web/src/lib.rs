//! labnav-web — Web shell for the RNA Lab Navigator dashboards.
//! Serves five pages behind one navigation bar:
//!   - Search (home) with the document-type filter
//!   - Protocol upload
//!   - Feedback analytics
//!   - Search quality metrics
//!   - Security audit
//!
//! The page bodies are client-side components; this crate owns routing,
//! the active-page state, and the shared chrome around them.

pub mod routes;
pub mod navigation;
pub mod filter;
pub mod pages;
pub mod composer;
pub mod backend;
pub mod error;
pub mod router;
pub mod handlers;
pub mod state;
pub mod sse;
