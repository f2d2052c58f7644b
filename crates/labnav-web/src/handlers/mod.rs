//! HTTP handlers for all web routes.

pub mod pages;
pub mod api;
