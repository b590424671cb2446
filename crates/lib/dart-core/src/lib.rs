//! Core services for dart-mcp.
//!
//! This crate owns the OpenDART HTTP client wrapper and its response
//! classification, one API module per OpenDART endpoint group, archive
//! materialization for the download endpoints, and the local corp-code index.

pub mod api;
pub mod archive;
pub mod client;
pub mod corp_code;
pub mod response;
pub mod services;
