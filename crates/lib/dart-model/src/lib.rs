//! Data model and endpoint catalogue for dart-mcp.
//!
//! This crate defines the response envelope shared by the HTTP client and the
//! MCP surface, the corporation record read from the corp-code listing, the
//! request parameter structs for every OpenDART endpoint, and the endpoint
//! path constants.

pub mod models;
pub mod requests;
pub mod schema;

pub use models::*;
pub use requests::*;
