//! MCP tool modules.
//!
//! One module per OpenDART group (DS001-DS006), plus local corporation code
//! lookups and registry-backed help.

pub mod context;
pub mod corp_code;
mod disclosure;
mod financial;
mod major_event;
mod ownership;
mod periodic;
mod registration;
