//! Top-level routed pages.

pub mod chat;
pub mod material;
