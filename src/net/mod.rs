//! Network layer: wire types and REST helpers for the backend API.

pub mod api;
pub mod types;
