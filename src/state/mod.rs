//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `material`, etc.) so individual
//! components can depend on small focused models. Decision logic lives here
//! as plain functions over plain structs; components only wire signals.

pub mod chat;
pub mod material;
pub mod preview;
pub mod toasts;
