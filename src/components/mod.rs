//! Reusable view components shared by the pages.

pub mod message_group;
pub mod toast_shelf;
pub mod top_bar;
