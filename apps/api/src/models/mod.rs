//! Database document models for Commune

pub mod chat;

pub use chat::{DirectChatDocument, GroupChatDocument};
