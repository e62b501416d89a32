//! GraphQL type definitions for Commune
//!
//! This module contains the GraphQL object types that are exposed
//! through the API.

mod chat;

pub use chat::{Chat, DirectChat, GroupChat};
