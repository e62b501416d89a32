//! Storage access layer for Commune
//!
//! This module provides the data access layer, centralizing all database
//! operations behind store traits so that:
//! - resolvers stay free of driver-specific query syntax
//! - tests can inject in-memory implementations
//! - collection names and filters live in one place

pub mod chat;

pub use chat::{ChatStore, MongoChatStore};
