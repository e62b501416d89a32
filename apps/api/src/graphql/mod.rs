//! GraphQL schema and resolvers for Commune
//!
//! This module contains the async-graphql schema including:
//! - Query resolvers for chats
//! - The shared cursor-based connection layer used by paginated queries
//! - Type definitions for all GraphQL objects

pub mod connection;
pub mod query;
pub mod schema;
pub mod types;

pub use connection::PaginationConfig;
pub use schema::{build_schema, CommuneSchema, SchemaBuilder};
