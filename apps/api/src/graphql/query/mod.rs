//! GraphQL queries for Commune
//!
//! This module contains all query resolvers, organized by domain.

mod chat;

pub use chat::ChatQuery;

use async_graphql::MergedObject;

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
pub struct Query(ChatQuery);
