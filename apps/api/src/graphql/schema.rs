//! GraphQL schema builder for Commune
//!
//! This module provides the schema construction for the async-graphql API.

use std::sync::Arc;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use super::connection::PaginationConfig;
use super::query::Query;
use crate::repositories::ChatStore;

/// The Commune GraphQL schema type
pub type CommuneSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema with required services
pub struct SchemaBuilder {
    store: Option<Arc<dyn ChatStore>>,
    pagination: PaginationConfig,
}

impl SchemaBuilder {
    /// Create a new schema builder
    pub fn new() -> Self {
        Self {
            store: None,
            pagination: PaginationConfig::default(),
        }
    }

    /// Set the chat store backing the resolvers
    pub fn store(mut self, store: Arc<dyn ChatStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Override the pagination limits
    ///
    /// If not set, [`PaginationConfig::default`] applies.
    pub fn pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    /// Build the schema with all configured services
    ///
    /// # Panics
    /// Panics if the chat store is not configured
    pub fn build(self) -> CommuneSchema {
        let store = self.store.expect("chat store is required");

        Schema::build(Query::default(), EmptyMutation, EmptySubscription)
            .data(store)
            .data(self.pagination)
            .finish()
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new GraphQL schema with the provided services
///
/// This is a convenience function for quickly creating a schema with the
/// default pagination limits.
pub fn build_schema(store: Arc<dyn ChatStore>) -> CommuneSchema {
    SchemaBuilder::new().store(store).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_builder_default() {
        let builder = SchemaBuilder::default();
        assert!(builder.store.is_none());
        assert_eq!(
            builder.pagination.max_fetch_limit,
            PaginationConfig::default().max_fetch_limit
        );
    }
}
