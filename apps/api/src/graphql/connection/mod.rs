//! Generic cursor-based connection support for GraphQL resolvers
//!
//! This module implements the relay-style connection contract shared by all
//! paginated queries:
//! - an opaque cursor codec over record ObjectIds
//! - validation of `first`/`after` / `last`/`before` argument combinations,
//!   accumulating per-argument errors instead of short-circuiting
//! - typed filter and sort derivation from the paging direction
//! - a pure transformer assembling edges, page info, and total count
//!
//! Resolvers only supply a `parse_cursor` callback that checks the decoded
//! cursor against their backing collections.

pub mod arguments;
pub mod cursor;
pub mod filter;
pub mod transform;

pub use arguments::{
    invalid_cursor_error, parse_connection_arguments, ArgumentError, ConnectionArguments,
    ConnectionDirection, ConnectionError, CursorArguments, CursorParseError,
    ParsedConnectionArguments,
};
pub use cursor::{decode_cursor, encode_cursor};
pub use filter::{cursor_range, sort_order, CursorRange, SortOrder};
pub use transform::{
    transform_to_connection, ConnectionEdge, ConnectionNode, ConnectionPageInfo, DefaultConnection,
};

use async_graphql::ErrorExtensions;

/// Raise accumulated argument errors as a single GraphQL protocol error
///
/// The extension payload carries `code = INVALID_ARGUMENTS` and the full
/// `{ message, path }` list so clients can report every problem at once.
pub fn invalid_arguments_error(errors: &[ArgumentError]) -> async_graphql::Error {
    let detail = serde_json::to_value(errors)
        .ok()
        .and_then(|value| async_graphql::Value::from_json(value).ok())
        .unwrap_or_default();

    async_graphql::Error::new("Invalid arguments provided.").extend_with(|_, extensions| {
        extensions.set("code", "INVALID_ARGUMENTS");
        extensions.set("errors", detail);
    })
}

/// Map a connection parse failure onto the GraphQL error surface
pub fn connection_error_to_graphql(error: ConnectionError) -> async_graphql::Error {
    match error {
        ConnectionError::InvalidArguments(errors) => invalid_arguments_error(&errors),
        ConnectionError::Store(store_error) => async_graphql::Error::from(store_error),
    }
}

/// Default upper bound on page size when none is configured
pub const DEFAULT_MAX_FETCH_LIMIT: i64 = 100;

/// Page-size bound injected into the GraphQL schema context
#[derive(Debug, Clone, Copy)]
pub struct PaginationConfig {
    /// Maximum number of records a single connection request may ask for
    pub max_fetch_limit: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_fetch_limit: DEFAULT_MAX_FETCH_LIMIT,
        }
    }
}
