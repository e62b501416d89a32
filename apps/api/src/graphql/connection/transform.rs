//! Connection assembly
//!
//! Pure transformation from a fetched record window into the GraphQL
//! connection shape. Queries fetch one look-ahead record past the requested
//! limit; trimming it is what drives the page-info booleans.

use async_graphql::{OutputType, SimpleObject};
use bson::oid::ObjectId;

use super::arguments::{ConnectionDirection, ParsedConnectionArguments};
use super::cursor::encode_cursor;
use crate::graphql::types::Chat;

/// A record type that knows the id its connection cursors are built from
pub trait ConnectionNode {
    fn cursor_id(&self) -> ObjectId;
}

/// A node together with its position cursor
#[derive(SimpleObject)]
#[graphql(concrete(name = "ChatEdge", params(Chat)))]
#[cfg_attr(test, graphql(concrete(name = "IntEdge", params(i32))))]
pub struct ConnectionEdge<T: OutputType> {
    pub node: T,
    pub cursor: String,
}

/// Relay page info for a connection window
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct ConnectionPageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

/// Paginated query result: edges, page info, and the total number of
/// qualifying records regardless of the window
#[derive(SimpleObject)]
#[graphql(concrete(name = "ChatConnection", params(Chat)))]
#[cfg_attr(test, graphql(concrete(name = "IntConnection", params(i32))))]
pub struct DefaultConnection<T: OutputType>
where
    ConnectionEdge<T>: OutputType,
{
    pub edges: Vec<ConnectionEdge<T>>,
    pub page_info: ConnectionPageInfo,
    pub total_count: u64,
}

/// Assemble a connection from a fetched window
///
/// `object_list` arrives in fetch order (ascending for forward requests,
/// descending for backward ones) and may carry one look-ahead record beyond
/// `parsed.limit`. Edges are always emitted in ascending order so
/// `start_cursor`/`end_cursor` mean the same thing in both directions. Pure
/// function of its inputs; no I/O happens here.
pub fn transform_to_connection<T>(
    mut object_list: Vec<T>,
    parsed: &ParsedConnectionArguments<ObjectId>,
    total_count: u64,
) -> DefaultConnection<T>
where
    T: OutputType + ConnectionNode,
    ConnectionEdge<T>: OutputType,
{
    let limit = parsed.limit.max(0) as usize;
    let has_more_in_window = object_list.len() > limit;
    object_list.truncate(limit);

    let (has_next_page, has_previous_page) = match parsed.direction {
        ConnectionDirection::Forward => (has_more_in_window, parsed.cursor.is_some()),
        ConnectionDirection::Backward => (parsed.cursor.is_some(), has_more_in_window),
    };

    // Backward windows were fetched descending; restore canonical order.
    if parsed.direction == ConnectionDirection::Backward {
        object_list.reverse();
    }

    let edges: Vec<ConnectionEdge<T>> = object_list
        .into_iter()
        .map(|node| ConnectionEdge {
            cursor: encode_cursor(&node.cursor_id()),
            node,
        })
        .collect();

    let page_info = ConnectionPageInfo {
        has_next_page,
        has_previous_page,
        start_cursor: edges.first().map(|edge| edge.cursor.clone()),
        end_cursor: edges.last().map(|edge| edge.cursor.clone()),
    };

    DefaultConnection {
        edges,
        page_info,
        total_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(n: u8) -> ObjectId {
        ObjectId::from_bytes([n; 12])
    }

    impl ConnectionNode for i32 {
        fn cursor_id(&self) -> ObjectId {
            oid(*self as u8)
        }
    }

    fn parsed(
        direction: ConnectionDirection,
        cursor: Option<ObjectId>,
        limit: i64,
    ) -> ParsedConnectionArguments<ObjectId> {
        ParsedConnectionArguments {
            direction,
            cursor,
            limit,
        }
    }

    #[test]
    fn test_forward_look_ahead_sets_next_page() {
        let args = parsed(ConnectionDirection::Forward, None, 3);
        let connection = transform_to_connection(vec![1, 2, 3, 4], &args, 9);

        assert_eq!(connection.edges.len(), 3);
        assert!(connection.page_info.has_next_page);
        assert!(!connection.page_info.has_previous_page);
        assert_eq!(connection.total_count, 9);
        assert_eq!(
            connection.page_info.start_cursor.as_deref(),
            Some(encode_cursor(&oid(1)).as_str())
        );
        assert_eq!(
            connection.page_info.end_cursor.as_deref(),
            Some(encode_cursor(&oid(3)).as_str())
        );
    }

    #[test]
    fn test_forward_exact_window_has_no_next_page() {
        let args = parsed(ConnectionDirection::Forward, None, 3);
        let connection = transform_to_connection(vec![1, 2], &args, 2);

        assert_eq!(connection.edges.len(), 2);
        assert!(!connection.page_info.has_next_page);
    }

    #[test]
    fn test_forward_cursor_implies_previous_page() {
        let args = parsed(ConnectionDirection::Forward, Some(oid(1)), 2);
        let connection = transform_to_connection(vec![2, 3], &args, 3);

        assert!(connection.page_info.has_previous_page);
        assert!(!connection.page_info.has_next_page);
    }

    #[test]
    fn test_backward_window_reversed_to_ascending() {
        // Fetched descending with one look-ahead past the window.
        let args = parsed(ConnectionDirection::Backward, Some(oid(6)), 3);
        let connection = transform_to_connection(vec![5, 4, 3, 2], &args, 6);

        let nodes: Vec<i32> = connection.edges.iter().map(|e| e.node).collect();
        assert_eq!(nodes, vec![3, 4, 5]);
        assert!(connection.page_info.has_previous_page);
        assert!(connection.page_info.has_next_page);
        assert_eq!(
            connection.page_info.start_cursor.as_deref(),
            Some(encode_cursor(&oid(3)).as_str())
        );
        assert_eq!(
            connection.page_info.end_cursor.as_deref(),
            Some(encode_cursor(&oid(5)).as_str())
        );
    }

    #[test]
    fn test_empty_window() {
        let args = parsed(ConnectionDirection::Forward, None, 5);
        let connection = transform_to_connection(Vec::<i32>::new(), &args, 0);

        assert!(connection.edges.is_empty());
        assert!(!connection.page_info.has_next_page);
        assert_eq!(connection.page_info.start_cursor, None);
        assert_eq!(connection.page_info.end_cursor, None);
    }
}
