//! Cursor filter and sort derivation
//!
//! Connections page over the stable `_id` key: forward pages select records
//! strictly after the cursor in ascending order, backward pages strictly
//! before it in descending order. These are typed values; the storage layer
//! lowers them to driver-specific filters.

use super::arguments::ConnectionDirection;

/// Half-open id range selecting records strictly past a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorRange<C> {
    /// Select records with id strictly greater than this
    pub after: Option<C>,
    /// Select records with id strictly less than this
    pub before: Option<C>,
}

impl<C> CursorRange<C> {
    pub fn unbounded() -> Self {
        Self {
            after: None,
            before: None,
        }
    }
}

/// Sort direction over the connection ordering key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Derive the storage filter for a paging request
pub fn cursor_range<C>(cursor: Option<C>, direction: ConnectionDirection) -> CursorRange<C> {
    match direction {
        ConnectionDirection::Forward => CursorRange {
            after: cursor,
            before: None,
        },
        ConnectionDirection::Backward => CursorRange {
            after: None,
            before: cursor,
        },
    }
}

/// Derive the fetch order for a paging request
///
/// Backward pages are fetched descending and reversed by the transformer, so
/// edges always leave the API in ascending order.
pub fn sort_order(direction: ConnectionDirection) -> SortOrder {
    match direction {
        ConnectionDirection::Forward => SortOrder::Ascending,
        ConnectionDirection::Backward => SortOrder::Descending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_range_binds_after() {
        let range = cursor_range(Some(7), ConnectionDirection::Forward);
        assert_eq!(range.after, Some(7));
        assert_eq!(range.before, None);
    }

    #[test]
    fn test_backward_range_binds_before() {
        let range = cursor_range(Some(7), ConnectionDirection::Backward);
        assert_eq!(range.after, None);
        assert_eq!(range.before, Some(7));
    }

    #[test]
    fn test_no_cursor_is_unbounded() {
        let range = cursor_range::<i32>(None, ConnectionDirection::Forward);
        assert_eq!(range, CursorRange::unbounded());
    }

    #[test]
    fn test_sort_orders() {
        assert_eq!(
            sort_order(ConnectionDirection::Forward),
            SortOrder::Ascending
        );
        assert_eq!(
            sort_order(ConnectionDirection::Backward),
            SortOrder::Descending
        );
    }
}
