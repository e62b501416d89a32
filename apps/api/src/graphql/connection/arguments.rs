//! Connection argument validation
//!
//! Normalizes the four relay paging arguments (`first`/`after`,
//! `last`/`before`) into a single directional request, enforcing the maximum
//! page size. Validation accumulates every problem it finds so a response can
//! report multiple argument errors at once, including cursor-resolution
//! failures from the caller-supplied `parse_cursor` callback.

use std::future::Future;

use serde::Serialize;

use crate::error::ApiError;

/// Raw relay paging arguments as received from the client
#[derive(Debug, Clone, Default)]
pub struct ConnectionArguments {
    pub first: Option<i32>,
    pub after: Option<String>,
    pub last: Option<i32>,
    pub before: Option<String>,
}

/// Which way a connection request pages through the result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionDirection {
    /// `first`/`after`: ascending from the cursor
    Forward,
    /// `last`/`before`: descending from the cursor
    Backward,
}

/// A single client-facing validation problem, with the path of the argument
/// that caused it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentError {
    pub message: String,
    pub path: Vec<String>,
}

impl ArgumentError {
    pub fn new(message: impl Into<String>, path: &[&str]) -> Self {
        Self {
            message: message.into(),
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Validated paging request derived from [`ConnectionArguments`]
#[derive(Debug, Clone)]
pub struct ParsedConnectionArguments<C> {
    pub direction: ConnectionDirection,
    /// Decoded cursor, when the client supplied one
    pub cursor: Option<C>,
    /// Requested page size, guaranteed in `1..=maximum_limit`
    pub limit: i64,
}

/// Context handed to the `parse_cursor` callback so its errors can reference
/// the offending argument
#[derive(Debug, Clone)]
pub struct CursorArguments {
    /// Raw cursor string as supplied by the client
    pub value: String,
    /// Name of the argument that carried the cursor (`after` or `before`)
    pub name: &'static str,
    /// Argument path for client-facing error reporting
    pub path: Vec<String>,
}

impl CursorArguments {
    fn new(value: &str, name: &'static str) -> Self {
        Self {
            value: value.to_string(),
            name,
            path: vec![name.to_string()],
        }
    }
}

/// Failure from a `parse_cursor` callback
#[derive(Debug)]
pub enum CursorParseError {
    /// The cursor is malformed or refers to no existing record
    Invalid(Vec<ArgumentError>),
    /// Storage failed while checking the cursor; not a client error
    Store(ApiError),
}

/// Failure from [`parse_connection_arguments`]
#[derive(Debug)]
pub enum ConnectionError {
    /// Client supplied bad arguments; `errors` carries per-field detail
    InvalidArguments(Vec<ArgumentError>),
    /// Storage failure, propagated unchanged
    Store(ApiError),
}

/// Validate relay paging arguments and resolve the cursor
///
/// `parse_cursor` is only invoked when the argument combination is otherwise
/// coherent; its validation errors are appended to any limit violations found
/// here so all problems reach the client in one response. Storage failures
/// inside the callback short-circuit instead, they are server faults.
pub async fn parse_connection_arguments<C, F, Fut>(
    args: &ConnectionArguments,
    maximum_limit: i64,
    parse_cursor: F,
) -> Result<ParsedConnectionArguments<C>, ConnectionError>
where
    F: FnOnce(CursorArguments) -> Fut,
    Fut: Future<Output = Result<C, CursorParseError>>,
{
    let mut errors = Vec::new();

    match (args.first, args.last) {
        (Some(_), Some(_)) => errors.push(ArgumentError::new(
            "Argument last cannot be provided with argument first.",
            &["last"],
        )),
        (None, None) => errors.push(ArgumentError::new(
            "Exactly one of the arguments first or last must be provided.",
            &["first"],
        )),
        _ => {}
    }

    if args.first.is_some() && args.before.is_some() {
        errors.push(ArgumentError::new(
            "Argument before cannot be provided with argument first.",
            &["before"],
        ));
    }

    if args.last.is_some() && args.after.is_some() {
        errors.push(ArgumentError::new(
            "Argument after cannot be provided with argument last.",
            &["after"],
        ));
    }

    for (count, name) in [(args.first, "first"), (args.last, "last")] {
        if let Some(count) = count {
            if count < 1 {
                errors.push(ArgumentError::new(
                    format!("Argument {name} must be a positive integer."),
                    &[name],
                ));
            } else if i64::from(count) > maximum_limit {
                errors.push(ArgumentError::new(
                    format!("Argument {name} cannot exceed {maximum_limit}."),
                    &[name],
                ));
            }
        }
    }

    // Direction is only meaningful when exactly one count argument is present.
    let (direction, limit, raw_cursor) = match (args.first, args.last) {
        (Some(first), None) => (
            ConnectionDirection::Forward,
            i64::from(first),
            args.after.as_deref().map(|c| (c, "after")),
        ),
        (None, Some(last)) => (
            ConnectionDirection::Backward,
            i64::from(last),
            args.before.as_deref().map(|c| (c, "before")),
        ),
        _ => return Err(ConnectionError::InvalidArguments(errors)),
    };

    let mut cursor = None;
    if let Some((value, name)) = raw_cursor {
        match parse_cursor(CursorArguments::new(value, name)).await {
            Ok(parsed) => cursor = Some(parsed),
            Err(CursorParseError::Invalid(cursor_errors)) => errors.extend(cursor_errors),
            Err(CursorParseError::Store(store_error)) => {
                return Err(ConnectionError::Store(store_error))
            }
        }
    }

    if !errors.is_empty() {
        return Err(ConnectionError::InvalidArguments(errors));
    }

    Ok(ParsedConnectionArguments {
        direction,
        cursor,
        limit,
    })
}

/// Standard error message for a cursor that does not resolve to a record
pub fn invalid_cursor_error(cursor: &CursorArguments) -> ArgumentError {
    ArgumentError {
        message: format!("Argument {} is an invalid cursor.", cursor.name),
        path: cursor.path.clone(),
    }
}
