//! Chat queries for the Commune GraphQL API
//!
//! This module provides queries over the two chat collections:
//! - getChatsByUserId: paginated union of a user's direct and group chats
//! - directChatById / groupChatById: single-record lookups

use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use bson::oid::ObjectId;
use futures_util::try_join;

use crate::graphql::connection::{
    connection_error_to_graphql, cursor_range, decode_cursor, invalid_arguments_error,
    invalid_cursor_error, parse_connection_arguments, sort_order, transform_to_connection,
    ArgumentError, ConnectionArguments, CursorArguments, CursorParseError, DefaultConnection,
    PaginationConfig, SortOrder,
};
use crate::graphql::types::{Chat, DirectChat, GroupChat};
use crate::repositories::ChatStore;

/// Chat-related queries
#[derive(Default)]
pub struct ChatQuery;

#[Object]
impl ChatQuery {
    /// Paginated list of every chat the given user is a member of
    ///
    /// Direct and group chats live in separate collections; the two result
    /// lists are merged and re-sorted by record id so edges form one
    /// consistent order regardless of the split. Invalid paging arguments
    /// fail with an `INVALID_ARGUMENTS` error before storage is touched.
    async fn get_chats_by_user_id(
        &self,
        ctx: &Context<'_>,
        id: ID,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> Result<DefaultConnection<Chat>> {
        let store = ctx.data::<Arc<dyn ChatStore>>()?;
        let pagination = ctx.data::<PaginationConfig>()?;

        let user_id = parse_object_id(&id, "id")?;

        let args = ConnectionArguments {
            first,
            after,
            last,
            before,
        };

        let parsed = parse_connection_arguments(&args, pagination.max_fetch_limit, |cursor| {
            parse_chat_cursor(store.as_ref(), cursor)
        })
        .await
        .map_err(connection_error_to_graphql)?;

        let range = cursor_range(parsed.cursor, parsed.direction);
        let order = sort_order(parsed.direction);

        // One look-ahead record per collection; the transformer trims it.
        let window = parsed.limit + 1;

        // Independent reads, fired together.
        let (direct_chats, group_chats, direct_count, group_count) = try_join!(
            store.find_direct_chats(user_id, &range, order, window),
            store.find_group_chats(user_id, &range, order, window),
            store.count_direct_chats(user_id),
            store.count_group_chats(user_id),
        )?;

        let mut chats: Vec<Chat> = direct_chats
            .into_iter()
            .map(Chat::from)
            .chain(group_chats.into_iter().map(Chat::from))
            .collect();

        // Restore one total order over the merged lists, then narrow back to
        // the requested window. The union's first window records past the
        // cursor are always contained in the two per-collection windows.
        chats.sort_by_key(|chat| chat.record_id().bytes());
        if order == SortOrder::Descending {
            chats.reverse();
        }
        chats.truncate(window as usize);

        let total_count = direct_count + group_count;

        Ok(transform_to_connection(chats, &parsed, total_count))
    }

    /// Look up a single direct chat by id
    async fn direct_chat_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<DirectChat> {
        let store = ctx.data::<Arc<dyn ChatStore>>()?;
        let chat_id = parse_object_id(&id, "id")?;

        let chat = store
            .direct_chat_by_id(chat_id)
            .await?
            .ok_or_else(|| not_found_error("Direct chat not found."))?;

        Ok(chat.into())
    }

    /// Look up a single group chat by id
    async fn group_chat_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<GroupChat> {
        let store = ctx.data::<Arc<dyn ChatStore>>()?;
        let chat_id = parse_object_id(&id, "id")?;

        let chat = store
            .group_chat_by_id(chat_id)
            .await?
            .ok_or_else(|| not_found_error("Group chat not found."))?;

        Ok(chat.into())
    }
}

/// Validate a cursor for the chat connection
///
/// Decodes the opaque token and checks the id against the direct-chat
/// collection first, falling back to group chats. A cursor that resolves to
/// no record in either collection is a client error on the carrying argument.
async fn parse_chat_cursor(
    store: &dyn ChatStore,
    cursor: CursorArguments,
) -> std::result::Result<ObjectId, CursorParseError> {
    let Some(chat_id) = decode_cursor(&cursor.value) else {
        return Err(CursorParseError::Invalid(vec![invalid_cursor_error(
            &cursor,
        )]));
    };

    let exists = match store
        .direct_chat_by_id(chat_id)
        .await
        .map_err(CursorParseError::Store)?
    {
        Some(_) => true,
        None => store
            .group_chat_by_id(chat_id)
            .await
            .map_err(CursorParseError::Store)?
            .is_some(),
    };

    if exists {
        Ok(chat_id)
    } else {
        Err(CursorParseError::Invalid(vec![invalid_cursor_error(
            &cursor,
        )]))
    }
}

/// Parse a GraphQL `ID` argument as an ObjectId
fn parse_object_id(id: &ID, name: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id.as_str()).map_err(|_| {
        invalid_arguments_error(&[ArgumentError::new(
            format!("Argument {name} is not a valid id."),
            &[name],
        )])
    })
}

/// Descriptive not-found error for single-record lookups
fn not_found_error(message: &str) -> async_graphql::Error {
    async_graphql::Error::new(message)
        .extend_with(|_, extensions| extensions.set("code", "NOT_FOUND"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_accepts_hex() {
        let id = ObjectId::new();
        let parsed = parse_object_id(&ID(id.to_hex()), "id").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_object_id_rejects_garbage() {
        assert!(parse_object_id(&ID("not-an-id".to_string()), "id").is_err());
    }
}
