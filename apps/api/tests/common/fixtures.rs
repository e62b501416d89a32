//! Test fixtures: in-memory chat store and document builders

use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use chrono::{DateTime, TimeZone, Utc};

use commune_api::error::ApiResult;
use commune_api::graphql::connection::{CursorRange, PaginationConfig, SortOrder};
use commune_api::graphql::{CommuneSchema, SchemaBuilder};
use commune_api::models::{DirectChatDocument, GroupChatDocument};
use commune_api::repositories::ChatStore;
use commune_test_utils::MemoryCollection;

/// Deterministic ObjectId for tests; ids order by their first byte
pub fn oid(n: u8) -> ObjectId {
    ObjectId::from_bytes([n; 12])
}

/// Fixed timestamp so fixtures are reproducible
pub fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, hour % 24, 0, 0).unwrap()
}

/// Build a direct chat document with the given id byte and members
pub fn direct_chat(id: u8, users: &[ObjectId]) -> DirectChatDocument {
    DirectChatDocument {
        id: oid(id),
        users: users.to_vec(),
        creator_id: users[0],
        organization: oid(200),
        created_at: at(u32::from(id)),
        updated_at: at(u32::from(id)),
    }
}

/// Build a group chat document with the given id byte and members
pub fn group_chat(id: u8, title: &str, users: &[ObjectId]) -> GroupChatDocument {
    GroupChatDocument {
        id: oid(id),
        title: title.to_string(),
        users: users.to_vec(),
        creator_id: users[0],
        organization: oid(200),
        created_at: at(u32::from(id)),
        updated_at: at(u32::from(id)),
    }
}

/// In-memory [`ChatStore`] over [`MemoryCollection`]s
///
/// Mirrors the Mongo store's contract: membership filter, strict cursor
/// bounds over `_id`, requested order, bounded result size.
#[derive(Clone, Default)]
pub struct InMemoryChatStore {
    pub direct_chats: MemoryCollection<DirectChatDocument>,
    pub group_chats: MemoryCollection<GroupChatDocument>,
}

impl InMemoryChatStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn in_range(id: ObjectId, range: &CursorRange<ObjectId>) -> bool {
    let past_after = range.after.map_or(true, |after| id.bytes() > after.bytes());
    let before_end = range
        .before
        .map_or(true, |before| id.bytes() < before.bytes());
    past_after && before_end
}

fn window<T>(mut docs: Vec<T>, key: impl Fn(&T) -> [u8; 12], order: SortOrder, limit: i64) -> Vec<T> {
    docs.sort_by_key(|doc| key(doc));
    if order == SortOrder::Descending {
        docs.reverse();
    }
    docs.truncate(limit.max(0) as usize);
    docs
}

#[async_trait]
impl ChatStore for InMemoryChatStore {
    async fn find_direct_chats(
        &self,
        user_id: ObjectId,
        range: &CursorRange<ObjectId>,
        order: SortOrder,
        limit: i64,
    ) -> ApiResult<Vec<DirectChatDocument>> {
        let docs = self
            .direct_chats
            .find(|chat| chat.users.contains(&user_id) && in_range(chat.id, range));
        Ok(window(docs, |chat| chat.id.bytes(), order, limit))
    }

    async fn find_group_chats(
        &self,
        user_id: ObjectId,
        range: &CursorRange<ObjectId>,
        order: SortOrder,
        limit: i64,
    ) -> ApiResult<Vec<GroupChatDocument>> {
        let docs = self
            .group_chats
            .find(|chat| chat.users.contains(&user_id) && in_range(chat.id, range));
        Ok(window(docs, |chat| chat.id.bytes(), order, limit))
    }

    async fn count_direct_chats(&self, user_id: ObjectId) -> ApiResult<u64> {
        Ok(self.direct_chats.count(|chat| chat.users.contains(&user_id)))
    }

    async fn count_group_chats(&self, user_id: ObjectId) -> ApiResult<u64> {
        Ok(self.group_chats.count(|chat| chat.users.contains(&user_id)))
    }

    async fn direct_chat_by_id(&self, id: ObjectId) -> ApiResult<Option<DirectChatDocument>> {
        Ok(self.direct_chats.find_one(|chat| chat.id == id))
    }

    async fn group_chat_by_id(&self, id: ObjectId) -> ApiResult<Option<GroupChatDocument>> {
        Ok(self.group_chats.find_one(|chat| chat.id == id))
    }
}

/// Build a schema over the given store with a test page-size bound
pub fn test_schema(store: InMemoryChatStore, max_fetch_limit: i64) -> CommuneSchema {
    SchemaBuilder::new()
        .store(Arc::new(store))
        .pagination(PaginationConfig { max_fetch_limit })
        .build()
}
