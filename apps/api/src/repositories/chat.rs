//! Chat storage layer
//!
//! All chat reads go through the [`ChatStore`] trait so resolvers can be
//! exercised against an in-memory store in tests. The production
//! implementation, [`MongoChatStore`], queries the two chat collections
//! (`directchats` and `groupchats`) directly; it owns no retry or timeout
//! logic, driver failures propagate to the caller.

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures_util::TryStreamExt;
use mongodb::{Collection, Database};
use tracing::instrument;

use crate::error::ApiResult;
use crate::graphql::connection::{CursorRange, SortOrder};
use crate::models::{DirectChatDocument, GroupChatDocument};

/// Read access to the two chat collections
///
/// Both collections share a `users` membership field and are paged over the
/// stable `_id` key. `find_*` methods return records in the requested order,
/// bounded by `limit`; callers pass one more than their window to detect
/// further pages.
#[async_trait]
pub trait ChatStore: Send + Sync {
    async fn find_direct_chats(
        &self,
        user_id: ObjectId,
        range: &CursorRange<ObjectId>,
        order: SortOrder,
        limit: i64,
    ) -> ApiResult<Vec<DirectChatDocument>>;

    async fn find_group_chats(
        &self,
        user_id: ObjectId,
        range: &CursorRange<ObjectId>,
        order: SortOrder,
        limit: i64,
    ) -> ApiResult<Vec<GroupChatDocument>>;

    async fn count_direct_chats(&self, user_id: ObjectId) -> ApiResult<u64>;

    async fn count_group_chats(&self, user_id: ObjectId) -> ApiResult<u64>;

    async fn direct_chat_by_id(&self, id: ObjectId) -> ApiResult<Option<DirectChatDocument>>;

    async fn group_chat_by_id(&self, id: ObjectId) -> ApiResult<Option<GroupChatDocument>>;
}

/// MongoDB-backed [`ChatStore`]
#[derive(Clone)]
pub struct MongoChatStore {
    direct_chats: Collection<DirectChatDocument>,
    group_chats: Collection<GroupChatDocument>,
}

impl MongoChatStore {
    /// Create a store over the given database's chat collections
    pub fn new(database: &Database) -> Self {
        Self {
            direct_chats: database.collection("directchats"),
            group_chats: database.collection("groupchats"),
        }
    }
}

/// Lower a membership query plus cursor range to a MongoDB filter document
fn membership_filter(user_id: ObjectId, range: &CursorRange<ObjectId>) -> Document {
    let mut filter = doc! { "users": user_id };
    if let Some(after) = range.after {
        filter.insert("_id", doc! { "$gt": after });
    }
    if let Some(before) = range.before {
        filter.insert("_id", doc! { "$lt": before });
    }
    filter
}

/// Lower a [`SortOrder`] to a MongoDB sort document over `_id`
fn sort_document(order: SortOrder) -> Document {
    match order {
        SortOrder::Ascending => doc! { "_id": 1 },
        SortOrder::Descending => doc! { "_id": -1 },
    }
}

#[async_trait]
impl ChatStore for MongoChatStore {
    #[instrument(skip(self, range))]
    async fn find_direct_chats(
        &self,
        user_id: ObjectId,
        range: &CursorRange<ObjectId>,
        order: SortOrder,
        limit: i64,
    ) -> ApiResult<Vec<DirectChatDocument>> {
        let chats = self
            .direct_chats
            .find(membership_filter(user_id, range))
            .sort(sort_document(order))
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(chats)
    }

    #[instrument(skip(self, range))]
    async fn find_group_chats(
        &self,
        user_id: ObjectId,
        range: &CursorRange<ObjectId>,
        order: SortOrder,
        limit: i64,
    ) -> ApiResult<Vec<GroupChatDocument>> {
        let chats = self
            .group_chats
            .find(membership_filter(user_id, range))
            .sort(sort_document(order))
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(chats)
    }

    #[instrument(skip(self))]
    async fn count_direct_chats(&self, user_id: ObjectId) -> ApiResult<u64> {
        Ok(self
            .direct_chats
            .count_documents(doc! { "users": user_id })
            .await?)
    }

    #[instrument(skip(self))]
    async fn count_group_chats(&self, user_id: ObjectId) -> ApiResult<u64> {
        Ok(self
            .group_chats
            .count_documents(doc! { "users": user_id })
            .await?)
    }

    #[instrument(skip(self))]
    async fn direct_chat_by_id(&self, id: ObjectId) -> ApiResult<Option<DirectChatDocument>> {
        Ok(self.direct_chats.find_one(doc! { "_id": id }).await?)
    }

    #[instrument(skip(self))]
    async fn group_chat_by_id(&self, id: ObjectId) -> ApiResult<Option<GroupChatDocument>> {
        Ok(self.group_chats.find_one(doc! { "_id": id }).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_filter_without_cursor() {
        let user = ObjectId::new();
        let filter = membership_filter(user, &CursorRange::unbounded());

        assert_eq!(filter.get_object_id("users").unwrap(), user);
        assert!(!filter.contains_key("_id"));
    }

    #[test]
    fn test_membership_filter_after_cursor() {
        let user = ObjectId::new();
        let cursor = ObjectId::new();
        let filter = membership_filter(
            user,
            &CursorRange {
                after: Some(cursor),
                before: None,
            },
        );

        let bound = filter.get_document("_id").unwrap();
        assert_eq!(bound.get_object_id("$gt").unwrap(), cursor);
    }

    #[test]
    fn test_membership_filter_before_cursor() {
        let user = ObjectId::new();
        let cursor = ObjectId::new();
        let filter = membership_filter(
            user,
            &CursorRange {
                after: None,
                before: Some(cursor),
            },
        );

        let bound = filter.get_document("_id").unwrap();
        assert_eq!(bound.get_object_id("$lt").unwrap(), cursor);
    }

    #[test]
    fn test_sort_documents() {
        assert_eq!(sort_document(SortOrder::Ascending), doc! { "_id": 1 });
        assert_eq!(sort_document(SortOrder::Descending), doc! { "_id": -1 });
    }
}
