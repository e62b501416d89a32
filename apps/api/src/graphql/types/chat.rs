//! Chat GraphQL types
//!
//! Wrapper objects over the chat documents, exposing ObjectIds as hex `ID`s.
//! The `Chat` union is what connection edges carry; the two record kinds are
//! only unified here at the API layer.

use async_graphql::{Object, Union, ID};
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};

use crate::graphql::connection::ConnectionNode;
use crate::models::{DirectChatDocument, GroupChatDocument};

/// A two-party conversation
pub struct DirectChat {
    inner: DirectChatDocument,
}

impl From<DirectChatDocument> for DirectChat {
    fn from(document: DirectChatDocument) -> Self {
        Self { inner: document }
    }
}

#[Object]
impl DirectChat {
    /// Unique chat identifier
    async fn id(&self) -> ID {
        ID(self.inner.id.to_hex())
    }

    /// Members of the conversation
    async fn users(&self) -> Vec<ID> {
        self.inner.users.iter().map(|u| ID(u.to_hex())).collect()
    }

    /// User who created the chat
    async fn creator_id(&self) -> ID {
        ID(self.inner.creator_id.to_hex())
    }

    /// Organization the chat belongs to
    async fn organization_id(&self) -> ID {
        ID(self.inner.organization.to_hex())
    }

    /// Creation timestamp
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    /// Last update timestamp
    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }
}

/// A multi-party conversation
pub struct GroupChat {
    inner: GroupChatDocument,
}

impl From<GroupChatDocument> for GroupChat {
    fn from(document: GroupChatDocument) -> Self {
        Self { inner: document }
    }
}

#[Object]
impl GroupChat {
    /// Unique chat identifier
    async fn id(&self) -> ID {
        ID(self.inner.id.to_hex())
    }

    /// Display title of the group
    async fn title(&self) -> &str {
        &self.inner.title
    }

    /// Members of the conversation
    async fn users(&self) -> Vec<ID> {
        self.inner.users.iter().map(|u| ID(u.to_hex())).collect()
    }

    /// User who created the chat
    async fn creator_id(&self) -> ID {
        ID(self.inner.creator_id.to_hex())
    }

    /// Organization the chat belongs to
    async fn organization_id(&self) -> ID {
        ID(self.inner.organization.to_hex())
    }

    /// Creation timestamp
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    /// Last update timestamp
    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }
}

/// Either kind of conversation, unified for cross-collection queries
#[derive(Union)]
pub enum Chat {
    Direct(DirectChat),
    Group(GroupChat),
}

impl Chat {
    /// Stable record id, shared ordering key across both collections
    pub fn record_id(&self) -> ObjectId {
        match self {
            Chat::Direct(chat) => chat.inner.id,
            Chat::Group(chat) => chat.inner.id,
        }
    }
}

impl ConnectionNode for Chat {
    fn cursor_id(&self) -> ObjectId {
        self.record_id()
    }
}

impl From<DirectChatDocument> for Chat {
    fn from(document: DirectChatDocument) -> Self {
        Chat::Direct(document.into())
    }
}

impl From<GroupChatDocument> for Chat {
    fn from(document: GroupChatDocument) -> Self {
        Chat::Group(document.into())
    }
}
