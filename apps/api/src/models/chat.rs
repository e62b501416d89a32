//! Chat document models
//!
//! Database documents for the two chat collections. Direct chats are
//! two-party conversations, group chats are multi-party and carry a title;
//! the two kinds live in separate collections and are only unified at the
//! API layer.

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A two-party conversation document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectChatDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    /// Members of the conversation
    pub users: Vec<ObjectId>,

    /// User who created the chat
    #[serde(rename = "creatorId")]
    pub creator_id: ObjectId,

    /// Organization the chat belongs to
    pub organization: ObjectId,

    #[serde(rename = "createdAt", with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt", with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// A multi-party conversation document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupChatDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    /// Display title of the group
    pub title: String,

    /// Members of the conversation
    pub users: Vec<ObjectId>,

    /// User who created the chat
    #[serde(rename = "creatorId")]
    pub creator_id: ObjectId,

    /// Organization the chat belongs to
    pub organization: ObjectId,

    #[serde(rename = "createdAt", with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt", with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}
