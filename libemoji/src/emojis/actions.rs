//! Actions that drive the emoji reducers
//!
//! Every state transition is triggered by an action. Actions arrive from
//! the network layer as `{"type": ..., "data": ...}` objects and are
//! decoded here into typed values before reaching the reducer.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{EmojiError, Result};
use crate::types::{EmojiRecord, Post, PostsPayload};

/// Wire names of the event kinds the emoji reducers understand
pub mod action_types {
    pub const RECEIVED_CUSTOM_EMOJI: &str = "RECEIVED_CUSTOM_EMOJI";
    pub const RECEIVED_CUSTOM_EMOJIS: &str = "RECEIVED_CUSTOM_EMOJIS";
    pub const DELETED_CUSTOM_EMOJI: &str = "DELETED_CUSTOM_EMOJI";
    pub const CLEAR_CUSTOM_EMOJIS: &str = "CLEAR_CUSTOM_EMOJIS";
    pub const CUSTOM_EMOJI_DOES_NOT_EXIST: &str = "CUSTOM_EMOJI_DOES_NOT_EXIST";

    pub const RECEIVED_POST: &str = "RECEIVED_POST";
    pub const RECEIVED_NEW_POST: &str = "RECEIVED_NEW_POST";
    pub const RECEIVED_POSTS: &str = "RECEIVED_POSTS";

    pub const LOGOUT_SUCCESS: &str = "LOGOUT_SUCCESS";
}

/// Actions that trigger emoji state transitions
///
/// Actions are immutable descriptions of what happened. The reducers
/// (see `reducer.rs`) decide what each one means for their own slice.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Custom emoji ===
    /// A single emoji was fetched or created. `None` when the payload was empty.
    ReceivedCustomEmoji(Option<EmojiRecord>),

    /// A page of emoji was fetched
    ReceivedCustomEmojis(Vec<EmojiRecord>),

    /// An emoji was deleted on the server
    DeletedCustomEmoji { id: String },

    /// Drop every cached emoji and every negative lookup
    ClearCustomEmojis,

    /// A lookup by name came back empty
    CustomEmojiDoesNotExist(String),

    // === Posts ===
    ReceivedPost(Post),

    ReceivedNewPost(Post),

    ReceivedPosts(PostsPayload),

    // === Session ===
    LogoutSuccess,

    /// Any kind this module does not handle
    Other(String),
}

impl Action {
    /// Decode an action from its JSON text form
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Decode an action from a `{"type": ..., "data": ...}` value
    ///
    /// Unknown kinds decode to [`Action::Other`] and are ignored by the
    /// reducers. A missing `data` field is treated as `null`.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut event) = value else {
            return Err(EmojiError::MissingKind);
        };

        let kind = match event.remove("type") {
            Some(Value::String(kind)) => kind,
            _ => return Err(EmojiError::MissingKind),
        };
        let data = event.remove("data").unwrap_or(Value::Null);

        let action = match kind.as_str() {
            action_types::RECEIVED_CUSTOM_EMOJI => {
                let record = if is_empty_payload(&data) {
                    None
                } else {
                    Some(payload(&kind, data)?)
                };
                Action::ReceivedCustomEmoji(record)
            }
            action_types::RECEIVED_CUSTOM_EMOJIS => {
                // Null entries are skipped, a null list is an empty page
                let records: Option<Vec<Option<EmojiRecord>>> = payload(&kind, data)?;
                Action::ReceivedCustomEmojis(records.into_iter().flatten().flatten().collect())
            }
            action_types::DELETED_CUSTOM_EMOJI => {
                let record: EmojiRecord = payload(&kind, data)?;
                Action::DeletedCustomEmoji { id: record.id }
            }
            action_types::CLEAR_CUSTOM_EMOJIS => Action::ClearCustomEmojis,
            action_types::CUSTOM_EMOJI_DOES_NOT_EXIST => {
                Action::CustomEmojiDoesNotExist(payload(&kind, data)?)
            }
            action_types::RECEIVED_POST => Action::ReceivedPost(payload(&kind, data)?),
            action_types::RECEIVED_NEW_POST => Action::ReceivedNewPost(payload(&kind, data)?),
            action_types::RECEIVED_POSTS => Action::ReceivedPosts(payload(&kind, data)?),
            action_types::LOGOUT_SUCCESS => Action::LogoutSuccess,
            _ => {
                tracing::debug!(kind = %kind, "Passing through unhandled action kind");
                Action::Other(kind)
            }
        };

        Ok(action)
    }

    /// Wire name of this action's kind
    pub fn kind(&self) -> &str {
        match self {
            Action::ReceivedCustomEmoji(_) => action_types::RECEIVED_CUSTOM_EMOJI,
            Action::ReceivedCustomEmojis(_) => action_types::RECEIVED_CUSTOM_EMOJIS,
            Action::DeletedCustomEmoji { .. } => action_types::DELETED_CUSTOM_EMOJI,
            Action::ClearCustomEmojis => action_types::CLEAR_CUSTOM_EMOJIS,
            Action::CustomEmojiDoesNotExist(_) => action_types::CUSTOM_EMOJI_DOES_NOT_EXIST,
            Action::ReceivedPost(_) => action_types::RECEIVED_POST,
            Action::ReceivedNewPost(_) => action_types::RECEIVED_NEW_POST,
            Action::ReceivedPosts(_) => action_types::RECEIVED_POSTS,
            Action::LogoutSuccess => action_types::LOGOUT_SUCCESS,
            Action::Other(kind) => kind.as_str(),
        }
    }
}

fn payload<T: DeserializeOwned>(kind: &str, data: Value) -> Result<T> {
    serde_json::from_value(data).map_err(|source| EmojiError::InvalidPayload {
        kind: kind.to_string(),
        source,
    })
}

fn is_empty_payload(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}
