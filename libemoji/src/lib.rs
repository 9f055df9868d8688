//! libemoji - custom emoji state for chat clients
//!
//! Holds the client's view of custom emoji: the emoji records known by id
//! and the set of emoji names already confirmed not to exist. All state
//! transitions go through pure reducers (see [`emojis::reduce`]).

pub mod emojis;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use emojis::{reduce, Action, CustomEmojiMap, EmojiState, NonExistentEmoji};
pub use error::{EmojiError, Result};
pub use types::{EmojiRecord, Post, PostMetadata, PostsPayload};
