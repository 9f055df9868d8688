//! Pure reducer functions for emoji state transitions
//!
//! Each reducer is a pure function `(&State, &Action) -> State`: no I/O,
//! no shared mutable state, deterministic. A reducer that has nothing to
//! change returns a clone of its input, which shares the same allocation,
//! so `ptr_eq` against the prior value tells callers whether anything
//! happened.

use std::collections::HashMap;
use std::sync::Arc;

use super::actions::Action;
use super::state::{CustomEmojiMap, EmojiState, NonExistentEmoji};
use crate::types::{EmojiRecord, Post};

/// Combined reducer
///
/// Runs both slice reducers against the same action. Each one sees only
/// its own slice, so the order they run in does not matter. When neither
/// slice changed, the prior `Arc` is returned as-is.
pub fn reduce(state: &Arc<EmojiState>, action: &Action) -> Arc<EmojiState> {
    let custom_emoji = reduce_custom_emoji(&state.custom_emoji, action);
    let non_existent_emoji = reduce_non_existent_emoji(&state.non_existent_emoji, action);

    if custom_emoji.ptr_eq(&state.custom_emoji)
        && non_existent_emoji.ptr_eq(&state.non_existent_emoji)
    {
        tracing::trace!(kind = action.kind(), "Emoji state unchanged");
        return Arc::clone(state);
    }

    Arc::new(EmojiState {
        custom_emoji,
        non_existent_emoji,
    })
}

/// Reducer for the emoji map (id -> record)
///
/// Fetched emoji overwrite whatever is stored under their id. Emoji
/// harvested from post metadata only fill in ids that are not stored yet.
pub fn reduce_custom_emoji(state: &CustomEmojiMap, action: &Action) -> CustomEmojiMap {
    match action {
        Action::ReceivedCustomEmoji(Some(emoji)) => upsert(state, std::slice::from_ref(emoji)),
        Action::ReceivedCustomEmoji(None) => state.clone(),
        Action::ReceivedCustomEmojis(emojis) => upsert(state, emojis),

        Action::DeletedCustomEmoji { id } => {
            if !state.contains(id) {
                return state.clone();
            }
            let mut next = state.to_map();
            next.remove(id);
            tracing::trace!(id = %id, "Removed custom emoji");
            CustomEmojiMap::from_map(next)
        }

        Action::ClearCustomEmojis | Action::LogoutSuccess => {
            tracing::debug!(dropped = state.len(), "Clearing custom emoji");
            CustomEmojiMap::new()
        }

        Action::ReceivedPost(post) | Action::ReceivedNewPost(post) => {
            store_emojis_for_posts(state, std::iter::once(post))
        }
        Action::ReceivedPosts(payload) => store_emojis_for_posts(state, payload.iter_ordered()),

        Action::CustomEmojiDoesNotExist(_) | Action::Other(_) => state.clone(),
    }
}

/// Reducer for the set of emoji names known not to exist
pub fn reduce_non_existent_emoji(state: &NonExistentEmoji, action: &Action) -> NonExistentEmoji {
    match action {
        Action::CustomEmojiDoesNotExist(name) => {
            if state.contains(name) {
                return state.clone();
            }
            let mut next = state.to_set();
            next.insert(name.clone());
            tracing::trace!(name = %name, "Marked custom emoji as non-existent");
            NonExistentEmoji::from_set(next)
        }

        Action::ReceivedCustomEmoji(Some(emoji)) => {
            forget_names(state, std::slice::from_ref(emoji))
        }
        Action::ReceivedCustomEmojis(emojis) => forget_names(state, emojis),

        Action::ClearCustomEmojis | Action::LogoutSuccess => NonExistentEmoji::new(),

        Action::ReceivedCustomEmoji(None)
        | Action::DeletedCustomEmoji { .. }
        | Action::ReceivedPost(_)
        | Action::ReceivedNewPost(_)
        | Action::ReceivedPosts(_)
        | Action::Other(_) => state.clone(),
    }
}

/// Insert every record, later duplicates winning
fn upsert(state: &CustomEmojiMap, emojis: &[EmojiRecord]) -> CustomEmojiMap {
    if emojis.is_empty() {
        return state.clone();
    }

    let mut next = state.to_map();
    for emoji in emojis {
        next.insert(emoji.id.clone(), Arc::new(emoji.clone()));
    }
    tracing::trace!(count = emojis.len(), total = next.len(), "Stored custom emoji");
    CustomEmojiMap::from_map(next)
}

/// Add emoji embedded in post metadata, skipping ids already stored
///
/// The map is only copied once the first new emoji turns up.
fn store_emojis_for_posts<'a>(
    state: &CustomEmojiMap,
    posts: impl Iterator<Item = &'a Post>,
) -> CustomEmojiMap {
    let mut next: Option<HashMap<String, Arc<EmojiRecord>>> = None;

    for emoji in posts.flat_map(Post::embedded_emojis) {
        let present = match &next {
            Some(map) => map.contains_key(&emoji.id),
            None => state.contains(&emoji.id),
        };
        if present {
            continue;
        }

        next.get_or_insert_with(|| state.to_map())
            .insert(emoji.id.clone(), Arc::new(emoji.clone()));
    }

    match next {
        Some(map) => {
            tracing::trace!(added = map.len() - state.len(), "Stored emoji from posts");
            CustomEmojiMap::from_map(map)
        }
        None => state.clone(),
    }
}

/// Remove the names of received emoji from the negative set
fn forget_names(state: &NonExistentEmoji, emojis: &[EmojiRecord]) -> NonExistentEmoji {
    if !emojis.iter().any(|emoji| state.contains(&emoji.name)) {
        return state.clone();
    }

    let mut next = state.to_set();
    for emoji in emojis {
        next.remove(&emoji.name);
    }
    NonExistentEmoji::from_set(next)
}
