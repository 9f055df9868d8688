//! Emoji state
//!
//! Immutable state values. Each slice sits behind an `Arc`, so a reducer
//! that has nothing to change hands back the same allocation and callers
//! can detect "no change" with [`ptr_eq`](CustomEmojiMap::ptr_eq) instead
//! of a deep comparison. Nothing here hands out `&mut` access; new values
//! are only built by the reducers.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::types::EmojiRecord;

/// Custom emoji keyed by emoji id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomEmojiMap(Arc<HashMap<String, Arc<EmojiRecord>>>);

impl CustomEmojiMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_map(map: HashMap<String, Arc<EmojiRecord>>) -> Self {
        Self(Arc::new(map))
    }

    /// Copy of the underlying map, for building the next state
    pub(crate) fn to_map(&self) -> HashMap<String, Arc<EmojiRecord>> {
        self.0.as_ref().clone()
    }

    /// True when both values share the same allocation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn get(&self, id: &str) -> Option<&EmojiRecord> {
        self.0.get(id).map(Arc::as_ref)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Linear scan; names are not indexed
    pub fn find_by_name(&self, name: &str) -> Option<&EmojiRecord> {
        self.values().find(|emoji| emoji.name == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &EmojiRecord> + '_ {
        self.0.values().map(Arc::as_ref)
    }
}

impl FromIterator<EmojiRecord> for CustomEmojiMap {
    fn from_iter<I: IntoIterator<Item = EmojiRecord>>(iter: I) -> Self {
        Self::from_map(
            iter.into_iter()
                .map(|emoji| (emoji.id.clone(), Arc::new(emoji)))
                .collect(),
        )
    }
}

/// Names of custom emoji confirmed not to exist
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NonExistentEmoji(Arc<HashSet<String>>);

impl NonExistentEmoji {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_set(set: HashSet<String>) -> Self {
        Self(Arc::new(set))
    }

    pub(crate) fn to_set(&self) -> HashSet<String> {
        self.0.as_ref().clone()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for NonExistentEmoji {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_set(iter.into_iter().map(Into::into).collect())
    }
}

/// Combined emoji state
///
/// Each field is owned by exactly one reducer. The combined value is
/// passed around as `Arc<EmojiState>`; see [`reduce`](super::reduce).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmojiState {
    /// Every custom emoji known to the client, keyed by id
    pub custom_emoji: CustomEmojiMap,

    /// Emoji names that lookups have already failed for
    pub non_existent_emoji: NonExistentEmoji,
}

impl EmojiState {
    /// Empty state, as at session start
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}
