//! Core payload types for custom emoji state

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A custom emoji as delivered by the server
///
/// Only `id` and `name` are interpreted here. Everything else the server
/// sends (creator, timestamps, ...) is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmojiRecord {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EmojiRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Attach an opaque field, builder style
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// A post, reduced to the parts the emoji state cares about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub metadata: Option<PostMetadata>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata: None,
            extra: Map::new(),
        }
    }

    /// Build a post whose metadata embeds the given emoji
    pub fn with_emojis(id: impl Into<String>, emojis: Vec<EmojiRecord>) -> Self {
        Self {
            metadata: Some(PostMetadata {
                emojis: Some(emojis),
                extra: Map::new(),
            }),
            ..Self::new(id)
        }
    }

    /// Emoji embedded in the post metadata, empty when there are none
    pub fn embedded_emojis(&self) -> &[EmojiRecord] {
        self.metadata
            .as_ref()
            .and_then(|metadata| metadata.emojis.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMetadata {
    #[serde(default)]
    pub emojis: Option<Vec<EmojiRecord>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A batch of posts keyed by post id
///
/// `order` lists post ids in display order when the server supplies one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostsPayload {
    #[serde(default)]
    pub posts: BTreeMap<String, Post>,

    #[serde(default)]
    pub order: Vec<String>,
}

impl PostsPayload {
    pub fn from_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        Self {
            posts: posts.into_iter().map(|post| (post.id.clone(), post)).collect(),
            order: Vec::new(),
        }
    }

    /// Iterate posts: ids from `order` first, then the rest by key
    ///
    /// Each post is yielded once even if `order` repeats an id or names
    /// a post that is not in the map.
    pub fn iter_ordered(&self) -> impl Iterator<Item = &Post> + '_ {
        let mut seen = std::collections::HashSet::new();
        let ordered = self
            .order
            .iter()
            .filter_map(|id| self.posts.get_key_value(id))
            .chain(self.posts.iter());

        ordered.filter_map(move |(id, post)| seen.insert(id.as_str()).then_some(post))
    }
}
