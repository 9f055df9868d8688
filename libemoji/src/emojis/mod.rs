//! Emoji entities module
//!
//! - Actions: events delivered by the dispatcher
//! - State: the two immutable slices and the combined state
//! - Reducer: pure functions `(State, Action) -> State`

pub mod actions;
pub mod reducer;
pub mod state;

pub use actions::{action_types, Action};
pub use reducer::{reduce, reduce_custom_emoji, reduce_non_existent_emoji};
pub use state::{CustomEmojiMap, EmojiState, NonExistentEmoji};
