//! Test the non-existent emoji set
//!
//! Verifies marking names absent and reconciling them when emoji arrive.

use libemoji::emojis::reduce_non_existent_emoji;
use libemoji::{Action, EmojiRecord, NonExistentEmoji, Post};

fn set_of(names: &[&str]) -> NonExistentEmoji {
    names.iter().copied().collect()
}

#[test]
fn test_mark_absent_is_idempotent() {
    let prior = NonExistentEmoji::new();
    let action = Action::CustomEmojiDoesNotExist("ghost".into());

    let once = reduce_non_existent_emoji(&prior, &action);
    let twice = reduce_non_existent_emoji(&once, &action);

    assert_eq!(once, set_of(&["ghost"]));
    assert!(twice.ptr_eq(&once));
}

#[test]
fn test_reconcile_one_removes_only_matching_name() {
    let prior = set_of(&["x", "y"]);

    let next = reduce_non_existent_emoji(
        &prior,
        &Action::ReceivedCustomEmoji(Some(EmojiRecord::new("id-x", "x"))),
    );

    assert_eq!(next, set_of(&["y"]));
    // Prior value untouched
    assert_eq!(prior, set_of(&["x", "y"]));
}

#[test]
fn test_reconcile_one_without_match_keeps_reference() {
    let prior = set_of(&["x"]);

    let next = reduce_non_existent_emoji(
        &prior,
        &Action::ReceivedCustomEmoji(Some(EmojiRecord::new("id-z", "z"))),
    );
    assert!(next.ptr_eq(&prior));

    let next = reduce_non_existent_emoji(&prior, &Action::ReceivedCustomEmoji(None));
    assert!(next.ptr_eq(&prior));
}

#[test]
fn test_reconcile_many_removes_all_matches() {
    let prior = set_of(&["x", "y", "z"]);

    let next = reduce_non_existent_emoji(
        &prior,
        &Action::ReceivedCustomEmojis(vec![
            EmojiRecord::new("1", "x"),
            EmojiRecord::new("2", "unknown"),
            EmojiRecord::new("3", "z"),
        ]),
    );

    assert_eq!(next, set_of(&["y"]));
}

#[test]
fn test_reconcile_many_without_match_keeps_reference() {
    let prior = set_of(&["x"]);

    let next = reduce_non_existent_emoji(&prior, &Action::ReceivedCustomEmojis(Vec::new()));
    assert!(next.ptr_eq(&prior));

    let next = reduce_non_existent_emoji(
        &prior,
        &Action::ReceivedCustomEmojis(vec![EmojiRecord::new("1", "a"), EmojiRecord::new("2", "b")]),
    );
    assert!(next.ptr_eq(&prior));
}

#[test]
fn test_clear_and_logout_empty_the_set() {
    let prior = set_of(&["x", "y"]);

    for action in [Action::ClearCustomEmojis, Action::LogoutSuccess] {
        let once = reduce_non_existent_emoji(&prior, &action);
        let twice = reduce_non_existent_emoji(&once, &action);
        assert!(once.is_empty());
        assert!(twice.is_empty());
    }
}

#[test]
fn test_posts_and_deletes_do_not_touch_the_set() {
    let prior = set_of(&["x"]);

    for action in [
        Action::DeletedCustomEmoji { id: "id-x".into() },
        Action::ReceivedPost(Post::with_emojis("p1", vec![EmojiRecord::new("id-x", "x")])),
        Action::Other("SOMETHING_ELSE".into()),
    ] {
        assert!(reduce_non_existent_emoji(&prior, &action).ptr_eq(&prior));
    }
}
