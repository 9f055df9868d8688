//! Error types for libemoji
//!
//! The reducers themselves never fail. Errors only come from decoding
//! wire-shaped events into [`Action`](crate::Action) values.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmojiError>;

#[derive(Error, Debug)]
pub enum EmojiError {
    #[error("Malformed event JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Event has no string `type` field")]
    MissingKind,

    #[error("Invalid payload for {kind}: {source}")]
    InvalidPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            EmojiError::MissingKind.to_string(),
            "Event has no string `type` field"
        );

        let source = serde_json::from_str::<String>("1").unwrap_err();
        let err = EmojiError::InvalidPayload {
            kind: "CUSTOM_EMOJI_DOES_NOT_EXIST".to_string(),
            source,
        };
        assert!(err
            .to_string()
            .starts_with("Invalid payload for CUSTOM_EMOJI_DOES_NOT_EXIST:"));
    }
}
