//! Error types shared by the geometry, board and game layers
//!
//! Geometry construction and deserialization errors propagate to the caller
//! (usually the command layer). Game event handlers never return these to the
//! host; they log them and treat the event as a no-op.

use crate::world::BlockPos;

/// Result type used across the crate
pub type HangmanResult<T> = Result<T, HangmanError>;

/// Errors raised by the hangman core
#[derive(Debug, thiserror::Error)]
pub enum HangmanError {
    #[error("Corners lie in different worlds: {a} and {b}")]
    CrossWorldBoundary { a: String, b: String },

    #[error("More guesses than stages: {max_guesses} guesses, {stages} stages")]
    TooManyGuesses { max_guesses: usize, stages: usize },

    #[error("Malformed serialized state: {0}")]
    MalformedSerializedState(String),

    #[error("No glyph registered for {0:?}")]
    MissingGlyph(char),

    #[error("Slot {index} out of range for a board with {slots} slots")]
    SlotOutOfRange { index: usize, slots: usize },

    #[error("Word list is empty")]
    EmptyWordList,

    #[error("Word {0:?} contains characters outside A-Z")]
    InvalidWord(String),

    #[error("No stored structure named {0:?}")]
    UnknownStructure(String),

    #[error("Selection incomplete: {0}")]
    IncompleteSelection(String),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported by a host world implementation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("Block at {pos} is not a skull")]
    NotASkull { pos: BlockPos },

    #[error("Invalid position: {pos}")]
    OutOfBounds { pos: BlockPos },
}

/// Create a malformed-state error
pub fn malformed(reason: impl Into<String>) -> HangmanError {
    HangmanError::MalformedSerializedState(reason.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = HangmanError::TooManyGuesses { max_guesses: 6, stages: 4 };
        assert_eq!(err.to_string(), "More guesses than stages: 6 guesses, 4 stages");

        let err: HangmanError = WorldError::NotASkull { pos: BlockPos::new(1, 2, 3) }.into();
        assert_eq!(err.to_string(), "Block at (1, 2, 3) is not a skull");
    }

    #[test]
    fn test_json_errors_convert() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: HangmanError = parse.into();
        assert!(matches!(err, HangmanError::Json(_)));
    }
}
