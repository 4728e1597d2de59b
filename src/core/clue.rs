//! Clue value type.
//!
//! A clue is a transient `(text, count)` pair given by a spymaster. It is
//! never part of persistent state. A clue whose text is the PASS sentinel
//! (or whose count is 0) forfeits the turn without any reveal.

use serde::{Deserialize, Serialize};

/// Sentinel clue text meaning "no clue, turn forfeited".
pub const PASS: &str = "PASS";

/// A spymaster's clue: a hint word and how many board words it covers.
///
/// Clue text is normalized to uppercase. By the rules of the game the text
/// must never be one of the words on the board; the spymaster policy
/// enforces this for its association-derived clues.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clue {
    text: String,
    count: usize,
}

impl Clue {
    /// Create a clue, uppercasing the text.
    #[must_use]
    pub fn new(text: impl AsRef<str>, count: usize) -> Self {
        Self {
            text: text.as_ref().trim().to_uppercase(),
            count,
        }
    }

    /// The pass sentinel: no clue, turn forfeited.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            text: PASS.to_string(),
            count: 0,
        }
    }

    /// Clue text (uppercase).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of board words this clue claims to cover.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether this clue forfeits the turn.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.text == PASS || self.count == 0
    }

    /// Maximum guesses this clue allows: one more than the stated count.
    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.count + 1
    }
}

impl std::fmt::Display for Clue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' ({})", self.text, self.count)
    }
}
