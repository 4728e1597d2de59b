//! Engine error types.
//!
//! The only fatal conditions in the core are configuration failures at
//! setup. Invalid reveals are recovered locally by the orchestrator as an
//! implicit turn-ending pass, and a policy declining to decide is a
//! first-class outcome, not an error.

use thiserror::Error;

/// Errors surfaced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The lexicon cannot fill a board.
    #[error("lexicon has {found} words, need at least {needed}")]
    LexiconTooSmall { found: usize, needed: usize },

    /// A caller-supplied lexicon contained the same word twice.
    #[error("duplicate word in lexicon: {0}")]
    DuplicateWord(String),
}
