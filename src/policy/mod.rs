//! Decision policies for the two player seats.
//!
//! Policies are trait-based so the orchestrator is agnostic to whether a
//! decision came from a heuristic or a person:
//! - `ClueProvider`: the spymaster seat, producing a clue per turn
//! - `GuessProvider`: the field operative seat, producing one guess per
//!   invocation
//!
//! A presentation layer embedding human input implements the same two
//! traits, collecting input however it sees fit, and is substitutable
//! for the built-in AI.

pub mod operative;
pub mod spymaster;

pub use operative::AiOperative;
pub use spymaster::AiSpymaster;

use crate::core::{Clue, Team};
use crate::lexicon::Word;
use crate::state::GameState;

/// The spymaster seat: produces a clue for a team.
///
/// Returning the pass sentinel forfeits the turn; it is a first-class
/// outcome, not an error.
pub trait ClueProvider {
    /// Generate a clue for `team` given the current state.
    ///
    /// The returned count is always between 0 and the number of the
    /// team's unrevealed words.
    fn generate_clue(&mut self, state: &GameState, team: Team) -> Clue;
}

/// The field operative seat: proposes a single word to guess.
///
/// Evaluates one word per invocation; the orchestrator calls it
/// repeatedly to emulate a multi-guess turn.
pub trait GuessProvider {
    /// Propose an unrevealed board word, or `None` to stop guessing.
    fn make_guess(&mut self, state: &GameState, clue: &Clue) -> Option<Word>;
}
