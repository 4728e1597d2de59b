//! Heuristic field operative: composite relevance scoring.
//!
//! Every unrevealed board word is scored against the clue with a cheap
//! composite of lexical and category signals; the single highest scorer
//! is guessed. A top score of zero means no confident guess, and the
//! operative passes rather than guessing blind, which bounds
//! false-positive guesses on unrelated clues.

use std::collections::HashSet;

use crate::associations::CATEGORIES;
use crate::core::Clue;
use crate::lexicon::Word;
use crate::state::GameState;

use super::GuessProvider;

/// Heuristic AI field operative.
///
/// Stateless with respect to correctness; it only remembers the last
/// clue it was handed (advisory bookkeeping, never used for scoring).
#[derive(Clone, Debug, Default)]
pub struct AiOperative {
    last_clue: Option<Clue>,
}

impl AiOperative {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent clue handed to this operative, if any.
    #[must_use]
    pub fn last_clue(&self) -> Option<&Clue> {
        self.last_clue.as_ref()
    }
}

impl GuessProvider for AiOperative {
    fn make_guess(&mut self, state: &GameState, clue: &Clue) -> Option<Word> {
        self.last_clue = Some(clue.clone());

        if clue.is_pass() {
            return None;
        }

        let clue_lower = clue.text().to_lowercase();

        // Highest score wins; ties keep the earliest word in board order.
        let mut best: Option<(&Word, i64)> = None;
        for word in state.unrevealed_words() {
            let score = relevance(&clue_lower, &word.as_str().to_lowercase());
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((word, score));
            }
        }

        match best {
            Some((word, score)) if score > 0 => {
                tracing::debug!(clue = %clue, guess = %word, score, "operative guess");
                Some(word.clone())
            }
            _ => None,
        }
    }
}

/// Composite relevance of a board word to a clue (both lowercase).
///
/// Exact match is maximal; otherwise substring containment, shared
/// distinct characters, length similarity, and category co-membership
/// each contribute.
fn relevance(clue: &str, word: &str) -> i64 {
    if clue == word {
        return 100;
    }

    let mut score = 0;

    if clue.contains(word) || word.contains(clue) {
        score += 30;
    }

    let clue_chars: HashSet<char> = clue.chars().collect();
    let word_chars: HashSet<char> = word.chars().collect();
    score += 5 * clue_chars.intersection(&word_chars).count() as i64;

    let length_diff = clue.chars().count().abs_diff(word.chars().count()) as i64;
    score += (10 - length_diff).max(0);

    for category in CATEGORIES {
        if !category.contains(word) {
            continue;
        }
        // Clue names the category listing this word.
        if category.name == clue {
            score += 50;
        }
        // Clue and word are siblings in the same category.
        if category.contains(clue) {
            score += 30;
        }
    }

    score
}
