//! Heuristic spymaster: scoreboard clue selection.
//!
//! For every unrevealed own word, candidate association strings are
//! collected from the static category table (the category name plus
//! sibling members) and two cheap lexical transforms. A scoreboard maps
//! each association to the distinct own words it could hint at; the
//! association covering the most words wins, subject to the clue-text
//! rule (never a board word) and the no-overcommit rule (count bounded by
//! remaining own words). The scoreboard preserves first-seen insertion
//! order over words enumerated in board order, so ties resolve
//! deterministically to the first association that reached the maximum.

use smallvec::{smallvec, SmallVec};

use crate::associations;
use crate::core::{Clue, Team};
use crate::lexicon::Word;
use crate::state::GameState;

use super::ClueProvider;

/// Association strings considered per word.
const CLUES_PER_WORD: usize = 5;

/// Heuristic AI spymaster.
#[derive(Clone, Copy, Debug, Default)]
pub struct AiSpymaster;

impl AiSpymaster {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ClueProvider for AiSpymaster {
    fn generate_clue(&mut self, state: &GameState, team: Team) -> Clue {
        let candidates = state.team_words(team);
        if candidates.is_empty() {
            return Clue::pass();
        }

        // Association -> indices of distinct candidate words it hints at,
        // in first-seen order.
        let mut scoreboard: Vec<(String, SmallVec<[usize; 4]>)> = Vec::new();
        for (idx, word) in candidates.iter().enumerate() {
            for assoc in potential_clues(word) {
                match scoreboard.iter_mut().find(|(a, _)| *a == assoc) {
                    Some((_, hits)) => {
                        if !hits.contains(&idx) {
                            hits.push(idx);
                        }
                    }
                    None => scoreboard.push((assoc, smallvec![idx])),
                }
            }
        }

        let mut best: Option<(&str, usize)> = None;
        for (assoc, hits) in &scoreboard {
            // Clue words may never coincide with board words.
            if state.contains_text(assoc) {
                continue;
            }
            let covered = hits.len();
            if covered <= candidates.len() && best.map_or(true, |(_, n)| covered > n) {
                best = Some((assoc.as_str(), covered));
            }
        }

        if let Some((text, covered)) = best {
            let clue = Clue::new(text, covered.min(candidates.len()));
            tracing::debug!(team = %team, clue = %clue, "spymaster clue");
            return clue;
        }

        // Degraded path: no qualifying association, name one of the
        // team's own words outright.
        let clue = Clue::new(candidates[0].as_str(), 1);
        tracing::debug!(team = %team, clue = %clue, "spymaster fallback clue");
        clue
    }
}

/// Candidate association strings for one board word.
///
/// Category names and sibling members come first, then a suffix mutation
/// and an "-er" strip, capped at `CLUES_PER_WORD`.
fn potential_clues(word: &Word) -> SmallVec<[String; CLUES_PER_WORD]> {
    let lower = word.as_str().to_lowercase();
    let mut out: SmallVec<[String; CLUES_PER_WORD]> = SmallVec::new();

    for category in associations::categories_of(&lower) {
        out.push(category.name.to_string());
        out.extend(
            category
                .members
                .iter()
                .filter(|m| **m != lower)
                .map(|m| (*m).to_string()),
        );
    }

    if word.as_str().chars().count() > 4 {
        let prefix: String = word.as_str().chars().take(4).collect();
        out.push(format!("{}ING", prefix));
    }
    if lower.contains("er") {
        out.push(lower.replace("er", ""));
    }

    out.truncate(CLUES_PER_WORD);
    out
}
