//! Board and game state.
//!
//! ## Board
//!
//! An ordered 5×5 arrangement of 25 distinct words, kept row-major purely
//! for (row, column) display addressing. The authoritative data is the
//! flat word list plus the word→role map.
//!
//! ## GameState
//!
//! Owns the word grid, the secret role assignment, the revealed set, the
//! remaining-count tallies, the active turn, and the terminal outcome.
//! Created once per game via `setup`, mutated exclusively through
//! `reveal`, and discarded at game end. The revealed set uses a
//! persistent structure so snapshots clone in O(1).

use im::HashSet as ImHashSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameRng, Role, Team, TeamMap};
use crate::lexicon::{Lexicon, Word};

/// Board side length.
pub const BOARD_SIZE: usize = 5;

/// Number of words on a board.
pub const BOARD_WORDS: usize = BOARD_SIZE * BOARD_SIZE;

/// Cards dealt to the team that goes first.
pub const STARTING_TEAM_CARDS: usize = 9;

/// Cards dealt to the team that goes second.
pub const SECOND_TEAM_CARDS: usize = 8;

/// Neutral cards per board.
pub const NEUTRAL_CARDS: usize = 7;

/// Complete game state.
///
/// Invariants, maintained by `setup` and `reveal`:
/// - `revealed` is a subset of the board words.
/// - Each remaining tally equals the count of that team's unrevealed
///   words.
/// - Once `over` is true, no further mutation is applied.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Board words, row-major.
    words: Vec<Word>,

    /// Secret role of each board word. Assigned at setup, never changed.
    roles: FxHashMap<Word, Role>,

    /// Words exposed so far.
    revealed: ImHashSet<Word>,

    /// Team whose clue/guess cycle is active.
    turn: Team,

    /// Unrevealed own-color cards per team.
    remaining: TeamMap<u8>,

    over: bool,
    winner: Option<Team>,
}

impl GameState {
    /// Deal a fresh board from the lexicon.
    ///
    /// Samples 25 distinct words without replacement, picks the starting
    /// team by coin flip, and deals roles biased 9/8 toward the starting
    /// team plus 7 neutral and 1 assassin, shuffled before being zipped
    /// positionally with the words.
    ///
    /// Fails only when the lexicon cannot fill a board.
    pub fn setup(lexicon: &Lexicon, rng: &mut GameRng) -> Result<Self, EngineError> {
        if lexicon.len() < BOARD_WORDS {
            return Err(EngineError::LexiconTooSmall {
                found: lexicon.len(),
                needed: BOARD_WORDS,
            });
        }

        let words = rng.sample(lexicon.words(), BOARD_WORDS);

        let starting = if rng.gen_bool(0.5) { Team::Red } else { Team::Blue };

        // Count bias is applied to the list before shuffling, so the final
        // tallies are exactly 9/8 given which team started.
        let mut deal: Vec<Role> = Vec::with_capacity(BOARD_WORDS);
        deal.extend(std::iter::repeat(Role::from(starting)).take(STARTING_TEAM_CARDS));
        deal.extend(std::iter::repeat(Role::from(starting.other())).take(SECOND_TEAM_CARDS));
        deal.extend(std::iter::repeat(Role::Neutral).take(NEUTRAL_CARDS));
        deal.push(Role::Assassin);
        rng.shuffle(&mut deal);

        let roles: FxHashMap<Word, Role> = words.iter().cloned().zip(deal).collect();

        let remaining = TeamMap::new(|team| {
            roles.values().filter(|r| r.belongs_to(team)).count() as u8
        });

        tracing::debug!(seed = rng.seed(), starting = %starting, "board dealt");

        Ok(Self {
            words,
            roles,
            revealed: ImHashSet::new(),
            turn: starting,
            remaining,
            over: false,
            winner: None,
        })
    }

    /// Build a state from a known deal.
    ///
    /// For hosts and tests that need a fixed board instead of a random
    /// one. Words must be distinct; tallies are computed from the roles.
    #[must_use]
    pub fn from_cards(cards: Vec<(Word, Role)>, starting: Team) -> Self {
        let words: Vec<Word> = cards.iter().map(|(w, _)| w.clone()).collect();
        let roles: FxHashMap<Word, Role> = cards.into_iter().collect();

        let remaining = TeamMap::new(|team| {
            roles.values().filter(|r| r.belongs_to(team)).count() as u8
        });

        Self {
            words,
            roles,
            revealed: ImHashSet::new(),
            turn: starting,
            remaining,
            over: false,
            winner: None,
        }
    }

    // === Queries ===

    /// Board words in row-major order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word at a (row, column) position, if in range.
    #[must_use]
    pub fn word_at(&self, row: usize, col: usize) -> Option<&Word> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            self.words.get(row * BOARD_SIZE + col)
        } else {
            None
        }
    }

    /// (row, column) position of a board word.
    #[must_use]
    pub fn position_of(&self, word: &Word) -> Option<(usize, usize)> {
        self.words
            .iter()
            .position(|w| w == word)
            .map(|i| (i / BOARD_SIZE, i % BOARD_SIZE))
    }

    /// Whether a token names a board word (case-insensitive).
    ///
    /// Clue legality check: clue text may never coincide with a board
    /// word.
    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        let upper = text.to_uppercase();
        self.roles.contains_key(upper.as_str())
    }

    /// Secret role of a board word.
    ///
    /// `None` for words not on this board. Only safe to expose to a
    /// spymaster view; an operative view must withhold it until the word
    /// is revealed.
    #[must_use]
    pub fn role_of(&self, word: &Word) -> Option<Role> {
        self.roles.get(word).copied()
    }

    /// Whether a word has been revealed.
    #[must_use]
    pub fn is_revealed(&self, word: &Word) -> bool {
        self.revealed.contains(word)
    }

    /// Words revealed so far.
    pub fn revealed_words(&self) -> impl Iterator<Item = &Word> {
        self.revealed.iter()
    }

    /// Unrevealed board words, in board order.
    pub fn unrevealed_words(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|w| !self.revealed.contains(*w))
    }

    /// Unrevealed words belonging to a team, in board order.
    #[must_use]
    pub fn team_words(&self, team: Team) -> Vec<&Word> {
        self.unrevealed_words()
            .filter(|w| self.roles.get(*w).is_some_and(|r| r.belongs_to(team)))
            .collect()
    }

    /// Unrevealed own-color cards for a team.
    #[must_use]
    pub fn remaining(&self, team: Team) -> usize {
        self.remaining[team] as usize
    }

    /// Team whose clue/guess cycle is active.
    #[must_use]
    pub fn turn(&self) -> Team {
        self.turn
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Winning team, once the game has ended with one.
    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    /// Winner by card count: the team that found all its own words first.
    ///
    /// Pure query. Returns the team whose own remaining count is 0. Red
    /// is checked first; both counts reaching 0 simultaneously cannot
    /// occur under one-reveal-at-a-time play.
    #[must_use]
    pub fn check_winner(&self) -> Option<Team> {
        Team::BOTH
            .into_iter()
            .find(|&team| self.remaining[team] == 0)
    }

    // === Mutation ===

    /// Reveal a word, returning its role.
    ///
    /// Fails softly with `None` (nothing applied) when the word is not on
    /// the board, already revealed, or the game is over. Decrements the
    /// matching team tally. The sole mutator of the revealed set; never
    /// flips the turn or sets the outcome, which are orchestrator
    /// responsibilities.
    pub fn reveal(&mut self, word: &Word) -> Option<Role> {
        if self.over || self.revealed.contains(word) {
            return None;
        }
        let role = *self.roles.get(word)?;

        self.revealed.insert(word.clone());
        if let Some(team) = role.team() {
            self.remaining[team] -= 1;
        }

        tracing::debug!(word = %word, role = %role, "card revealed");
        Some(role)
    }

    /// Hand the turn to `team`.
    pub(crate) fn set_turn(&mut self, team: Team) {
        self.turn = team;
    }

    /// Mark the game over.
    pub(crate) fn finish(&mut self, winner: Option<Team>) {
        self.over = true;
        self.winner = winner;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dealt(seed: u64) -> GameState {
        let mut rng = GameRng::new(seed);
        GameState::setup(&Lexicon::standard(), &mut rng).unwrap()
    }

    #[test]
    fn test_setup_deals_25_distinct_words() {
        let state = dealt(42);

        assert_eq!(state.words().len(), BOARD_WORDS);

        let mut unique = state.words().to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), BOARD_WORDS);
    }

    #[test]
    fn test_setup_role_distribution() {
        for seed in 0..20 {
            let state = dealt(seed);

            let assassins = state
                .words()
                .iter()
                .filter(|w| state.role_of(w) == Some(Role::Assassin))
                .count();
            let neutrals = state
                .words()
                .iter()
                .filter(|w| state.role_of(w) == Some(Role::Neutral))
                .count();

            assert_eq!(assassins, 1);
            assert_eq!(neutrals, NEUTRAL_CARDS);
            assert_eq!(state.remaining(state.turn()), STARTING_TEAM_CARDS);
            assert_eq!(state.remaining(state.turn().other()), SECOND_TEAM_CARDS);
        }
    }

    #[test]
    fn test_setup_small_lexicon_fails() {
        let lexicon = Lexicon::new(["CAT", "DOG", "FISH"]).unwrap();
        let mut rng = GameRng::new(42);

        let result = GameState::setup(&lexicon, &mut rng);
        assert_eq!(
            result.err(),
            Some(EngineError::LexiconTooSmall {
                found: 3,
                needed: BOARD_WORDS
            })
        );
    }

    #[test]
    fn test_setup_deterministic() {
        let a = dealt(7);
        let b = dealt(7);

        assert_eq!(a.words(), b.words());
        assert_eq!(a.turn(), b.turn());
        for word in a.words() {
            assert_eq!(a.role_of(word), b.role_of(word));
        }
    }

    #[test]
    fn test_grid_addressing() {
        let state = dealt(42);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let word = state.word_at(row, col).unwrap();
                assert_eq!(state.position_of(word), Some((row, col)));
            }
        }
        assert!(state.word_at(5, 0).is_none());
        assert!(state.word_at(0, 5).is_none());
    }

    #[test]
    fn test_role_of_off_board_word() {
        let state = dealt(42);
        assert_eq!(state.role_of(&Word::new("NOT-ON-BOARD")), None);
    }

    #[test]
    fn test_contains_text() {
        let state = dealt(42);
        let first = state.words()[0].clone();

        assert!(state.contains_text(first.as_str()));
        assert!(state.contains_text(&first.as_str().to_lowercase()));
        assert!(!state.contains_text("definitely-not-a-word"));
    }

    #[test]
    fn test_reveal_decrements_matching_tally() {
        let mut state = dealt(42);
        let red_word = state.team_words(Team::Red)[0].clone();
        let before = state.remaining(Team::Red);

        assert_eq!(state.reveal(&red_word), Some(Role::Red));
        assert_eq!(state.remaining(Team::Red), before - 1);
        assert!(state.is_revealed(&red_word));
    }

    #[test]
    fn test_reveal_neutral_leaves_tallies() {
        let mut state = dealt(42);
        let neutral = state
            .words()
            .iter()
            .find(|w| state.role_of(w) == Some(Role::Neutral))
            .cloned()
            .unwrap();
        let red = state.remaining(Team::Red);
        let blue = state.remaining(Team::Blue);

        assert_eq!(state.reveal(&neutral), Some(Role::Neutral));
        assert_eq!(state.remaining(Team::Red), red);
        assert_eq!(state.remaining(Team::Blue), blue);
    }

    #[test]
    fn test_reveal_idempotent_safe() {
        let mut state = dealt(42);
        let word = state.words()[0].clone();

        let first = state.reveal(&word);
        assert!(first.is_some());

        let red = state.remaining(Team::Red);
        let blue = state.remaining(Team::Blue);

        assert_eq!(state.reveal(&word), None);
        assert_eq!(state.remaining(Team::Red), red);
        assert_eq!(state.remaining(Team::Blue), blue);
    }

    #[test]
    fn test_reveal_off_board_not_applied() {
        let mut state = dealt(42);
        assert_eq!(state.reveal(&Word::new("NOT-ON-BOARD")), None);
    }

    #[test]
    fn test_reveal_refused_after_game_over() {
        let mut state = dealt(42);
        let word = state.words()[0].clone();

        state.finish(Some(Team::Red));
        assert_eq!(state.reveal(&word), None);
    }

    #[test]
    fn test_check_winner_direction() {
        // The team whose own remaining count reaches 0 found all its
        // words first, and wins.
        let mut state = dealt(42);
        assert_eq!(state.check_winner(), None);

        for word in state.team_words(Team::Blue).into_iter().cloned().collect::<Vec<_>>() {
            state.reveal(&word);
        }

        assert_eq!(state.remaining(Team::Blue), 0);
        assert_eq!(state.check_winner(), Some(Team::Blue));
    }

    #[test]
    fn test_remaining_matches_unrevealed_counts() {
        let mut state = dealt(42);
        let mut rng = GameRng::new(9);

        for _ in 0..10 {
            let word = {
                let unrevealed: Vec<_> = state.unrevealed_words().cloned().collect();
                rng.choose(&unrevealed).cloned().unwrap()
            };
            state.reveal(&word);

            for team in Team::BOTH {
                assert_eq!(state.remaining(team), state.team_words(team).len());
            }
        }
    }

    #[test]
    fn test_from_cards() {
        let state = GameState::from_cards(
            vec![
                (Word::new("CAT"), Role::Red),
                (Word::new("TRAIN"), Role::Blue),
                (Word::new("WALL"), Role::Neutral),
                (Word::new("GHOST"), Role::Assassin),
            ],
            Team::Red,
        );

        assert_eq!(state.remaining(Team::Red), 1);
        assert_eq!(state.remaining(Team::Blue), 1);
        assert_eq!(state.turn(), Team::Red);
        assert_eq!(state.role_of(&Word::new("GHOST")), Some(Role::Assassin));
    }

    #[test]
    fn test_state_snapshot_is_independent() {
        let mut state = dealt(42);
        let snapshot = state.clone();
        let word = state.words()[0].clone();

        state.reveal(&word);

        assert!(state.is_revealed(&word));
        assert!(!snapshot.is_revealed(&word));
    }
}
