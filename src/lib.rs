//! # codenames-engine
//!
//! A rules engine and heuristic decision-maker for the word-association
//! board game Codenames, playable with AI agents on either or both sides.
//!
//! ## Design Principles
//!
//! 1. **Core only**: the game state machine, the two AI policies, and the
//!    turn orchestrator. Rendering, console prompts, and any other
//!    presentation concerns are external collaborators that call into the
//!    core and display its results.
//!
//! 2. **Deterministic**: randomness is an injected, seedable dependency.
//!    The same seed replays the same deal and the same game.
//!
//! 3. **Substitutable seats**: the spymaster and operative seats are
//!    traits, so a human-driven provider slots in wherever a heuristic
//!    does.
//!
//! ## Architecture
//!
//! The orchestrator owns the game state and drives a pure call/return
//! state machine: clue from the active team's spymaster, guesses from its
//! operative, reveals applied to the state, termination checked after
//! every reveal. Policies only ever read the state. Single-threaded and
//! fully synchronous; a host may re-enter it one decision at a time from
//! an event loop.
//!
//! ## Modules
//!
//! - `core`: teams, roles, clues, RNG, errors
//! - `lexicon`: the candidate word pool
//! - `state`: board, role assignment, reveals, tallies, outcome
//! - `associations`: the static category table shared by both policies
//! - `policy`: the `ClueProvider`/`GuessProvider` seats and heuristics
//! - `orchestrator`: the alternating-turn state machine
//!
//! ## Example
//!
//! ```
//! use codenames_engine::core::GameRng;
//! use codenames_engine::lexicon::Lexicon;
//! use codenames_engine::orchestrator::Orchestrator;
//! use codenames_engine::state::GameState;
//!
//! let mut rng = GameRng::new(42);
//! let state = GameState::setup(&Lexicon::standard(), &mut rng).unwrap();
//!
//! let mut game = Orchestrator::ai_vs_ai(state);
//! let events = game.run();
//! assert!(!events.is_empty());
//! ```

pub mod associations;
pub mod core;
pub mod lexicon;
pub mod orchestrator;
pub mod policy;
pub mod state;

// Re-export commonly used types
pub use crate::core::{Clue, EngineError, GameRng, GameRngState, Role, Team, TeamMap, PASS};

pub use crate::lexicon::{Lexicon, Word, WORD_POOL};

pub use crate::state::{GameState, BOARD_SIZE, BOARD_WORDS};

pub use crate::associations::{categories_of, category_named, share_category, Category, CATEGORIES};

pub use crate::policy::{AiOperative, AiSpymaster, ClueProvider, GuessProvider};

pub use crate::orchestrator::{GameEvent, Orchestrator, OrchestratorConfig, Phase, TeamAgents};
