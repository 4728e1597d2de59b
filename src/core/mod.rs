//! Core engine types: teams, roles, clues, RNG, errors.
//!
//! This module contains the fundamental building blocks shared by the
//! game state, the AI policies, and the orchestrator.

pub mod clue;
pub mod error;
pub mod rng;
pub mod team;

pub use clue::{Clue, PASS};
pub use error::EngineError;
pub use rng::{GameRng, GameRngState};
pub use team::{Role, Team, TeamMap};
