//! Turn orchestrator: the alternating-turn state machine.
//!
//! Drives the protocol one transition at a time: ask the active team's
//! spymaster for a clue, then repeatedly ask its operative for guesses,
//! applying reveals and checking termination until a turn-ending
//! condition is met. Fully synchronous; nothing suspends mid-transition,
//! so a host may drive it one `step` at a time from any scheduling model
//! it likes, or just call `run`.
//!
//! ## Phases
//!
//! `AwaitingClue(team)` → `Guessing(team, clue)` → `TurnEnd(next)` →
//! back to `AwaitingClue`. Terminal: `GameOver(winner)`.
//!
//! A configurable turn-count ceiling forces a non-winning termination if
//! both policies deadlock (for example by always passing).

use serde::{Deserialize, Serialize};

use crate::core::{Clue, Role, Team, TeamMap};
use crate::lexicon::Word;
use crate::policy::{AiOperative, AiSpymaster, ClueProvider, GuessProvider};
use crate::state::GameState;

/// Orchestrator tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// Clue/guess cycles before the game is forced to end without a
    /// winner.
    pub max_turns: u32,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self { max_turns: 50 }
    }
}

/// The two decision seats of one team.
///
/// Either seat may be a heuristic or a human-backed provider; the
/// orchestrator cannot tell the difference.
pub struct TeamAgents {
    pub spymaster: Box<dyn ClueProvider>,
    pub operative: Box<dyn GuessProvider>,
}

impl TeamAgents {
    /// Both seats played by the built-in heuristics.
    #[must_use]
    pub fn heuristic() -> Self {
        Self {
            spymaster: Box::new(AiSpymaster::new()),
            operative: Box::new(AiOperative::new()),
        }
    }
}

/// Current phase of the turn state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the active team's spymaster.
    AwaitingClue { team: Team },
    /// The active team's operative is guessing under a clue.
    Guessing {
        team: Team,
        clue: Clue,
        guesses_made: usize,
        max_guesses: usize,
    },
    /// The turn is over; the other team is up next.
    TurnEnd { next: Team },
    /// Terminal. `winner` is `None` when the turn ceiling forced a
    /// non-winning termination.
    GameOver { winner: Option<Team> },
}

/// One observable game occurrence, produced per `step`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The spymaster gave a clue.
    ClueGiven { team: Team, clue: Clue },
    /// The spymaster passed; the turn is forfeited without a reveal.
    TurnForfeited { team: Team },
    /// The operative revealed a word.
    GuessMade { team: Team, word: Word, role: Role },
    /// The operative declined to guess.
    GuessPassed { team: Team },
    /// The operative named a word the board would not reveal; treated as
    /// an implicit pass.
    GuessRejected { team: Team, word: Word },
    /// The turn passed to the other team.
    TurnEnded { next: Team },
    /// Terminal; repeated by every further step.
    GameOver { winner: Option<Team> },
}

/// Drives one game from setup to termination.
pub struct Orchestrator {
    state: GameState,
    agents: TeamMap<TeamAgents>,
    phase: Phase,
    turns_taken: u32,
    config: OrchestratorConfig,
}

impl Orchestrator {
    /// Create an orchestrator over a dealt board with per-team agents.
    #[must_use]
    pub fn new(state: GameState, agents: TeamMap<TeamAgents>) -> Self {
        Self::with_config(state, agents, OrchestratorConfig::default())
    }

    /// Create an orchestrator with explicit tuning.
    #[must_use]
    pub fn with_config(
        state: GameState,
        agents: TeamMap<TeamAgents>,
        config: OrchestratorConfig,
    ) -> Self {
        let phase = Phase::AwaitingClue { team: state.turn() };
        Self {
            state,
            agents,
            phase,
            turns_taken: 0,
            config,
        }
    }

    /// Create an AI-vs-AI orchestrator with default tuning.
    #[must_use]
    pub fn ai_vs_ai(state: GameState) -> Self {
        Self::new(state, TeamMap::new(|_| TeamAgents::heuristic()))
    }

    /// The game state (read-only for hosts).
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Clue/guess cycles started so far.
    #[must_use]
    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    /// Whether the state machine is terminal.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    /// Winner, once terminal. `None` while running or after a forced
    /// non-winning termination.
    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        match self.phase {
            Phase::GameOver { winner } => winner,
            _ => None,
        }
    }

    /// Perform one state transition and report what happened.
    ///
    /// In the terminal phase this is a no-op that repeats the
    /// `GameOver` event.
    pub fn step(&mut self) -> GameEvent {
        match self.phase.clone() {
            Phase::AwaitingClue { team } => self.step_awaiting_clue(team),
            Phase::Guessing {
                team,
                clue,
                guesses_made,
                max_guesses,
            } => self.step_guessing(team, clue, guesses_made, max_guesses),
            Phase::TurnEnd { next } => {
                self.state.set_turn(next);
                self.phase = Phase::AwaitingClue { team: next };
                GameEvent::TurnEnded { next }
            }
            Phase::GameOver { winner } => GameEvent::GameOver { winner },
        }
    }

    /// Run to termination, collecting every event including the final
    /// `GameOver`.
    pub fn run(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        loop {
            let event = self.step();
            let done = matches!(event, GameEvent::GameOver { .. });
            events.push(event);
            if done {
                return events;
            }
        }
    }

    fn step_awaiting_clue(&mut self, team: Team) -> GameEvent {
        if self.turns_taken >= self.config.max_turns {
            tracing::info!(turns = self.turns_taken, "turn ceiling reached, no winner");
            self.phase = Phase::GameOver { winner: None };
            return GameEvent::GameOver { winner: None };
        }
        self.turns_taken += 1;

        let clue = self.agents[team].spymaster.generate_clue(&self.state, team);

        if clue.is_pass() {
            tracing::debug!(team = %team, "spymaster passes, turn forfeited");
            self.phase = Phase::TurnEnd { next: team.other() };
            return GameEvent::TurnForfeited { team };
        }

        tracing::debug!(team = %team, clue = %clue, "clue given");
        self.phase = Phase::Guessing {
            team,
            max_guesses: clue.max_guesses(),
            guesses_made: 0,
            clue: clue.clone(),
        };
        GameEvent::ClueGiven { team, clue }
    }

    fn step_guessing(
        &mut self,
        team: Team,
        clue: Clue,
        guesses_made: usize,
        max_guesses: usize,
    ) -> GameEvent {
        let guess = self.agents[team].operative.make_guess(&self.state, &clue);

        let Some(word) = guess else {
            tracing::debug!(team = %team, "operative passes");
            self.phase = Phase::TurnEnd { next: team.other() };
            return GameEvent::GuessPassed { team };
        };

        let Some(role) = self.state.reveal(&word) else {
            // A misbehaving policy degrades the game, never crashes it:
            // an unrevealable word is an implicit pass.
            tracing::warn!(team = %team, word = %word, "reveal not applied, implicit pass");
            self.phase = Phase::TurnEnd { next: team.other() };
            return GameEvent::GuessRejected { team, word };
        };

        let guesses_made = guesses_made + 1;

        // Winner check takes priority over every other transition.
        if let Some(winner) = self.state.check_winner() {
            tracing::info!(winner = %winner, "all team words found");
            self.state.finish(Some(winner));
            self.phase = Phase::GameOver {
                winner: Some(winner),
            };
        } else if role == Role::Assassin {
            // Instant loss for the acting team.
            let winner = team.other();
            tracing::info!(team = %team, winner = %winner, "assassin revealed");
            self.state.finish(Some(winner));
            self.phase = Phase::GameOver {
                winner: Some(winner),
            };
        } else if !role.belongs_to(team) {
            // A single miss stops further guessing.
            self.phase = Phase::TurnEnd { next: team.other() };
        } else if guesses_made >= max_guesses {
            self.phase = Phase::TurnEnd { next: team.other() };
        } else {
            self.phase = Phase::Guessing {
                team,
                clue,
                guesses_made,
                max_guesses,
            };
        }

        GameEvent::GuessMade { team, word, role }
    }
}
