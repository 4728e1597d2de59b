//! Teams, card roles, and per-team data storage.
//!
//! ## Team
//!
//! One of the two competing sides, Red or Blue.
//!
//! ## Role
//!
//! The hidden assignment of a board word: one of the team colors,
//! Neutral, or the Assassin.
//!
//! ## TeamMap
//!
//! Per-team data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Team`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two competing teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    /// Both teams, in Red-first order.
    pub const BOTH: [Team; 2] = [Team::Red, Team::Blue];

    /// The opposing team.
    #[must_use]
    pub const fn other(self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    /// Stable 0-based index (Red = 0, Blue = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Team::Red => 0,
            Team::Blue => 1,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Red => write!(f, "RED"),
            Team::Blue => write!(f, "BLUE"),
        }
    }
}

/// The hidden role of a board word.
///
/// Assigned once at setup and never changed. Exactly one word per board
/// carries `Assassin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Red,
    Blue,
    Neutral,
    Assassin,
}

impl Role {
    /// The team this role belongs to, if any.
    #[must_use]
    pub const fn team(self) -> Option<Team> {
        match self {
            Role::Red => Some(Team::Red),
            Role::Blue => Some(Team::Blue),
            Role::Neutral | Role::Assassin => None,
        }
    }

    /// Whether this role is the team color of `team`.
    #[must_use]
    pub fn belongs_to(self, team: Team) -> bool {
        self.team() == Some(team)
    }
}

impl From<Team> for Role {
    fn from(team: Team) -> Self {
        match team {
            Team::Red => Role::Red,
            Team::Blue => Role::Blue,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Red => write!(f, "RED"),
            Role::Blue => write!(f, "BLUE"),
            Role::Neutral => write!(f, "NEUTRAL"),
            Role::Assassin => write!(f, "ASSASSIN"),
        }
    }
}

/// Per-team data storage with O(1) access.
///
/// Backed by a fixed two-element array, indexed by `Team`.
///
/// ## Example
///
/// ```
/// use codenames_engine::core::{Team, TeamMap};
///
/// let mut remaining: TeamMap<u8> = TeamMap::with_value(9);
///
/// remaining[Team::Blue] = 8;
/// assert_eq!(remaining[Team::Red], 9);
/// assert_eq!(remaining[Team::Blue], 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: [T; 2],
}

impl<T> TeamMap<T> {
    /// Create a new TeamMap with values from a factory function.
    pub fn new(factory: impl Fn(Team) -> T) -> Self {
        Self {
            data: [factory(Team::Red), factory(Team::Blue)],
        }
    }

    /// Create a new TeamMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: Team) -> &T {
        &self.data[team.index()]
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: Team) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over (Team, &T) pairs in Red-first order.
    pub fn iter(&self) -> impl Iterator<Item = (Team, &T)> {
        Team::BOTH.iter().map(|&t| (t, self.get(t)))
    }
}

impl<T: Default> Default for TeamMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Team> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: Team) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<Team> for TeamMap<T> {
    fn index_mut(&mut self, team: Team) -> &mut Self::Output {
        self.get_mut(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_other() {
        assert_eq!(Team::Red.other(), Team::Blue);
        assert_eq!(Team::Blue.other(), Team::Red);
        assert_eq!(Team::Red.other().other(), Team::Red);
    }

    #[test]
    fn test_team_display() {
        assert_eq!(format!("{}", Team::Red), "RED");
        assert_eq!(format!("{}", Team::Blue), "BLUE");
    }

    #[test]
    fn test_role_team() {
        assert_eq!(Role::Red.team(), Some(Team::Red));
        assert_eq!(Role::Blue.team(), Some(Team::Blue));
        assert_eq!(Role::Neutral.team(), None);
        assert_eq!(Role::Assassin.team(), None);
    }

    #[test]
    fn test_role_belongs_to() {
        assert!(Role::Red.belongs_to(Team::Red));
        assert!(!Role::Red.belongs_to(Team::Blue));
        assert!(!Role::Neutral.belongs_to(Team::Red));
        assert!(!Role::Assassin.belongs_to(Team::Blue));
    }

    #[test]
    fn test_role_from_team() {
        assert_eq!(Role::from(Team::Red), Role::Red);
        assert_eq!(Role::from(Team::Blue), Role::Blue);
    }

    #[test]
    fn test_team_map_new() {
        let map: TeamMap<usize> = TeamMap::new(|t| t.index() * 10);

        assert_eq!(map[Team::Red], 0);
        assert_eq!(map[Team::Blue], 10);
    }

    #[test]
    fn test_team_map_mutation() {
        let mut map: TeamMap<i32> = TeamMap::with_value(0);

        map[Team::Red] = 9;
        map[Team::Blue] = 8;

        assert_eq!(map[Team::Red], 9);
        assert_eq!(map[Team::Blue], 8);
    }

    #[test]
    fn test_team_map_iter() {
        let map: TeamMap<i32> = TeamMap::new(|t| t.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Team::Red, &0), (Team::Blue, &1)]);
    }

    #[test]
    fn test_team_map_serialization() {
        let map: TeamMap<i32> = TeamMap::new(|t| t.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: TeamMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
