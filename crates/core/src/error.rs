// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use liga_domain::{ClubId, DomainError, GameId, GameStatus};

/// Errors that can occur during game transitions and scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A snapshot was assembled with an event belonging to another game.
    ForeignEvent {
        /// The game the snapshot is for.
        game: GameId,
        /// The game the offending event belongs to.
        event_game: GameId,
    },
    /// A participation query named a club that plays in neither side
    /// of the game.
    ClubNotInGame {
        /// The game.
        game: GameId,
        /// The club that is neither home nor away.
        club: ClubId,
    },
    /// A transition result was committed against a game whose status
    /// moved since the snapshot was taken.
    StaleTransition {
        /// The status the snapshot was taken under.
        expected: GameStatus,
        /// The status the game holds now.
        found: GameStatus,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::ForeignEvent { game, event_game } => {
                write!(
                    f,
                    "Snapshot for game {game} contains an event of game {event_game}"
                )
            }
            Self::ClubNotInGame { game, club } => {
                write!(f, "Club {club} plays in neither side of game {game}")
            }
            Self::StaleTransition { expected, found } => {
                write!(
                    f,
                    "Game status moved from '{expected}' to '{found}' since the snapshot was taken"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
