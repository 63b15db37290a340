// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-game events: goals, cards, substitutions, and starting lineups.
//!
//! Goals, cards and substitutions share the [`GameEvent`] capability:
//! each belongs to a game, names a principal player, and is stamped
//! with a minute. The event ledger in `liga-core` queries over this
//! capability rather than over the concrete types.

use crate::error::DomainError;
use crate::types::{GameId, Minute, PlayerId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A minute-stamped event tied to a game and a principal player.
pub trait GameEvent {
    /// The game this event belongs to.
    fn game_id(&self) -> GameId;

    /// The principal player of the event: the scorer for a goal, the
    /// carded player for a card, the outgoing player for a substitution.
    fn player_id(&self) -> PlayerId;

    /// The minute the event occurred.
    fn minute(&self) -> Minute;
}

/// The kind of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    /// An ordinary goal from open play.
    #[default]
    Regular,
    /// An own goal.
    Own,
    /// A converted penalty.
    Penalty,
    /// A penalty stopped by the goalkeeper.
    PenaltySaved,
    /// A penalty missed wide or over.
    PenaltyOut,
}

impl GoalKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Own => "own",
            Self::Penalty => "penalty",
            Self::PenaltySaved => "penalty_saved",
            Self::PenaltyOut => "penalty_out",
        }
    }

    /// Parses a kind from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGoalKind` if the string is not a valid kind.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "regular" => Ok(Self::Regular),
            "own" => Ok(Self::Own),
            "penalty" => Ok(Self::Penalty),
            "penalty_saved" => Ok(Self::PenaltySaved),
            "penalty_out" => Ok(Self::PenaltyOut),
            _ => Err(DomainError::InvalidGoalKind(s.to_string())),
        }
    }
}

impl FromStr for GoalKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for GoalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of a disciplinary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Yellow,
    Red,
}

impl CardKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }

    /// Parses a kind from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCardKind` if the string is not a valid kind.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "yellow" => Ok(Self::Yellow),
            "red" => Ok(Self::Red),
            _ => Err(DomainError::InvalidCardKind(s.to_string())),
        }
    }
}

impl FromStr for CardKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A goal scored within a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// The row identifier.
    pub id: i64,
    /// The game this goal belongs to.
    pub game_id: GameId,
    /// The scorer.
    pub scorer: PlayerId,
    /// The assisting player, if any.
    pub assistant: Option<PlayerId>,
    /// The minute the goal was scored.
    pub minute: Minute,
    /// The kind of goal.
    pub kind: GoalKind,
}

impl Goal {
    /// Creates a new `Goal`.
    #[must_use]
    pub const fn new(
        id: i64,
        game_id: GameId,
        scorer: PlayerId,
        assistant: Option<PlayerId>,
        minute: Minute,
        kind: GoalKind,
    ) -> Self {
        Self {
            id,
            game_id,
            scorer,
            assistant,
            minute,
            kind,
        }
    }
}

impl GameEvent for Goal {
    fn game_id(&self) -> GameId {
        self.game_id
    }

    fn player_id(&self) -> PlayerId {
        self.scorer
    }

    fn minute(&self) -> Minute {
        self.minute
    }
}

/// A disciplinary card shown within a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// The row identifier.
    pub id: i64,
    /// The game this card belongs to.
    pub game_id: GameId,
    /// The carded player.
    pub player_id: PlayerId,
    /// The minute the card was shown.
    pub minute: Minute,
    /// The kind of card.
    pub kind: CardKind,
}

impl Card {
    /// Creates a new `Card`.
    #[must_use]
    pub const fn new(
        id: i64,
        game_id: GameId,
        player_id: PlayerId,
        minute: Minute,
        kind: CardKind,
    ) -> Self {
        Self {
            id,
            game_id,
            player_id,
            minute,
            kind,
        }
    }
}

impl GameEvent for Card {
    fn game_id(&self) -> GameId {
        self.game_id
    }

    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn minute(&self) -> Minute {
        self.minute
    }
}

/// A substitution: one player leaves the pitch, another enters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    /// The row identifier.
    pub id: i64,
    /// The game this substitution belongs to.
    pub game_id: GameId,
    /// The outgoing player.
    pub player_out: PlayerId,
    /// The incoming player.
    pub player_in: PlayerId,
    /// The minute of the substitution.
    pub minute: Minute,
}

impl Substitution {
    /// Creates a new `Substitution`.
    #[must_use]
    pub const fn new(
        id: i64,
        game_id: GameId,
        player_out: PlayerId,
        player_in: PlayerId,
        minute: Minute,
    ) -> Self {
        Self {
            id,
            game_id,
            player_out,
            player_in,
            minute,
        }
    }
}

impl GameEvent for Substitution {
    fn game_id(&self) -> GameId {
        self.game_id
    }

    fn player_id(&self) -> PlayerId {
        self.player_out
    }

    fn minute(&self) -> Minute {
        self.minute
    }
}

/// A starting lineup assignment of a player to a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    /// The row identifier.
    pub id: i64,
    /// The game this assignment belongs to.
    pub game_id: GameId,
    /// The starting player.
    pub player_id: PlayerId,
}

impl Lineup {
    /// Creates a new `Lineup`.
    #[must_use]
    pub const fn new(id: i64, game_id: GameId, player_id: PlayerId) -> Self {
        Self {
            id,
            game_id,
            player_id,
        }
    }
}
