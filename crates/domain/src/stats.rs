// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fantasy-point stat entries and the per-player stat ledger.
//!
//! Awards are modeled as an explicit ledger of tagged entries rather
//! than in-place arithmetic: recording appends an entry carrying the
//! tag's fixed points, and removal deletes the matching entry. A remove
//! therefore exactly reverses a prior record, and totals can always be
//! re-derived from the entries.

use crate::error::DomainError;
use crate::types::{GameId, PlayerId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A labeled category of point award.
///
/// Point values are fixed league rules, not configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatTag {
    /// Playing for the club that won the game.
    Winner,
    /// Keeping goal for a club that conceded nothing.
    UnbeatenGoalkeeper,
    /// Keeping goal for a club that conceded exactly one.
    BeatenGoalkeeper,
    /// Defending for a club that conceded nothing.
    UnbeatenDefender,
}

impl StatTag {
    /// Returns the points this tag awards.
    #[must_use]
    pub const fn points(self) -> i16 {
        match self {
            Self::UnbeatenGoalkeeper => 2,
            Self::Winner | Self::BeatenGoalkeeper | Self::UnbeatenDefender => 1,
        }
    }

    /// Returns the string representation of the tag.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Winner => "winner",
            Self::UnbeatenGoalkeeper => "unbeaten_goalkeeper",
            Self::BeatenGoalkeeper => "beaten_goalkeeper",
            Self::UnbeatenDefender => "unbeaten_defender",
        }
    }

    /// Parses a tag from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatTag` if the string is not a valid tag.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "winner" => Ok(Self::Winner),
            "unbeaten_goalkeeper" => Ok(Self::UnbeatenGoalkeeper),
            "beaten_goalkeeper" => Ok(Self::BeatenGoalkeeper),
            "unbeaten_defender" => Ok(Self::UnbeatenDefender),
            _ => Err(DomainError::InvalidStatTag(s.to_string())),
        }
    }
}

impl FromStr for StatTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for StatTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single point award to a player for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    /// The game the award was produced by.
    pub game_id: GameId,
    /// The awarded player.
    pub player_id: PlayerId,
    /// The award category.
    pub tag: StatTag,
    /// The points awarded, copied from the tag at record time.
    pub points: i16,
}

/// The append/remove ledger of stat entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatLedger {
    entries: Vec<StatEntry>,
}

impl StatLedger {
    /// Creates a new empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records an award of the tag's points to the player for the game.
    pub fn record(&mut self, game_id: GameId, player_id: PlayerId, tag: StatTag) {
        self.entries.push(StatEntry {
            game_id,
            player_id,
            tag,
            points: tag.points(),
        });
    }

    /// Removes the first entry matching the game, player and tag.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StatEntryNotFound` if no matching entry exists.
    pub fn remove(
        &mut self,
        game_id: GameId,
        player_id: PlayerId,
        tag: StatTag,
    ) -> Result<(), DomainError> {
        let index = self
            .entries
            .iter()
            .position(|entry| {
                entry.game_id == game_id && entry.player_id == player_id && entry.tag == tag
            })
            .ok_or(DomainError::StatEntryNotFound {
                game: game_id,
                player: player_id,
                tag,
            })?;
        self.entries.remove(index);
        Ok(())
    }

    /// Sums the player's points for one game.
    #[must_use]
    pub fn points_of(&self, player_id: PlayerId, game_id: GameId) -> i16 {
        self.entries
            .iter()
            .filter(|entry| entry.player_id == player_id && entry.game_id == game_id)
            .map(|entry| entry.points)
            .sum()
    }

    /// Sums the player's points across all games.
    #[must_use]
    pub fn total_points_of(&self, player_id: PlayerId) -> i16 {
        self.entries
            .iter()
            .filter(|entry| entry.player_id == player_id)
            .map(|entry| entry.points)
            .sum()
    }

    /// Returns every entry produced by the given game.
    #[must_use]
    pub fn entries_of_game(&self, game_id: GameId) -> Vec<&StatEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.game_id == game_id)
            .collect()
    }

    /// Returns all entries in record order.
    #[must_use]
    pub fn entries(&self) -> &[StatEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the ledger has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
