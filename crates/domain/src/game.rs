// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::GameStatus;
use crate::types::{ClubId, GameId, LeagueId, Season, Week};
use serde::{Deserialize, Serialize};
use time::Date;

/// Which side of a game a club occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Returns the string representation of the side.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Away => "away",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scheduled match between two clubs within a league, season and week.
///
/// The status field is mutated only through the transition logic in
/// `liga-core`; everything else is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// The game identifier.
    pub game_id: GameId,
    /// The league the game is played in.
    pub league_id: LeagueId,
    /// The home club.
    pub club_home: ClubId,
    /// The away club.
    pub club_away: ClubId,
    /// The season (four-digit year).
    pub season: Season,
    /// The match week within the season.
    pub week: Week,
    /// The calendar date the game is played on.
    pub date: Date,
    /// The lifecycle status.
    pub status: GameStatus,
}

impl Game {
    /// Creates a new `Game`.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        game_id: GameId,
        league_id: LeagueId,
        club_home: ClubId,
        club_away: ClubId,
        season: Season,
        week: Week,
        date: Date,
        status: GameStatus,
    ) -> Self {
        Self {
            game_id,
            league_id,
            club_home,
            club_away,
            season,
            week,
            date,
            status,
        }
    }

    /// Checks whether the given club takes part in this game.
    #[must_use]
    pub fn involves(&self, club_id: ClubId) -> bool {
        self.side_of(club_id).is_some()
    }

    /// Returns which side the given club occupies, if it plays in this game.
    #[must_use]
    pub fn side_of(&self, club_id: ClubId) -> Option<Side> {
        if club_id == self.club_home {
            Some(Side::Home)
        } else if club_id == self.club_away {
            Some(Side::Away)
        } else {
            None
        }
    }

    /// Returns the opposing club of the given club, if it plays in this game.
    #[must_use]
    pub fn opponent_of(&self, club_id: ClubId) -> Option<ClubId> {
        match self.side_of(club_id)? {
            Side::Home => Some(self.club_away),
            Side::Away => Some(self.club_home),
        }
    }

    /// Renders the final score once the game is closed, "-" otherwise.
    ///
    /// The tallies are computed by the scoring engine; this only formats
    /// them according to the game's status.
    #[must_use]
    pub fn result(&self, home_goals: usize, away_goals: usize) -> String {
        if self.status == GameStatus::Closed {
            format!("{home_goals} - {away_goals}")
        } else {
            String::from("-")
        }
    }
}
