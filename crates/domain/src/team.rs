// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fantasy team composition rules.
//!
//! A team signs player files against a fixed money budget and a fixed
//! number of file slots, with per-position minimums and maximums. A
//! file stays current until its `date_out` is set; only current files
//! occupy slots and charge the budget.

use crate::types::{LeagueId, PlayerId, Position, Season, TeamId, UserId, Week};
use serde::{Deserialize, Serialize};
use time::Date;

/// Maximum number of teams a manager may own per league and season.
pub const MAX_TEAMS_PER_USER: usize = 2;

/// Money every team starts with.
pub const INITIAL_MONEY: u32 = 200;

/// Maximum number of current files a team may hold.
pub const MAX_FILES: usize = 11;

/// Per-position slot bounds for a full team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionLimit {
    /// Fewest files a complete team needs in the position.
    pub minimum: usize,
    /// Most files a team may hold in the position.
    pub maximum: usize,
}

/// Returns the slot bounds for a position.
#[must_use]
pub const fn position_limit(position: Position) -> PositionLimit {
    match position {
        Position::Goalkeeper => PositionLimit {
            minimum: 1,
            maximum: 1,
        },
        Position::Defender => PositionLimit {
            minimum: 3,
            maximum: 5,
        },
        Position::Midfielder => PositionLimit {
            minimum: 3,
            maximum: 4,
        },
        Position::Forward => PositionLimit {
            minimum: 1,
            maximum: 3,
        },
    }
}

/// A reason a player cannot be signed by a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningObstacle {
    /// The signing value exceeds the remaining money.
    NotEnoughMoney,
    /// Every file slot is taken.
    NoFileSlot,
    /// Every slot of the player's position is taken.
    NoPositionSlot(Position),
}

impl std::fmt::Display for SigningObstacle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotEnoughMoney => write!(f, "Not enough money remaining"),
            Self::NoFileSlot => write!(f, "No file slot remaining"),
            Self::NoPositionSlot(position) => {
                write!(f, "No {position} slot remaining")
            }
        }
    }
}

/// A player contract held by a fantasy team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamFile {
    /// The contracted player.
    pub player_id: PlayerId,
    /// The position the file occupies.
    pub position: Position,
    /// The signing value charged against the team budget.
    pub value: u32,
    /// The day the file was closed; `None` while current.
    pub date_out: Option<Date>,
}

impl TeamFile {
    /// Creates a new current `TeamFile`.
    #[must_use]
    pub const fn new(player_id: PlayerId, position: Position, value: u32) -> Self {
        Self {
            player_id,
            position,
            value,
            date_out: None,
        }
    }

    /// Checks whether the file is still current.
    #[must_use]
    pub const fn is_current(&self) -> bool {
        self.date_out.is_none()
    }
}

/// A manager's fantasy team within a league and season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// The team identifier.
    pub team_id: TeamId,
    /// The owning manager.
    pub user_id: UserId,
    /// The league the team competes in.
    pub league_id: LeagueId,
    /// The team name.
    pub name: String,
    /// The total money budget.
    pub money: u32,
    /// The season the team plays.
    pub season: Season,
    /// Whether the team has been activated for play.
    pub active: bool,
    /// The week the team was activated, once active.
    pub activation_week: Option<Week>,
    /// The player files signed by the team.
    pub files: Vec<TeamFile>,
}

impl Team {
    /// Creates a new inactive team with the initial money budget.
    #[must_use]
    pub const fn new(
        team_id: TeamId,
        user_id: UserId,
        league_id: LeagueId,
        name: String,
        season: Season,
    ) -> Self {
        Self {
            team_id,
            user_id,
            league_id,
            name,
            money: INITIAL_MONEY,
            season,
            active: false,
            activation_week: None,
            files: Vec::new(),
        }
    }

    /// Returns the team's current files.
    pub fn current_files(&self) -> impl Iterator<Item = &TeamFile> {
        self.files.iter().filter(|file| file.is_current())
    }

    /// Returns the money left after the current files' signing values.
    ///
    /// May go negative if the budget was shrunk after signings.
    #[must_use]
    pub fn remaining_money(&self) -> i64 {
        let spent: i64 = self.current_files().map(|file| i64::from(file.value)).sum();
        i64::from(self.money) - spent
    }

    /// Returns the number of free file slots.
    #[must_use]
    pub fn remaining_files(&self) -> usize {
        MAX_FILES.saturating_sub(self.current_files().count())
    }

    /// Checks whether at least one file slot is free.
    #[must_use]
    pub fn has_remaining_files(&self) -> bool {
        self.remaining_files() > 0
    }

    /// Counts the current files in a position.
    #[must_use]
    pub fn files_in_position(&self, position: Position) -> usize {
        self.current_files()
            .filter(|file| file.position == position)
            .count()
    }

    /// Checks whether a slot is free in the position.
    #[must_use]
    pub fn has_position_slot(&self, position: Position) -> bool {
        self.files_in_position(position) < position_limit(position).maximum
    }

    /// Checks whether the remaining money covers a signing value.
    #[must_use]
    pub fn enough_money(&self, value: u32) -> bool {
        self.remaining_money() >= i64::from(value)
    }

    /// Renders the outfield formation as "defenders-midfielders-forwards".
    #[must_use]
    pub fn formation(&self) -> String {
        format!(
            "{}-{}-{}",
            self.files_in_position(Position::Defender),
            self.files_in_position(Position::Midfielder),
            self.files_in_position(Position::Forward)
        )
    }

    /// Marks the team active as of the given week.
    pub fn activate(&mut self, week: Week) {
        self.active = true;
        self.activation_week = Some(week);
    }

    /// Returns every reason a signing at the given position and value
    /// would be rejected. An empty result means the signing is allowed.
    #[must_use]
    pub fn signing_obstacles(&self, position: Position, value: u32) -> Vec<SigningObstacle> {
        let mut obstacles: Vec<SigningObstacle> = Vec::new();
        if !self.enough_money(value) {
            obstacles.push(SigningObstacle::NotEnoughMoney);
        }
        if !self.has_remaining_files() {
            obstacles.push(SigningObstacle::NoFileSlot);
        }
        if !self.has_position_slot(position) {
            obstacles.push(SigningObstacle::NoPositionSlot(position));
        }
        obstacles
    }
}
