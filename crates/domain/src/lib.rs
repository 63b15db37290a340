// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod error;
mod events;
mod game;
mod roster;
mod stats;
mod status;
mod team;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use calendar::{LeagueCalendar, WeekCalendar};
pub use error::DomainError;
pub use events::{Card, CardKind, GameEvent, Goal, GoalKind, Lineup, Substitution};
pub use game::{Game, Side};
pub use roster::{
    RosterMembership, membership_on_date, player_ids_in_position_on_date, player_ids_on_date,
};
pub use stats::{StatEntry, StatLedger, StatTag};
pub use status::{GameStatus, ScoringEffect, scoring_effect};
pub use team::{
    INITIAL_MONEY, MAX_FILES, MAX_TEAMS_PER_USER, PositionLimit, SigningObstacle, Team, TeamFile,
    position_limit,
};
pub use types::{
    Club, ClubId, GameId, LeagueId, Minute, PlayerId, Position, Season, TeamId, UserId, Week,
};
pub use validation::{
    validate_goal, validate_new_game, validate_season, validate_status_change, validate_team,
    validate_week,
};
