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

mod error;
mod ledger;
mod participation;
mod scoring;
mod snapshot;
mod transition;

#[cfg(test)]
mod tests;

use liga_domain::{Game, GameStatus, Season, Week};

// Re-export public types and functions
pub use error::CoreError;
pub use ledger::EventLedger;
pub use participation::{
    goalkeeper_against, goalkeeper_on_minute, players_who_played, players_who_played_of_club,
    players_who_played_of_club_in_position,
};
pub use scoring::{
    StatAction, StatUpdate, away_goals, home_goals, scoring_updates, winner_club,
};
pub use snapshot::GameSnapshot;
pub use transition::{StatStore, TransitionResult, commit, transition};

/// Returns the games of a week that still stand in the way of closing
/// it: those that are `active` or `evaluated`.
///
/// Games that are `inactive`, `revised` or already `closed` do not
/// block closure.
#[must_use]
pub fn unclosed_games<'a>(games: &'a [Game], week: Week, season: Season) -> Vec<&'a Game> {
    games
        .iter()
        .filter(|game| {
            game.week == week
                && game.season == season
                && matches!(game.status, GameStatus::Active | GameStatus::Evaluated)
        })
        .collect()
}

/// Checks whether a week can be closed: no game of the week is still
/// `active` or `evaluated`.
#[must_use]
pub fn week_closeable(games: &[Game], week: Week, season: Season) -> bool {
    unclosed_games(games, week, season).is_empty()
}
