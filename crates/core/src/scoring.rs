// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fantasy-point computation for an evaluated game.
//!
//! Scoring is a pure function of the snapshot: it produces the list of
//! stat updates a transition must apply, it never writes anything
//! itself. Reversal runs the identical computation with the opposite
//! ledger action, so for unchanged event data a reverse exactly
//! cancels a prior apply.

use crate::error::CoreError;
use crate::participation::{players_who_played_of_club, players_who_played_of_club_in_position};
use crate::snapshot::GameSnapshot;
use liga_domain::{ClubId, PlayerId, Position, StatTag};

/// Whether a stat update awards an entry or withdraws one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatAction {
    /// Append a ledger entry with the tag's points.
    Award,
    /// Delete the matching ledger entry.
    Revoke,
}

/// One pending change to a player's stat ledger for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatUpdate {
    /// The player the update targets.
    pub player_id: PlayerId,
    /// The award category.
    pub tag: StatTag,
    /// Award or revoke.
    pub action: StatAction,
}

/// Counts the goals credited to the home club: goals whose scorer was
/// on the home roster at the game date. Own goals stay with the
/// scorer's nominal club.
#[must_use]
pub fn home_goals(snapshot: &GameSnapshot) -> usize {
    let roster: Vec<PlayerId> = snapshot.roster_of(snapshot.game().club_home);
    snapshot.ledger().count_goals_by_scorers(&roster)
}

/// Counts the goals credited to the away club.
#[must_use]
pub fn away_goals(snapshot: &GameSnapshot) -> usize {
    let roster: Vec<PlayerId> = snapshot.roster_of(snapshot.game().club_away);
    snapshot.ledger().count_goals_by_scorers(&roster)
}

/// Returns the winning club, or `None` on a draw.
#[must_use]
pub fn winner_club(snapshot: &GameSnapshot) -> Option<ClubId> {
    let home: usize = home_goals(snapshot);
    let away: usize = away_goals(snapshot);
    match home.cmp(&away) {
        std::cmp::Ordering::Greater => Some(snapshot.game().club_home),
        std::cmp::Ordering::Less => Some(snapshot.game().club_away),
        std::cmp::Ordering::Equal => None,
    }
}

/// Computes every stat update an evaluation of the game produces.
///
/// - When the tallies differ, every participant of the winning club
///   gets the winner stat.
/// - Each club is then judged on the goals it conceded, independently
///   of the result: conceding zero awards the unbeaten-goalkeeper stat
///   to its goalkeeper participants and the unbeaten-defender stat to
///   its defender participants; conceding exactly one awards only the
///   beaten-goalkeeper stat; conceding two or more awards nothing.
///
/// With `StatAction::Revoke` the same player sets are recomputed from
/// the current event data and every award becomes a withdrawal.
///
/// # Errors
///
/// Returns an error if participation cannot be resolved; the caller
/// must then abandon the transition.
pub fn scoring_updates(
    snapshot: &GameSnapshot,
    action: StatAction,
) -> Result<Vec<StatUpdate>, CoreError> {
    let home: usize = home_goals(snapshot);
    let away: usize = away_goals(snapshot);
    tracing::debug!(
        game = snapshot.game().game_id.value(),
        home_goals = home,
        away_goals = away,
        "computing scoring updates"
    );

    let mut updates: Vec<StatUpdate> = Vec::new();

    if home != away {
        winner_updates(snapshot, action, &mut updates)?;
    }
    // Defensive stats depend only on the goals conceded by each club.
    defensive_updates(snapshot, snapshot.game().club_home, away, action, &mut updates)?;
    defensive_updates(snapshot, snapshot.game().club_away, home, action, &mut updates)?;

    tracing::debug!(
        game = snapshot.game().game_id.value(),
        updates = updates.len(),
        "scoring updates computed"
    );
    Ok(updates)
}

/// Pushes the winner stat for every participant of the winning club.
fn winner_updates(
    snapshot: &GameSnapshot,
    action: StatAction,
    updates: &mut Vec<StatUpdate>,
) -> Result<(), CoreError> {
    let Some(winner) = winner_club(snapshot) else {
        return Ok(());
    };
    for player_id in players_who_played_of_club(snapshot, winner)? {
        updates.push(StatUpdate {
            player_id,
            tag: StatTag::Winner,
            action,
        });
    }
    Ok(())
}

/// Pushes the defensive stats a club earns from the goals it conceded.
fn defensive_updates(
    snapshot: &GameSnapshot,
    club_id: ClubId,
    conceded: usize,
    action: StatAction,
    updates: &mut Vec<StatUpdate>,
) -> Result<(), CoreError> {
    match conceded {
        0 => {
            for player_id in players_who_played_of_club_in_position(
                snapshot,
                club_id,
                Position::Goalkeeper,
            )? {
                updates.push(StatUpdate {
                    player_id,
                    tag: StatTag::UnbeatenGoalkeeper,
                    action,
                });
            }
            for player_id in
                players_who_played_of_club_in_position(snapshot, club_id, Position::Defender)?
            {
                updates.push(StatUpdate {
                    player_id,
                    tag: StatTag::UnbeatenDefender,
                    action,
                });
            }
        }
        1 => {
            for player_id in players_who_played_of_club_in_position(
                snapshot,
                club_id,
                Position::Goalkeeper,
            )? {
                updates.push(StatUpdate {
                    player_id,
                    tag: StatTag::BeatenGoalkeeper,
                    action,
                });
            }
        }
        // Conceding two or more earns nothing.
        _ => {}
    }
    Ok(())
}
