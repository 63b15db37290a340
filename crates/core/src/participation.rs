// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Who actually took part in a game, and who kept goal when.
//!
//! Participation combines the historical roster at the game date with
//! the starting lineups and the incoming side of substitutions. The
//! goalkeeper resolution additionally applies the latest goalkeeper
//! substitution before the queried minute and nullifies a keeper sent
//! off before it.

use crate::error::CoreError;
use crate::snapshot::GameSnapshot;
use liga_domain::{CardKind, ClubId, Minute, PlayerId, Position};

/// Checks that the club plays in the snapshot's game.
fn ensure_club_in_game(snapshot: &GameSnapshot, club_id: ClubId) -> Result<(), CoreError> {
    if snapshot.game().involves(club_id) {
        Ok(())
    } else {
        Err(CoreError::ClubNotInGame {
            game: snapshot.game().game_id,
            club: club_id,
        })
    }
}

/// Resolves which player kept goal for the club at the given minute.
///
/// Starting from the club's rostered goalkeepers at the game date, the
/// starter is the first lineup entry naming one of them (stable lineup
/// order breaks ties between nominal goalkeepers). The latest
/// substitution strictly before the minute that brought on a rostered
/// goalkeeper replaces the starter. A red card strictly before the
/// minute nullifies the result.
///
/// Returns `None` when no rostered goalkeeper started the game or the
/// resolved keeper was sent off.
///
/// # Errors
///
/// Returns `CoreError::ClubNotInGame` if the club plays in neither
/// side of the game.
pub fn goalkeeper_on_minute(
    snapshot: &GameSnapshot,
    club_id: ClubId,
    minute: Minute,
) -> Result<Option<PlayerId>, CoreError> {
    ensure_club_in_game(snapshot, club_id)?;

    let goalkeeper_ids: Vec<PlayerId> =
        snapshot.roster_of_in_position(club_id, Position::Goalkeeper);
    let Some(starter) = snapshot.first_lineup_among(&goalkeeper_ids) else {
        return Ok(None);
    };

    let ledger = snapshot.ledger();
    let mut keeper: PlayerId = starter.player_id;
    if let Some(substitution) =
        ledger.last_substitution_bringing_on_before(&goalkeeper_ids, minute)
    {
        keeper = substitution.player_in;
    }

    if ledger.has_card_before(CardKind::Red, keeper, minute) {
        return Ok(None);
    }
    Ok(Some(keeper))
}

/// Resolves the goalkeeper facing the given club at the given minute,
/// i.e. the opposing club's goalkeeper.
///
/// # Errors
///
/// Returns `CoreError::ClubNotInGame` if the club plays in neither
/// side of the game.
pub fn goalkeeper_against(
    snapshot: &GameSnapshot,
    club_id: ClubId,
    minute: Minute,
) -> Result<Option<PlayerId>, CoreError> {
    let opponent: ClubId =
        snapshot
            .game()
            .opponent_of(club_id)
            .ok_or(CoreError::ClubNotInGame {
                game: snapshot.game().game_id,
                club: club_id,
            })?;
    goalkeeper_on_minute(snapshot, opponent, minute)
}

/// Returns the players among the given ids that took part in the game:
/// those named in a starting lineup plus those brought on by a
/// substitution. No player appears twice.
#[must_use]
pub fn players_who_played(snapshot: &GameSnapshot, player_ids: &[PlayerId]) -> Vec<PlayerId> {
    let mut players: Vec<PlayerId> = Vec::new();
    for lineup in snapshot.lineups() {
        if player_ids.contains(&lineup.player_id) && !players.contains(&lineup.player_id) {
            players.push(lineup.player_id);
        }
    }
    for substitution in snapshot.ledger().substitutions_bringing_on(player_ids) {
        if !players.contains(&substitution.player_in) {
            players.push(substitution.player_in);
        }
    }
    players
}

/// Returns the club's players that took part in the game, judged by
/// the club's roster at the game date.
///
/// # Errors
///
/// Returns `CoreError::ClubNotInGame` if the club plays in neither
/// side of the game.
pub fn players_who_played_of_club(
    snapshot: &GameSnapshot,
    club_id: ClubId,
) -> Result<Vec<PlayerId>, CoreError> {
    ensure_club_in_game(snapshot, club_id)?;
    let roster: Vec<PlayerId> = snapshot.roster_of(club_id);
    Ok(players_who_played(snapshot, &roster))
}

/// Returns the club's players in a position that took part in the
/// game, judged by the club's roster at the game date.
///
/// # Errors
///
/// Returns `CoreError::ClubNotInGame` if the club plays in neither
/// side of the game.
pub fn players_who_played_of_club_in_position(
    snapshot: &GameSnapshot,
    club_id: ClubId,
    position: Position,
) -> Result<Vec<PlayerId>, CoreError> {
    ensure_club_in_game(snapshot, club_id)?;
    let roster: Vec<PlayerId> = snapshot.roster_of_in_position(club_id, position);
    Ok(players_who_played(snapshot, &roster))
}
