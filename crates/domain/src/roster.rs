// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster membership records and historical roster queries.
//!
//! A membership is a time-ranged contract of a player with a club,
//! tagged with a position and a market value. Queries resolve the
//! roster as it stood on a given date, never the current one, so that
//! evaluating an old game sees the rosters of that day.

use crate::types::{ClubId, PlayerId, Position};
use serde::{Deserialize, Serialize};
use time::Date;

/// A time-ranged assignment of a player to a club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterMembership {
    /// The player.
    pub player_id: PlayerId,
    /// The club holding the contract.
    pub club_id: ClubId,
    /// The position the player is registered in.
    pub position: Position,
    /// The player's market value while this membership is active.
    pub value: u32,
    /// First day the membership is active.
    pub date_in: Date,
    /// Last day the membership is active; `None` while current.
    pub date_out: Option<Date>,
}

impl RosterMembership {
    /// Creates a new `RosterMembership`.
    #[must_use]
    pub const fn new(
        player_id: PlayerId,
        club_id: ClubId,
        position: Position,
        value: u32,
        date_in: Date,
        date_out: Option<Date>,
    ) -> Self {
        Self {
            player_id,
            club_id,
            position,
            value,
            date_in,
            date_out,
        }
    }

    /// Checks whether the membership was active on the given date.
    ///
    /// Both boundary days count as active.
    #[must_use]
    pub fn active_on(&self, date: Date) -> bool {
        self.date_in <= date && self.date_out.is_none_or(|out| date <= out)
    }
}

/// Returns the ids of players that belonged to the club on the date.
///
/// Results preserve the order of the membership records and contain no
/// duplicates, so downstream lineup matching stays stable.
#[must_use]
pub fn player_ids_on_date(
    memberships: &[RosterMembership],
    club_id: ClubId,
    date: Date,
) -> Vec<PlayerId> {
    let mut ids: Vec<PlayerId> = Vec::new();
    for membership in memberships {
        if membership.club_id == club_id
            && membership.active_on(date)
            && !ids.contains(&membership.player_id)
        {
            ids.push(membership.player_id);
        }
    }
    ids
}

/// Returns the ids of players that belonged to the club on the date in
/// the given position.
#[must_use]
pub fn player_ids_in_position_on_date(
    memberships: &[RosterMembership],
    club_id: ClubId,
    position: Position,
    date: Date,
) -> Vec<PlayerId> {
    let mut ids: Vec<PlayerId> = Vec::new();
    for membership in memberships {
        if membership.club_id == club_id
            && membership.position == position
            && membership.active_on(date)
            && !ids.contains(&membership.player_id)
        {
            ids.push(membership.player_id);
        }
    }
    ids
}

/// Returns the player's membership active on the date, if any.
///
/// When several records overlap the date, the last one wins, matching
/// the most recently registered contract.
#[must_use]
pub fn membership_on_date(
    memberships: &[RosterMembership],
    player_id: PlayerId,
    date: Date,
) -> Option<&RosterMembership> {
    memberships
        .iter()
        .filter(|membership| membership.player_id == player_id && membership.active_on(date))
        .next_back()
}
