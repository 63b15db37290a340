// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fully materialized view of a game a transition operates on.
//!
//! A transition must see a consistent snapshot of the game's lineups,
//! goals, cards, substitutions and the roster data of both clubs.
//! [`GameSnapshot`] assembles one, rejects events of other games, and
//! sorts the minute-stamped collections once so every downstream query
//! sees the same stable order.

use crate::error::CoreError;
use crate::ledger::EventLedger;
use liga_domain::{
    Card, ClubId, Game, GameEvent, Goal, Lineup, PlayerId, Position, RosterMembership,
    Substitution, player_ids_in_position_on_date, player_ids_on_date,
};

/// A consistent, read-only view of one game and everything scoring
/// needs to know about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    game: Game,
    lineups: Vec<Lineup>,
    goals: Vec<Goal>,
    cards: Vec<Card>,
    substitutions: Vec<Substitution>,
    memberships: Vec<RosterMembership>,
}

impl GameSnapshot {
    /// Assembles a snapshot for a game.
    ///
    /// Goals, cards and substitutions are sorted by minute ascending;
    /// ties keep their given order, which is taken as creation order.
    /// Lineups keep their given order as-is.
    ///
    /// # Arguments
    ///
    /// * `game` - The game the snapshot is for
    /// * `lineups` - The game's starting lineup entries
    /// * `goals` - The game's goals
    /// * `cards` - The game's cards
    /// * `substitutions` - The game's substitutions
    /// * `memberships` - Roster memberships of both clubs' players
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ForeignEvent` if any lineup or event belongs
    /// to a different game.
    pub fn new(
        game: Game,
        lineups: Vec<Lineup>,
        mut goals: Vec<Goal>,
        mut cards: Vec<Card>,
        mut substitutions: Vec<Substitution>,
        memberships: Vec<RosterMembership>,
    ) -> Result<Self, CoreError> {
        for lineup in &lineups {
            if lineup.game_id != game.game_id {
                return Err(CoreError::ForeignEvent {
                    game: game.game_id,
                    event_game: lineup.game_id,
                });
            }
        }
        check_events(&game, &goals)?;
        check_events(&game, &cards)?;
        check_events(&game, &substitutions)?;

        // Stable sorts; insertion order breaks minute ties.
        goals.sort_by_key(|goal| goal.minute);
        cards.sort_by_key(|card| card.minute);
        substitutions.sort_by_key(|substitution| substitution.minute);

        Ok(Self {
            game,
            lineups,
            goals,
            cards,
            substitutions,
            memberships,
        })
    }

    /// Returns the game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the starting lineup entries.
    #[must_use]
    pub fn lineups(&self) -> &[Lineup] {
        &self.lineups
    }

    /// Returns the goals, minute ascending.
    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Returns the cards, minute ascending.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the substitutions, minute ascending.
    #[must_use]
    pub fn substitutions(&self) -> &[Substitution] {
        &self.substitutions
    }

    /// Returns the roster memberships the snapshot was built with.
    #[must_use]
    pub fn memberships(&self) -> &[RosterMembership] {
        &self.memberships
    }

    /// Returns the minute-ordered event ledger over this snapshot.
    #[must_use]
    pub fn ledger(&self) -> EventLedger<'_> {
        EventLedger::new(&self.goals, &self.cards, &self.substitutions)
    }

    /// Returns the club's roster as it stood on the game date.
    #[must_use]
    pub fn roster_of(&self, club_id: ClubId) -> Vec<PlayerId> {
        player_ids_on_date(&self.memberships, club_id, self.game.date)
    }

    /// Returns the club's roster in a position as it stood on the game
    /// date.
    #[must_use]
    pub fn roster_of_in_position(&self, club_id: ClubId, position: Position) -> Vec<PlayerId> {
        player_ids_in_position_on_date(&self.memberships, club_id, position, self.game.date)
    }

    /// Returns the first starting lineup entry naming any of the given
    /// players, in lineup order.
    #[must_use]
    pub fn first_lineup_among(&self, player_ids: &[PlayerId]) -> Option<&Lineup> {
        self.lineups
            .iter()
            .find(|lineup| player_ids.contains(&lineup.player_id))
    }
}

/// Rejects events that belong to a different game.
fn check_events<E: GameEvent>(game: &Game, events: &[E]) -> Result<(), CoreError> {
    for event in events {
        if event.game_id() != game.game_id {
            return Err(CoreError::ForeignEvent {
                game: game.game_id,
                event_game: event.game_id(),
            });
        }
    }
    Ok(())
}
