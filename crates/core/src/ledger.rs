// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Minute-ordered queries over a game's event collections.
//!
//! The ledger borrows the snapshot's pre-sorted slices, so every query
//! walks events in minute order with creation order breaking ties.
//! "Before minute M" is strict: an event at exactly minute M does not
//! qualify.

use liga_domain::{Card, CardKind, Goal, Minute, PlayerId, Substitution};

/// Read-only queries over one game's goals, cards and substitutions.
#[derive(Debug, Clone, Copy)]
pub struct EventLedger<'a> {
    goals: &'a [Goal],
    cards: &'a [Card],
    substitutions: &'a [Substitution],
}

impl<'a> EventLedger<'a> {
    /// Creates a ledger over minute-sorted event slices.
    #[must_use]
    pub const fn new(
        goals: &'a [Goal],
        cards: &'a [Card],
        substitutions: &'a [Substitution],
    ) -> Self {
        Self {
            goals,
            cards,
            substitutions,
        }
    }

    /// Returns the goals scored by any of the given players.
    #[must_use]
    pub fn goals_by_scorers(&self, scorers: &[PlayerId]) -> Vec<&'a Goal> {
        self.goals
            .iter()
            .filter(|goal| scorers.contains(&goal.scorer))
            .collect()
    }

    /// Counts the goals scored by any of the given players.
    #[must_use]
    pub fn count_goals_by_scorers(&self, scorers: &[PlayerId]) -> usize {
        self.goals
            .iter()
            .filter(|goal| scorers.contains(&goal.scorer))
            .count()
    }

    /// Returns the player's cards of a kind, minute ascending.
    #[must_use]
    pub fn cards_of_kind(&self, kind: CardKind, player_id: PlayerId) -> Vec<&'a Card> {
        self.cards
            .iter()
            .filter(|card| card.kind == kind && card.player_id == player_id)
            .collect()
    }

    /// Checks whether the player was shown a card of the kind strictly
    /// before the minute.
    #[must_use]
    pub fn has_card_before(&self, kind: CardKind, player_id: PlayerId, minute: Minute) -> bool {
        self.cards.iter().any(|card| {
            card.kind == kind && card.player_id == player_id && card.minute < minute
        })
    }

    /// Returns the substitutions that brought on any of the given
    /// players, minute ascending.
    #[must_use]
    pub fn substitutions_bringing_on(&self, players: &[PlayerId]) -> Vec<&'a Substitution> {
        self.substitutions
            .iter()
            .filter(|substitution| players.contains(&substitution.player_in))
            .collect()
    }

    /// Returns the most recent substitution strictly before the minute
    /// that brought on any of the given players.
    #[must_use]
    pub fn last_substitution_bringing_on_before(
        &self,
        players: &[PlayerId],
        minute: Minute,
    ) -> Option<&'a Substitution> {
        self.substitutions
            .iter()
            .filter(|substitution| {
                substitution.minute < minute && players.contains(&substitution.player_in)
            })
            .next_back()
    }
}
