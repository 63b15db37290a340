// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status transitions and their atomic commit.
//!
//! [`transition`] is pure: it validates the status change against the
//! transition table, computes the scoring updates the change triggers,
//! and returns both without touching the game or any ledger. Persisting
//! is the caller's move, through [`commit`], which applies the updates
//! and the status together or not at all.

use crate::error::CoreError;
use crate::scoring::{StatAction, StatUpdate, scoring_updates};
use crate::snapshot::GameSnapshot;
use liga_domain::{
    Game, GameId, GameStatus, ScoringEffect, StatLedger, scoring_effect, validate_status_change,
};

/// The result of a validated status transition.
///
/// Transitions are atomic: the status change and its stat updates
/// commit together or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The status the game held when the snapshot was taken.
    pub previous_status: GameStatus,
    /// The status the game moves to.
    pub new_status: GameStatus,
    /// The scoring effect the transition pair carries.
    pub effect: ScoringEffect,
    /// The stat updates the effect produced, in award order.
    pub updates: Vec<StatUpdate>,
}

/// Validates a status change and computes its scoring side effect.
///
/// Only two transition pairs carry an effect: `active` → `evaluated`
/// applies scoring and `evaluated` → `active` reverses it. Every other
/// legal pair yields an empty update list.
///
/// # Arguments
///
/// * `snapshot` - The materialized view of the game
/// * `new_status` - The status the game should move to
///
/// # Returns
///
/// * `Ok(TransitionResult)` describing the transition and its updates
/// * `Err(CoreError)` if the transition is illegal or scoring fails
///
/// # Errors
///
/// Returns an error if:
/// - The status change is not in the transition table
/// - The scoring computation fails; the transition must then be
///   abandoned with nothing persisted
pub fn transition(
    snapshot: &GameSnapshot,
    new_status: GameStatus,
) -> Result<TransitionResult, CoreError> {
    let previous_status: GameStatus = snapshot.game().status;
    validate_status_change(previous_status, new_status)?;

    let effect: ScoringEffect = scoring_effect(previous_status, new_status);
    tracing::debug!(
        game = snapshot.game().game_id.value(),
        from = %previous_status,
        to = %new_status,
        ?effect,
        "transition validated"
    );

    let updates: Vec<StatUpdate> = match effect {
        ScoringEffect::None => Vec::new(),
        ScoringEffect::ApplyScoring => scoring_updates(snapshot, StatAction::Award)?,
        ScoringEffect::ReverseScoring => scoring_updates(snapshot, StatAction::Revoke)?,
    };

    Ok(TransitionResult {
        previous_status,
        new_status,
        effect,
        updates,
    })
}

/// The atomic stat write seam towards persistence.
///
/// An implementation must apply every update of a batch or none of
/// them; a partially applied batch would leave stats that can no
/// longer be reversed from event data.
pub trait StatStore {
    /// Applies a batch of stat updates for one game, all or nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if any update cannot be applied; in that case
    /// the store must be left as it was.
    fn apply_all(&mut self, game_id: GameId, updates: &[StatUpdate]) -> Result<(), CoreError>;
}

impl StatStore for StatLedger {
    fn apply_all(&mut self, game_id: GameId, updates: &[StatUpdate]) -> Result<(), CoreError> {
        // Stage on a copy so a failing revoke leaves the ledger untouched.
        let mut staged: Self = self.clone();
        for update in updates {
            match update.action {
                StatAction::Award => {
                    staged.record(game_id, update.player_id, update.tag);
                }
                StatAction::Revoke => {
                    staged.remove(game_id, update.player_id, update.tag)?;
                }
            }
        }
        *self = staged;
        Ok(())
    }
}

/// Commits a transition result: applies its stat updates through the
/// store, then writes the new status to the game.
///
/// # Arguments
///
/// * `game` - The game to move
/// * `result` - The result produced by [`transition`]
/// * `stats` - The stat store to apply the updates to
///
/// # Errors
///
/// Returns an error if:
/// - The game's status no longer matches the snapshot the result was
///   computed from (`CoreError::StaleTransition`)
/// - The store rejects the update batch; the game keeps its status
pub fn commit<S: StatStore + ?Sized>(
    game: &mut Game,
    result: &TransitionResult,
    stats: &mut S,
) -> Result<(), CoreError> {
    if game.status != result.previous_status {
        return Err(CoreError::StaleTransition {
            expected: result.previous_status,
            found: game.status,
        });
    }

    stats.apply_all(game.game_id, &result.updates)?;
    game.status = result.new_status;

    tracing::debug!(
        game = game.game_id.value(),
        status = %game.status,
        applied = result.updates.len(),
        "transition committed"
    );
    Ok(())
}
