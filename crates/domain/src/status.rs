// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Game status tracking and transition logic.
//!
//! This module defines the game lifecycle states, the valid transitions
//! between them, and the scoring side effect attached to specific
//! transition pairs. Status changes are operator-initiated only; the
//! system never advances a game based on time alone.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle states of a game.
///
/// A game is created `Active` or `Inactive` and moves through
/// evaluation and revision until it is `Closed`. Closure is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Scheduled and eligible for evaluation.
    Active,
    /// Suspended or postponed; not eligible for evaluation.
    Inactive,
    /// Player stats for this game have been computed and applied.
    Evaluated,
    /// Evaluation reviewed and frozen, pending closure.
    Revised,
    /// Finished and archived. No further transitions.
    Closed,
}

impl GameStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Evaluated => "evaluated",
            Self::Revised => "revised",
            Self::Closed => "closed",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "evaluated" => Ok(Self::Evaluated),
            "revised" => Ok(Self::Revised),
            "closed" => Ok(Self::Closed),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }

    /// Returns true if a newly created game may carry this status.
    #[must_use]
    pub const fn is_initial(&self) -> bool {
        matches!(self, Self::Active | Self::Inactive)
    }

    /// Returns true if this status is terminal (no outgoing transitions).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns the statuses reachable from this one in a single step.
    #[must_use]
    pub const fn accepted_targets(&self) -> &'static [Self] {
        match self {
            Self::Active => &[Self::Evaluated, Self::Inactive],
            Self::Inactive => &[Self::Active],
            Self::Evaluated => &[Self::Revised, Self::Active],
            Self::Revised => &[Self::Closed, Self::Evaluated],
            Self::Closed => &[],
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - `Active` → `Evaluated` | `Inactive`
    /// - `Inactive` → `Active`
    /// - `Evaluated` → `Revised` | `Active`
    /// - `Revised` → `Closed` | `Evaluated`
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Active, Self::Evaluated | Self::Inactive)
                | (Self::Inactive, Self::Active)
                | (Self::Evaluated, Self::Revised | Self::Active)
                | (Self::Revised, Self::Closed | Self::Evaluated)
        )
    }
}

impl FromStr for GameStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The scoring side effect attached to a status transition.
///
/// Effects fire before the new status is persisted; the transition and
/// its effect commit together or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringEffect {
    /// No scoring side effect.
    None,
    /// Compute and award player stats for the game.
    ApplyScoring,
    /// Recompute and withdraw previously awarded player stats.
    ReverseScoring,
}

/// Returns the scoring effect for an exact transition pair.
///
/// Only two pairs carry an effect: entering evaluation applies scoring,
/// and leaving it reverses scoring. Every other pair is effect-free.
#[must_use]
pub const fn scoring_effect(from: GameStatus, to: GameStatus) -> ScoringEffect {
    match (from, to) {
        (GameStatus::Active, GameStatus::Evaluated) => ScoringEffect::ApplyScoring,
        (GameStatus::Evaluated, GameStatus::Active) => ScoringEffect::ReverseScoring,
        _ => ScoringEffect::None,
    }
}
