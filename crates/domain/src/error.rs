// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::GameStatus;
use crate::stats::StatTag;
use crate::types::{ClubId, GameId, LeagueId, PlayerId, Season, Week};

/// Errors that can occur during domain validation.
///
/// Validators collect these rather than failing fast, so a single save
/// attempt can report every violation at once. Each variant names the
/// field it attaches to via [`DomainError::field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Home and away club are the same.
    ClubsEqual {
        /// The club scheduled on both sides.
        club: ClubId,
    },
    /// A club does not play in the game's league.
    ClubNotInLeague {
        /// The offending club.
        club: ClubId,
        /// The game's league.
        league: LeagueId,
        /// Whether the club was scheduled home or away.
        home: bool,
    },
    /// A new game's status is not an initial status.
    InvalidInitialStatus {
        /// The rejected status.
        status: GameStatus,
    },
    /// A status change not present in the transition table.
    InvalidStatusTransition {
        /// The status the game currently holds.
        from: GameStatus,
        /// The rejected target status.
        to: GameStatus,
    },
    /// A goal's scorer was on neither club's roster for the game.
    ScorerNotInGame {
        /// The scorer.
        scorer: PlayerId,
    },
    /// A goal's assistant was on neither club's roster for the game.
    AssistantNotInGame {
        /// The assistant.
        assistant: PlayerId,
    },
    /// A goal's assistant is the scorer.
    AssistantSameAsScorer {
        /// The player named on both roles.
        player: PlayerId,
    },
    /// A goal's assistant was not on the scorer's club.
    AssistantNotInScorerClub {
        /// The scorer.
        scorer: PlayerId,
        /// The assistant.
        assistant: PlayerId,
    },
    /// Week outside 1 through 99.
    InvalidWeek {
        /// The rejected week.
        week: Week,
    },
    /// Season is not a four-digit year.
    InvalidSeason {
        /// The rejected season.
        season: Season,
    },
    /// Goal minute outside 0 through 130.
    InvalidMinute {
        /// The rejected minute value.
        minute: u8,
    },
    /// Team name outside 3 through 25 characters.
    InvalidTeamName {
        /// The rejected name.
        name: String,
    },
    /// Activation week outside 1 through 99.
    InvalidActivationWeek {
        /// The rejected week.
        week: Week,
    },
    /// A manager already owns the maximum number of teams.
    TooManyTeams {
        /// The maximum allowed per league and season.
        maximum: usize,
    },
    /// No stat entry matches a removal request.
    StatEntryNotFound {
        /// The game the removal targeted.
        game: GameId,
        /// The player the removal targeted.
        player: PlayerId,
        /// The tag the removal targeted.
        tag: StatTag,
    },
    /// A season the calendar does not cover.
    UnknownSeason {
        /// The requested season.
        season: Season,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse a game status from a string.
    InvalidStatus(String),
    /// Failed to parse a position from a string.
    InvalidPosition(String),
    /// Failed to parse a goal kind from a string.
    InvalidGoalKind(String),
    /// Failed to parse a card kind from a string.
    InvalidCardKind(String),
    /// Failed to parse a stat tag from a string.
    InvalidStatTag(String),
}

impl DomainError {
    /// Returns the name of the field the error attaches to, for
    /// presentation layers that group violations per attribute.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::ClubsEqual { .. } => "club_home",
            Self::ClubNotInLeague { home, .. } => {
                if *home { "club_home" } else { "club_away" }
            }
            Self::InvalidInitialStatus { .. }
            | Self::InvalidStatusTransition { .. }
            | Self::InvalidStatus(_) => "status",
            Self::ScorerNotInGame { .. } => "scorer",
            Self::AssistantNotInGame { .. }
            | Self::AssistantSameAsScorer { .. }
            | Self::AssistantNotInScorerClub { .. } => "assistant",
            Self::InvalidWeek { .. } => "week",
            Self::InvalidSeason { .. } | Self::UnknownSeason { .. } => "season",
            Self::InvalidMinute { .. } => "minute",
            Self::InvalidTeamName { .. } => "name",
            Self::InvalidActivationWeek { .. } => "activation_week",
            Self::TooManyTeams { .. } => "user",
            Self::StatEntryNotFound { .. } => "stats",
            Self::DateArithmeticOverflow { .. } => "date",
            Self::InvalidPosition(_) => "position",
            Self::InvalidGoalKind(_) | Self::InvalidCardKind(_) => "kind",
            Self::InvalidStatTag(_) => "tag",
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClubsEqual { club } => {
                write!(f, "Club {club} cannot play against itself")
            }
            Self::ClubNotInLeague { club, league, home } => {
                let side = if *home { "home" } else { "away" };
                write!(f, "The {side} club {club} does not play in league {league}")
            }
            Self::InvalidInitialStatus { status } => {
                write!(
                    f,
                    "A new game must be created active or inactive, got '{status}'"
                )
            }
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Status cannot change from '{from}' to '{to}'")
            }
            Self::ScorerNotInGame { scorer } => {
                write!(f, "Scorer {scorer} was on neither roster for this game")
            }
            Self::AssistantNotInGame { assistant } => {
                write!(
                    f,
                    "Assistant {assistant} was on neither roster for this game"
                )
            }
            Self::AssistantSameAsScorer { player } => {
                write!(f, "Player {player} cannot assist their own goal")
            }
            Self::AssistantNotInScorerClub { scorer, assistant } => {
                write!(
                    f,
                    "Assistant {assistant} was not on the same club as scorer {scorer}"
                )
            }
            Self::InvalidWeek { week } => {
                write!(f, "Week must be between 1 and 99, got {week}")
            }
            Self::InvalidSeason { season } => {
                write!(f, "Season must be a four-digit year, got {season}")
            }
            Self::InvalidMinute { minute } => {
                write!(f, "Minute must be between 0 and 130, got {minute}")
            }
            Self::InvalidTeamName { name } => {
                write!(
                    f,
                    "Team name must be between 3 and 25 characters, got '{name}'"
                )
            }
            Self::InvalidActivationWeek { week } => {
                write!(f, "Activation week must be between 1 and 99, got {week}")
            }
            Self::TooManyTeams { maximum } => {
                write!(
                    f,
                    "A manager may own at most {maximum} teams per league and season"
                )
            }
            Self::StatEntryNotFound { game, player, tag } => {
                write!(
                    f,
                    "No '{tag}' stat entry found for player {player} in game {game}"
                )
            }
            Self::UnknownSeason { season } => {
                write!(f, "Season {season} is not covered by this calendar")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidStatus(msg) => write!(f, "Invalid game status: {msg}"),
            Self::InvalidPosition(msg) => write!(f, "Invalid position: {msg}"),
            Self::InvalidGoalKind(msg) => write!(f, "Invalid goal kind: {msg}"),
            Self::InvalidCardKind(msg) => write!(f, "Invalid card kind: {msg}"),
            Self::InvalidStatTag(msg) => write!(f, "Invalid stat tag: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
