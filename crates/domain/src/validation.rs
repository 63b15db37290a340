// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain rule validation.
//!
//! Save-shaped validators (`validate_new_game`, `validate_goal`,
//! `validate_team`) collect every violation instead of failing fast,
//! so one attempt reports all problems at once. Single-rule checks
//! return a single error.

use crate::error::DomainError;
use crate::events::Goal;
use crate::game::Game;
use crate::roster::{RosterMembership, membership_on_date};
use crate::status::GameStatus;
use crate::team::{MAX_TEAMS_PER_USER, Team};
use crate::types::{Club, Season, Week};
use time::Date;

/// Goal minutes run from kickoff through extra time and stoppage.
const MAX_GOAL_MINUTE: u8 = 130;

/// Validates that a week is within 1 through 99.
///
/// # Errors
///
/// Returns `DomainError::InvalidWeek` otherwise.
pub fn validate_week(week: Week) -> Result<(), DomainError> {
    if week.value() == 0 || week.value() > 99 {
        return Err(DomainError::InvalidWeek { week });
    }
    Ok(())
}

/// Validates that a season is a four-digit year.
///
/// # Errors
///
/// Returns `DomainError::InvalidSeason` otherwise.
pub fn validate_season(season: Season) -> Result<(), DomainError> {
    if !(1000..=9999).contains(&season.year()) {
        return Err(DomainError::InvalidSeason { season });
    }
    Ok(())
}

/// Validates a game about to be created.
///
/// Collected rules:
/// - the home and away club must differ
/// - both clubs must play in the game's league
/// - the week must be within 1 through 99
/// - the season must be a four-digit year
/// - the status must be an initial status (`active` or `inactive`)
///
/// # Arguments
///
/// * `game` - The game to validate
/// * `club_home` - The home club record
/// * `club_away` - The away club record
///
/// # Errors
///
/// Returns every violated rule; `Ok(())` only when none are violated.
pub fn validate_new_game(
    game: &Game,
    club_home: &Club,
    club_away: &Club,
) -> Result<(), Vec<DomainError>> {
    let mut errors: Vec<DomainError> = Vec::new();

    if game.club_home == game.club_away {
        errors.push(DomainError::ClubsEqual {
            club: game.club_home,
        });
    }

    if !club_home.plays_in(game.league_id) {
        errors.push(DomainError::ClubNotInLeague {
            club: club_home.club_id,
            league: game.league_id,
            home: true,
        });
    }
    if !club_away.plays_in(game.league_id) {
        errors.push(DomainError::ClubNotInLeague {
            club: club_away.club_id,
            league: game.league_id,
            home: false,
        });
    }

    if let Err(error) = validate_week(game.week) {
        errors.push(error);
    }
    if let Err(error) = validate_season(game.season) {
        errors.push(error);
    }

    if !game.status.is_initial() {
        errors.push(DomainError::InvalidInitialStatus {
            status: game.status,
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validates a status change against the transition table.
///
/// # Errors
///
/// Returns `DomainError::InvalidStatusTransition` if the target is not
/// in the current status's outgoing set.
pub fn validate_status_change(from: GameStatus, to: GameStatus) -> Result<(), DomainError> {
    if !from.can_transition_to(to) {
        return Err(DomainError::InvalidStatusTransition { from, to });
    }
    Ok(())
}

/// Validates a goal about to be recorded for a game.
///
/// Membership is judged on the `as_of` date, the end of the game's
/// week as resolved by the league's [`crate::calendar::WeekCalendar`].
///
/// Collected rules:
/// - the minute must be within 0 through 130
/// - the scorer must be on one of the game's rosters
/// - the assistant, when present, must differ from the scorer, be on
///   one of the game's rosters, and share the scorer's club
///
/// # Errors
///
/// Returns every violated rule; `Ok(())` only when none are violated.
pub fn validate_goal(
    goal: &Goal,
    game: &Game,
    as_of: Date,
    memberships: &[RosterMembership],
) -> Result<(), Vec<DomainError>> {
    let mut errors: Vec<DomainError> = Vec::new();

    if goal.minute.value() > MAX_GOAL_MINUTE {
        errors.push(DomainError::InvalidMinute {
            minute: goal.minute.value(),
        });
    }

    let scorer_club = membership_on_date(memberships, goal.scorer, as_of)
        .map(|membership| membership.club_id)
        .filter(|club| game.involves(*club));
    if scorer_club.is_none() {
        errors.push(DomainError::ScorerNotInGame {
            scorer: goal.scorer,
        });
    }

    if let Some(assistant) = goal.assistant {
        if assistant == goal.scorer {
            errors.push(DomainError::AssistantSameAsScorer { player: assistant });
        }

        let assistant_club = membership_on_date(memberships, assistant, as_of)
            .map(|membership| membership.club_id)
            .filter(|club| game.involves(*club));
        match assistant_club {
            None => {
                errors.push(DomainError::AssistantNotInGame { assistant });
            }
            Some(club) => {
                // Only comparable when both memberships resolved.
                if scorer_club.is_some_and(|scorer_club| scorer_club != club) {
                    errors.push(DomainError::AssistantNotInScorerClub {
                        scorer: goal.scorer,
                        assistant,
                    });
                }
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validates a team about to be created.
///
/// Collected rules:
/// - the name must be 3 through 25 characters
/// - the season must be a four-digit year
/// - the activation week, when present, must be within 1 through 99
/// - the manager must own fewer than [`MAX_TEAMS_PER_USER`] teams in
///   the league and season (`other_teams_of_user` is that count,
///   excluding the team being validated)
///
/// # Errors
///
/// Returns every violated rule; `Ok(())` only when none are violated.
pub fn validate_team(team: &Team, other_teams_of_user: usize) -> Result<(), Vec<DomainError>> {
    let mut errors: Vec<DomainError> = Vec::new();

    let name_len: usize = team.name.chars().count();
    if !(3..=25).contains(&name_len) {
        errors.push(DomainError::InvalidTeamName {
            name: team.name.clone(),
        });
    }

    if let Err(error) = validate_season(team.season) {
        errors.push(error);
    }

    if let Some(week) = team.activation_week
        && (week.value() == 0 || week.value() > 99)
    {
        errors.push(DomainError::InvalidActivationWeek { week });
    }

    if other_teams_of_user >= MAX_TEAMS_PER_USER {
        errors.push(DomainError::TooManyTeams {
            maximum: MAX_TEAMS_PER_USER,
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
