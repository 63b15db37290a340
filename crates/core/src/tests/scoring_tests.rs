// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for goal tallies, winner resolution and the stat update
//! computation.

use crate::{
    GameSnapshot, StatAction, StatUpdate, away_goals, home_goals, scoring_updates, winner_club,
};
use liga_domain::{GameStatus, PlayerId, Position, StatTag};

use super::helpers::{
    CLUB_A, CLUB_B, goal, membership, own_goal, snapshot_with, standard_lineups,
    standard_memberships, substitution, test_game,
};

fn updates_for(snapshot: &GameSnapshot) -> Vec<StatUpdate> {
    scoring_updates(snapshot, StatAction::Award).unwrap()
}

fn tags_of(updates: &[StatUpdate], player: i64) -> Vec<StatTag> {
    updates
        .iter()
        .filter(|update| update.player_id == PlayerId::new(player))
        .map(|update| update.tag)
        .collect()
}

// ============================================================================
// Tally Tests
// ============================================================================

#[test]
fn test_goalless_game_tallies_zero() {
    let snapshot = snapshot_with(test_game(GameStatus::Active), vec![], vec![], vec![]);

    assert_eq!(home_goals(&snapshot), 0);
    assert_eq!(away_goals(&snapshot), 0);
    assert_eq!(winner_club(&snapshot), None);
}

#[test]
fn test_tallies_follow_the_scorer_roster() {
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![goal(1, 5, 10), goal(2, 5, 40), goal(3, 15, 70)],
        vec![],
        vec![],
    );

    assert_eq!(home_goals(&snapshot), 2);
    assert_eq!(away_goals(&snapshot), 1);
    assert_eq!(winner_club(&snapshot), Some(CLUB_A));
}

#[test]
fn test_own_goal_counts_for_the_scorer_nominal_club() {
    // Defender 2 of club A puts it in his own net; the tally still
    // credits club A, matching the scorer/club association.
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![own_goal(1, 2, 20)],
        vec![],
        vec![],
    );

    assert_eq!(home_goals(&snapshot), 1);
    assert_eq!(away_goals(&snapshot), 0);
}

#[test]
fn test_goal_by_an_unrostered_scorer_counts_for_neither_club() {
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![goal(1, 99, 10)],
        vec![],
        vec![],
    );

    assert_eq!(home_goals(&snapshot), 0);
    assert_eq!(away_goals(&snapshot), 0);
}

#[test]
fn test_away_winner() {
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![goal(1, 15, 10)],
        vec![],
        vec![],
    );

    assert_eq!(winner_club(&snapshot), Some(CLUB_B));
}

// ============================================================================
// Winner Stat Tests
// ============================================================================

#[test]
fn test_winner_stat_goes_to_every_participant_of_one_club_only() {
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![goal(1, 5, 10)],
        vec![],
        vec![],
    );

    let updates = updates_for(&snapshot);
    let winners: Vec<PlayerId> = updates
        .iter()
        .filter(|update| update.tag == StatTag::Winner)
        .map(|update| update.player_id)
        .collect();

    assert_eq!(
        winners,
        vec![
            PlayerId::new(1),
            PlayerId::new(2),
            PlayerId::new(3),
            PlayerId::new(4),
            PlayerId::new(5),
        ]
    );
}

#[test]
fn test_draw_awards_no_winner_stat() {
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![goal(1, 5, 10), goal(2, 15, 50)],
        vec![],
        vec![],
    );

    let updates = updates_for(&snapshot);
    assert!(updates.iter().all(|update| update.tag != StatTag::Winner));
}

#[test]
fn test_substituted_in_player_earns_the_winner_stat() {
    // Player 6 enters for club A at minute 60 and the club wins.
    let mut memberships = standard_memberships();
    memberships.push(membership(6, CLUB_A, Position::Forward));
    let snapshot = GameSnapshot::new(
        test_game(GameStatus::Active),
        standard_lineups(),
        vec![goal(1, 5, 10)],
        vec![],
        vec![substitution(1, 5, 6, 60)],
        memberships,
    )
    .unwrap();

    let updates = updates_for(&snapshot);
    assert!(tags_of(&updates, 6).contains(&StatTag::Winner));
}

// ============================================================================
// Defensive Stat Tests
// ============================================================================

#[test]
fn test_clean_sheet_awards_goalkeeper_and_defenders() {
    // 2-0: club A conceded nothing.
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![goal(1, 5, 10), goal(2, 4, 40)],
        vec![],
        vec![],
    );

    let updates = updates_for(&snapshot);

    assert_eq!(
        tags_of(&updates, 1),
        vec![StatTag::Winner, StatTag::UnbeatenGoalkeeper]
    );
    assert_eq!(
        tags_of(&updates, 2),
        vec![StatTag::Winner, StatTag::UnbeatenDefender]
    );
    assert_eq!(
        tags_of(&updates, 3),
        vec![StatTag::Winner, StatTag::UnbeatenDefender]
    );
}

#[test]
fn test_conceding_one_awards_only_the_beaten_goalkeeper() {
    // 2-1: club A conceded exactly one.
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![goal(1, 5, 10), goal(2, 4, 40), goal(3, 15, 70)],
        vec![],
        vec![],
    );

    let updates = updates_for(&snapshot);

    assert_eq!(
        tags_of(&updates, 1),
        vec![StatTag::Winner, StatTag::BeatenGoalkeeper]
    );
    // Defenders get the winner stat but no defensive bonus.
    assert_eq!(tags_of(&updates, 2), vec![StatTag::Winner]);
}

#[test]
fn test_conceding_two_awards_no_defensive_stat() {
    // 3-2: both clubs conceded two or more.
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![
            goal(1, 5, 10),
            goal(2, 5, 30),
            goal(3, 4, 50),
            goal(4, 15, 70),
            goal(5, 14, 80),
        ],
        vec![],
        vec![],
    );

    let updates = updates_for(&snapshot);

    assert!(updates.iter().all(|update| update.tag == StatTag::Winner));
}

#[test]
fn test_defensive_stats_are_independent_of_the_result() {
    // 0-1: club A loses but concedes exactly one; club B keeps a clean
    // sheet and wins.
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![goal(1, 15, 80)],
        vec![],
        vec![],
    );

    let updates = updates_for(&snapshot);

    // Losing goalkeeper still earns the beaten-goalkeeper stat.
    assert_eq!(tags_of(&updates, 1), vec![StatTag::BeatenGoalkeeper]);
    // Winning keeper and defenders earn winner plus unbeaten stats.
    assert_eq!(
        tags_of(&updates, 11),
        vec![StatTag::Winner, StatTag::UnbeatenGoalkeeper]
    );
    assert_eq!(
        tags_of(&updates, 12),
        vec![StatTag::Winner, StatTag::UnbeatenDefender]
    );
}

#[test]
fn test_goalless_draw_awards_both_clean_sheets() {
    let snapshot = snapshot_with(test_game(GameStatus::Active), vec![], vec![], vec![]);

    let updates = updates_for(&snapshot);

    assert_eq!(tags_of(&updates, 1), vec![StatTag::UnbeatenGoalkeeper]);
    assert_eq!(tags_of(&updates, 11), vec![StatTag::UnbeatenGoalkeeper]);
    assert_eq!(tags_of(&updates, 2), vec![StatTag::UnbeatenDefender]);
    assert_eq!(tags_of(&updates, 12), vec![StatTag::UnbeatenDefender]);
    assert!(updates.iter().all(|update| update.tag != StatTag::Winner));
}

// ============================================================================
// Reversal Tests
// ============================================================================

#[test]
fn test_revoke_mirrors_award_exactly() {
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![goal(1, 5, 10), goal(2, 4, 40)],
        vec![],
        vec![],
    );

    let awards = scoring_updates(&snapshot, StatAction::Award).unwrap();
    let revokes = scoring_updates(&snapshot, StatAction::Revoke).unwrap();

    assert_eq!(awards.len(), revokes.len());
    for (award, revoke) in awards.iter().zip(&revokes) {
        assert_eq!(award.player_id, revoke.player_id);
        assert_eq!(award.tag, revoke.tag);
        assert_eq!(award.action, StatAction::Award);
        assert_eq!(revoke.action, StatAction::Revoke);
    }
}
