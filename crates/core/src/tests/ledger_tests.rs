// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the minute-ordered event ledger queries.

use crate::{CoreError, GameSnapshot};
use liga_domain::{CardKind, GameId, GameStatus, Minute, PlayerId, Position};

use super::helpers::{
    CLUB_A, card, goal, membership, snapshot_with, standard_lineups, standard_memberships,
    substitution, test_game,
};

#[test]
fn test_goals_are_sorted_by_minute() {
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![goal(1, 5, 80), goal(2, 5, 10), goal(3, 15, 45)],
        vec![],
        vec![],
    );

    let minutes: Vec<u8> = snapshot
        .goals()
        .iter()
        .map(|g| g.minute.value())
        .collect();
    assert_eq!(minutes, vec![10, 45, 80]);
}

#[test]
fn test_minute_ties_keep_insertion_order() {
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![goal(7, 5, 45), goal(8, 15, 45), goal(9, 5, 45)],
        vec![],
        vec![],
    );

    let ids: Vec<i64> = snapshot.goals().iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![7, 8, 9]);
}

#[test]
fn test_goals_by_scorers_filters_on_scorer() {
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![goal(1, 5, 10), goal(2, 15, 20), goal(3, 5, 30)],
        vec![],
        vec![],
    );
    let ledger = snapshot.ledger();

    let scorers = [PlayerId::new(5)];
    let found = ledger.goals_by_scorers(&scorers);
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|g| g.scorer == PlayerId::new(5)));
    assert_eq!(ledger.count_goals_by_scorers(&scorers), 2);
}

#[test]
fn test_cards_of_kind_filters_kind_and_player() {
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![],
        vec![
            card(1, 2, 15, CardKind::Yellow),
            card(2, 2, 60, CardKind::Red),
            card(3, 12, 70, CardKind::Red),
        ],
        vec![],
    );
    let ledger = snapshot.ledger();

    let reds = ledger.cards_of_kind(CardKind::Red, PlayerId::new(2));
    assert_eq!(reds.len(), 1);
    assert_eq!(reds[0].minute, Minute::new(60));

    let yellows = ledger.cards_of_kind(CardKind::Yellow, PlayerId::new(2));
    assert_eq!(yellows.len(), 1);
}

#[test]
fn test_has_card_before_is_strict() {
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![],
        vec![card(1, 1, 30, CardKind::Red)],
        vec![],
    );
    let ledger = snapshot.ledger();

    assert!(ledger.has_card_before(CardKind::Red, PlayerId::new(1), Minute::new(31)));
    // An event at exactly the queried minute does not qualify.
    assert!(!ledger.has_card_before(CardKind::Red, PlayerId::new(1), Minute::new(30)));
    assert!(!ledger.has_card_before(CardKind::Red, PlayerId::new(1), Minute::new(29)));
}

#[test]
fn test_substitutions_bringing_on_matches_incoming_side() {
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![],
        vec![],
        vec![substitution(1, 5, 6, 60), substitution(2, 6, 7, 80)],
    );
    let ledger = snapshot.ledger();

    // Player 6 enters in the first substitution; leaving in the second
    // does not match.
    let found = ledger.substitutions_bringing_on(&[PlayerId::new(6)]);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 1);
}

#[test]
fn test_last_substitution_bringing_on_before_takes_the_latest() {
    let snapshot = snapshot_with(
        test_game(GameStatus::Active),
        vec![],
        vec![],
        vec![substitution(1, 5, 6, 30), substitution(2, 6, 7, 60)],
    );
    let ledger = snapshot.ledger();
    let players = [PlayerId::new(6), PlayerId::new(7)];

    let last = ledger.last_substitution_bringing_on_before(&players, Minute::new(90));
    assert_eq!(last.map(|s| s.id), Some(2));

    let mid = ledger.last_substitution_bringing_on_before(&players, Minute::new(45));
    assert_eq!(mid.map(|s| s.id), Some(1));

    // Strictly before: a substitution at the queried minute is ignored.
    let at_thirty = ledger.last_substitution_bringing_on_before(&players, Minute::new(30));
    assert!(at_thirty.is_none());
}

#[test]
fn test_snapshot_rejects_events_of_another_game() {
    let mut foreign = goal(1, 5, 10);
    foreign.game_id = GameId::new(99);

    let result = GameSnapshot::new(
        test_game(GameStatus::Active),
        standard_lineups(),
        vec![foreign],
        vec![],
        vec![],
        standard_memberships(),
    );

    assert!(matches!(
        result,
        Err(CoreError::ForeignEvent {
            event_game, ..
        }) if event_game == GameId::new(99)
    ));
}

#[test]
fn test_snapshot_rejects_lineups_of_another_game() {
    let mut lineups = standard_lineups();
    lineups[0].game_id = GameId::new(99);

    let result = GameSnapshot::new(
        test_game(GameStatus::Active),
        lineups,
        vec![],
        vec![],
        vec![],
        standard_memberships(),
    );

    assert!(matches!(result, Err(CoreError::ForeignEvent { .. })));
}

#[test]
fn test_snapshot_roster_queries_use_the_game_date() {
    // Player 6 joined club A after the game date; the snapshot roster
    // must not include them.
    let mut memberships = standard_memberships();
    let mut late = membership(6, CLUB_A, Position::Forward);
    late.date_in = time::Date::from_calendar_date(2026, time::Month::June, 1).unwrap();
    memberships.push(late);

    let snapshot = GameSnapshot::new(
        test_game(GameStatus::Active),
        standard_lineups(),
        vec![],
        vec![],
        vec![],
        memberships,
    )
    .unwrap();

    let roster = snapshot.roster_of(CLUB_A);
    assert!(!roster.contains(&PlayerId::new(6)));
    assert_eq!(roster.len(), 5);
}
