// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    INITIAL_MONEY, LeagueId, MAX_FILES, PlayerId, Position, Season, SigningObstacle, Team,
    TeamFile, TeamId, UserId, Week, position_limit,
};
use time::{Date, Month};

fn test_team() -> Team {
    Team::new(
        TeamId::new(1),
        UserId::new(1),
        LeagueId::new(10),
        String::from("Rayo Vallekano"),
        Season::new(2026),
    )
}

fn file(player: i64, position: Position, value: u32) -> TeamFile {
    TeamFile::new(PlayerId::new(player), position, value)
}

#[test]
fn test_new_team_starts_inactive_with_initial_money() {
    let team = test_team();

    assert!(!team.active);
    assert_eq!(team.money, INITIAL_MONEY);
    assert_eq!(team.remaining_money(), i64::from(INITIAL_MONEY));
    assert_eq!(team.remaining_files(), MAX_FILES);
}

#[test]
fn test_remaining_money_counts_only_current_files() {
    let mut team = test_team();
    team.files.push(file(1, Position::Forward, 50));
    team.files.push(file(2, Position::Forward, 30));
    // A closed file neither occupies a slot nor charges the budget.
    team.files.push(TeamFile {
        player_id: PlayerId::new(3),
        position: Position::Forward,
        value: 40,
        date_out: Some(Date::from_calendar_date(2026, Month::January, 31).unwrap()),
    });

    assert_eq!(team.remaining_money(), 120);
    assert_eq!(team.remaining_files(), MAX_FILES - 2);
}

#[test]
fn test_position_limits_match_league_rules() {
    assert_eq!(position_limit(Position::Goalkeeper).maximum, 1);
    assert_eq!(position_limit(Position::Defender).minimum, 3);
    assert_eq!(position_limit(Position::Defender).maximum, 5);
    assert_eq!(position_limit(Position::Midfielder).maximum, 4);
    assert_eq!(position_limit(Position::Forward).maximum, 3);
}

#[test]
fn test_formation_counts_outfield_positions() {
    let mut team = test_team();
    team.files.push(file(1, Position::Goalkeeper, 10));
    for player in 2..=5 {
        team.files.push(file(player, Position::Defender, 10));
    }
    for player in 6..=9 {
        team.files.push(file(player, Position::Midfielder, 10));
    }
    for player in 10..=11 {
        team.files.push(file(player, Position::Forward, 10));
    }

    assert_eq!(team.formation(), "4-4-2");
}

#[test]
fn test_position_slot_exhaustion() {
    let mut team = test_team();
    team.files.push(file(1, Position::Goalkeeper, 10));

    assert!(!team.has_position_slot(Position::Goalkeeper));
    assert!(team.has_position_slot(Position::Defender));
}

#[test]
fn test_signing_obstacles_for_allowed_signing() {
    let team = test_team();
    let obstacles = team.signing_obstacles(Position::Forward, 50);
    assert!(obstacles.is_empty());
}

#[test]
fn test_signing_obstacle_not_enough_money() {
    let mut team = test_team();
    team.files.push(file(1, Position::Forward, 180));

    let obstacles = team.signing_obstacles(Position::Forward, 30);
    assert_eq!(obstacles, vec![SigningObstacle::NotEnoughMoney]);
}

#[test]
fn test_signing_obstacles_accumulate() {
    let mut team = test_team();
    // Fill all eleven slots, exhausting forwards and the budget.
    team.files.push(file(1, Position::Goalkeeper, 20));
    for player in 2..=6 {
        team.files.push(file(player, Position::Defender, 20));
    }
    for player in 7..=8 {
        team.files.push(file(player, Position::Midfielder, 20));
    }
    for player in 9..=11 {
        team.files.push(file(player, Position::Forward, 20));
    }

    let obstacles = team.signing_obstacles(Position::Forward, 10);

    assert!(obstacles.contains(&SigningObstacle::NotEnoughMoney));
    assert!(obstacles.contains(&SigningObstacle::NoFileSlot));
    assert!(obstacles.contains(&SigningObstacle::NoPositionSlot(Position::Forward)));
}

#[test]
fn test_activate_records_week() {
    let mut team = test_team();
    team.activate(Week::new(12));

    assert!(team.active);
    assert_eq!(team.activation_week, Some(Week::new(12)));
}
