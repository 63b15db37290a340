// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::GameSnapshot;
use liga_domain::{
    Card, CardKind, ClubId, Game, GameId, GameStatus, Goal, GoalKind, LeagueId, Lineup, Minute,
    PlayerId, Position, RosterMembership, Season, Substitution, Week,
};
use time::{Date, Month};

pub const LEAGUE: LeagueId = LeagueId::new(10);
pub const CLUB_A: ClubId = ClubId::new(100);
pub const CLUB_B: ClubId = ClubId::new(200);
pub const GAME: GameId = GameId::new(1);

pub fn game_date() -> Date {
    Date::from_calendar_date(2026, Month::March, 7).unwrap()
}

pub fn test_game(status: GameStatus) -> Game {
    Game::new(
        GAME,
        LEAGUE,
        CLUB_A,
        CLUB_B,
        Season::new(2026),
        Week::new(7),
        game_date(),
        status,
    )
}

pub fn membership(player: i64, club: ClubId, position: Position) -> RosterMembership {
    RosterMembership::new(
        PlayerId::new(player),
        club,
        position,
        10,
        Date::from_calendar_date(2025, Month::July, 1).unwrap(),
        None,
    )
}

pub fn lineup(id: i64, player: i64) -> Lineup {
    Lineup::new(id, GAME, PlayerId::new(player))
}

pub fn goal(id: i64, scorer: i64, minute: u8) -> Goal {
    Goal::new(
        id,
        GAME,
        PlayerId::new(scorer),
        None,
        Minute::new(minute),
        GoalKind::Regular,
    )
}

pub fn own_goal(id: i64, scorer: i64, minute: u8) -> Goal {
    Goal::new(
        id,
        GAME,
        PlayerId::new(scorer),
        None,
        Minute::new(minute),
        GoalKind::Own,
    )
}

pub fn substitution(id: i64, player_out: i64, player_in: i64, minute: u8) -> Substitution {
    Substitution::new(
        id,
        GAME,
        PlayerId::new(player_out),
        PlayerId::new(player_in),
        Minute::new(minute),
    )
}

pub fn card(id: i64, player: i64, minute: u8, kind: CardKind) -> Card {
    Card::new(id, GAME, PlayerId::new(player), Minute::new(minute), kind)
}

/// Both clubs fully rostered: club A fields goalkeeper 1, defenders 2
/// and 3, midfielder 4 and forward 5; club B fields goalkeeper 11,
/// defenders 12 and 13, midfielder 14 and forward 15.
pub fn standard_memberships() -> Vec<RosterMembership> {
    vec![
        membership(1, CLUB_A, Position::Goalkeeper),
        membership(2, CLUB_A, Position::Defender),
        membership(3, CLUB_A, Position::Defender),
        membership(4, CLUB_A, Position::Midfielder),
        membership(5, CLUB_A, Position::Forward),
        membership(11, CLUB_B, Position::Goalkeeper),
        membership(12, CLUB_B, Position::Defender),
        membership(13, CLUB_B, Position::Defender),
        membership(14, CLUB_B, Position::Midfielder),
        membership(15, CLUB_B, Position::Forward),
    ]
}

/// Starting lineups naming every standard roster player.
pub fn standard_lineups() -> Vec<Lineup> {
    [1, 2, 3, 4, 5, 11, 12, 13, 14, 15]
        .iter()
        .enumerate()
        .map(|(index, &player)| lineup(i64::try_from(index).unwrap() + 1, player))
        .collect()
}

/// Builds a snapshot over the standard rosters and lineups.
pub fn snapshot_with(
    game: Game,
    goals: Vec<Goal>,
    cards: Vec<Card>,
    substitutions: Vec<Substitution>,
) -> GameSnapshot {
    GameSnapshot::new(
        game,
        standard_lineups(),
        goals,
        cards,
        substitutions,
        standard_memberships(),
    )
    .unwrap()
}
