// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ClubId, Game, GameId, GameStatus, LeagueId, Season, Side, Week};
use time::{Date, Month};

fn test_game(status: GameStatus) -> Game {
    Game::new(
        GameId::new(1),
        LeagueId::new(10),
        ClubId::new(100),
        ClubId::new(200),
        Season::new(2026),
        Week::new(7),
        Date::from_calendar_date(2026, Month::March, 7).unwrap(),
        status,
    )
}

#[test]
fn test_side_of_resolves_both_clubs() {
    let game = test_game(GameStatus::Active);

    assert_eq!(game.side_of(ClubId::new(100)), Some(Side::Home));
    assert_eq!(game.side_of(ClubId::new(200)), Some(Side::Away));
    assert_eq!(game.side_of(ClubId::new(300)), None);
}

#[test]
fn test_involves() {
    let game = test_game(GameStatus::Active);

    assert!(game.involves(ClubId::new(100)));
    assert!(game.involves(ClubId::new(200)));
    assert!(!game.involves(ClubId::new(300)));
}

#[test]
fn test_opponent_of() {
    let game = test_game(GameStatus::Active);

    assert_eq!(game.opponent_of(ClubId::new(100)), Some(ClubId::new(200)));
    assert_eq!(game.opponent_of(ClubId::new(200)), Some(ClubId::new(100)));
    assert_eq!(game.opponent_of(ClubId::new(300)), None);
}

#[test]
fn test_result_is_dash_until_closed() {
    let game = test_game(GameStatus::Evaluated);
    assert_eq!(game.result(2, 1), "-");
}

#[test]
fn test_result_renders_score_once_closed() {
    let game = test_game(GameStatus::Closed);
    assert_eq!(game.result(2, 1), "2 - 1");
}
